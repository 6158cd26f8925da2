use crate::parser::{
    error::{Error, InvalidNumber, UnexpectedEof, UnexpectedToken},
    token::{Name, Number},
    Parse,
    Parser,
};
use crate::tokenizer::TokenKind;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal. Numbers are unsigned decimals, such as `4`, `2.45` or `.5`, and are
/// represented here as `f64`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the number literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl<'source> Parse<'source> for LitNum {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let num = input.try_parse::<Number>()?;
        match num.lexeme.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self { value, span: num.span }),
            _ => Err(Error::new_fatal(vec![num.span], InvalidNumber {
                lexeme: num.lexeme.to_owned(),
            })),
        }
    }
}

impl std::fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A symbol literal, used to represent variables. Symbols consist of letters only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl<'source> Parse<'source> for LitSym {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let token = input.try_parse::<Name>()?;
        Ok(Self {
            name: token.lexeme.to_owned(),
            span: token.span,
        })
    }
}

impl std::fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Represents a literal value.
///
/// A literal is any value that is written directly into the source code: a number or a symbol.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A number literal.
    Number(LitNum),

    /// A symbol / identifier literal.
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Symbol(name) => name.span.clone(),
        }
    }
}

impl<'source> Parse<'source> for Literal {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let (kind, span) = match input.peek_token() {
            Some(token) => (token.kind, token.span.clone()),
            None => return Err(input.error(UnexpectedEof)),
        };

        match kind {
            TokenKind::Number => input.try_parse::<LitNum>().map(Literal::Number),
            TokenKind::Name => input.try_parse::<LitSym>().map(Literal::Symbol),
            found => Err(Error::new(vec![span], UnexpectedToken {
                expected: &[TokenKind::Number, TokenKind::Name],
                found,
            })),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Number(num) => num.fmt(f),
            Literal::Symbol(sym) => sym.fmt(f),
        }
    }
}
