use crate::parser::{
    ast::{binary::Binary, literal::Literal, paren::Paren},
    error::{Error, UnexpectedEof, UnexpectedToken, UnsupportedOperator},
    Parse,
    Parser,
    Precedence,
};
use crate::tokenizer::TokenKind;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression in the language.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    Literal(Literal),
    Paren(Paren),
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// If this expression is an [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn innermost(&self) -> &Expr {
        match self {
            Expr::Paren(paren) => paren.innermost(),
            expr => expr,
        }
    }

    /// Consuming version of [`Expr::innermost`].
    pub fn into_innermost(self) -> Expr {
        match self {
            Expr::Paren(paren) => paren.into_innermost(),
            expr => expr,
        }
    }
}

impl<'source> Parse<'source> for Expr {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let lhs = input.try_parse::<Primary>()?.into();
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}

/// Represents a primary expression in the language. A primary expression is an operand of a
/// binary operator: a literal or a parenthesized expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    Literal(Literal),
    Paren(Paren),
}

impl Primary {
    /// Returns the span of the primary expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Primary::Literal(literal) => literal.span(),
            Primary::Paren(paren) => paren.span(),
        }
    }
}

impl<'source> Parse<'source> for Primary {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let (kind, span, lexeme) = match input.peek_token() {
            Some(token) => (token.kind, token.span.clone(), token.lexeme),
            None => return Err(input.error(UnexpectedEof)),
        };

        match kind {
            TokenKind::Number | TokenKind::Name => input.try_parse::<Literal>().map(Primary::Literal),
            TokenKind::OpenParen => input.try_parse::<Paren>().map(Primary::Paren),
            TokenKind::UnsupportedOp => Err(Error::new_fatal(vec![span], UnsupportedOperator {
                op: lexeme.to_owned(),
            })),
            found => Err(Error::new(vec![span], UnexpectedToken {
                expected: &[TokenKind::Number, TokenKind::Name, TokenKind::OpenParen],
                found,
            })),
        }
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Self::Literal(literal),
            Primary::Paren(paren) => Self::Paren(paren),
        }
    }
}
