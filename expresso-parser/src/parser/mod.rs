pub mod ast;
pub mod error;
pub mod token;

use error::{
    Error,
    ExpectedEof,
    NestingTooDeep,
    UnclosedParenthesis,
    UnexpectedEof,
    UnsupportedOperator,
};
use expresso_error::ErrorKind;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// The nesting limit used by [`Parser::new`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// A high-level parser for the expression language. This is the type to use to parse a line of
/// input into an abstract syntax tree.
///
/// Parsing recurses once for every level of nesting, where both a parenthesis and an operator
/// whose right-hand side continues the chain (as in `x*x*x`) count as a level. Input nested more
/// deeply than the parser's limit is rejected with a fatal [`NestingTooDeep`] error.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The current nesting level.
    depth: usize,

    /// The maximum nesting level.
    max_depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source, with a nesting limit of [`DEFAULT_MAX_DEPTH`].
    pub fn new(source: &'source str) -> Self {
        Self::with_max_depth(source, DEFAULT_MAX_DEPTH)
    }

    /// Create a new parser for the given source, with the given nesting limit.
    pub fn with_max_depth(source: &'source str, max_depth: usize) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Creates a fatal error that points at the current token, or the end of the source code if
    /// the cursor is at the end of the stream.
    pub fn error_fatal(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new_fatal(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the next non-whitespace token without moving the cursor. Returns [`None`] if only
    /// whitespace remains.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor..]
            .iter()
            .find(|token| !token.is_whitespace())
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if !token.is_whitespace() {
                return Ok(token.clone());
            }
        }

        Err(self.error(UnexpectedEof))
    }

    /// Runs `f` one nesting level deeper. Returns a fatal [`NestingTooDeep`] error pointing at the
    /// next token instead if the nesting limit has been reached.
    pub(crate) fn nested<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        if self.depth >= self.max_depth {
            let span = self.peek_token().map_or(self.eof_span(), |token| token.span.clone());
            return Err(Error::new_fatal(vec![span], NestingTooDeep { limit: self.max_depth }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse<'source>>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Parses a value from the given stream of tokens without consuming anything, returning
    /// [`None`] if the value could not be parsed. The cursor is always restored.
    pub fn peek_parse<T: Parse<'source>>(&mut self) -> Option<T> {
        let start = self.cursor;
        let value = T::parse(self).ok();
        self.cursor = start;
        value
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser (trailing whitespace is allowed); if not, an error is returned that points
    /// at the leftover input.
    pub fn try_parse_full<T: Parse<'source>>(&mut self) -> Result<T, Error> {
        let value = self.try_parse::<T>()?;

        let Some(token) = self.peek_token() else {
            return Ok(value);
        };

        match token.kind {
            TokenKind::UnsupportedOp => Err(Error::new_fatal(
                vec![token.span.clone()],
                UnsupportedOperator { op: token.lexeme.to_owned() },
            )),
            TokenKind::CloseParen => Err(Error::new_fatal(
                vec![token.span.clone()],
                UnclosedParenthesis { opening: false },
            )),
            _ => Err(Error::new(
                vec![token.span.start..self.eof_span().end],
                ExpectedEof,
            )),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse<'source>: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error>;
}

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a op b op c` is parsed as `(a op b) op c`.
    Left,

    /// `a op b op c` is parsed as `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`), which separates terms.
    Term,

    /// Precedence of multiplication (`*`), which separates factors.
    Factor,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{Binary, Expr, Literal, LitNum, LitSym, Paren};
    use error::{EmptyParenthesis, InvalidNumber, UnexpectedToken};
    use token::op::{BinOp, BinOpKind};

    fn parse(source: &str) -> Result<Expr, Error> {
        Parser::new(source).try_parse_full::<Expr>()
    }

    fn num(value: f64, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Number(LitNum { value, span }))
    }

    fn sym(name: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Symbol(LitSym { name: name.to_string(), span }))
    }

    #[test]
    fn literal_number() {
        assert_eq!(parse("16").unwrap(), num(16.0, 0..2));
        assert_eq!(parse("3.14").unwrap(), num(3.14, 0..4));
        assert_eq!(parse("  .5  ").unwrap(), num(0.5, 2..4));
    }

    #[test]
    fn literal_symbol() {
        assert_eq!(parse("abc").unwrap(), sym("abc", 0..3));
    }

    #[test]
    fn simple_sum() {
        assert_eq!(parse("3 + 2.4").unwrap(), Expr::Binary(Binary {
            lhs: Box::new(num(3.0, 0..1)),
            op: BinOp { kind: BinOpKind::Add, span: 2..3 },
            rhs: Box::new(num(2.4, 4..7)),
            span: 0..7,
        }));
    }

    #[test]
    fn product_binds_tighter() {
        // 3*x+2.4
        assert_eq!(parse("3*x+2.4").unwrap(), Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(num(3.0, 0..1)),
                op: BinOp { kind: BinOpKind::Mul, span: 1..2 },
                rhs: Box::new(sym("x", 2..3)),
                span: 0..3,
            })),
            op: BinOp { kind: BinOpKind::Add, span: 3..4 },
            rhs: Box::new(num(2.4, 4..7)),
            span: 0..7,
        }));
    }

    #[test]
    fn operators_are_right_associative() {
        // x*(y*z)
        assert_eq!(parse("x*y*z").unwrap(), Expr::Binary(Binary {
            lhs: Box::new(sym("x", 0..1)),
            op: BinOp { kind: BinOpKind::Mul, span: 1..2 },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(sym("y", 2..3)),
                op: BinOp { kind: BinOpKind::Mul, span: 3..4 },
                rhs: Box::new(sym("z", 4..5)),
                span: 2..5,
            })),
            span: 0..5,
        }));
    }

    #[test]
    fn mixed_chain_groups_to_the_right() {
        // a+((b*c)+d)
        assert_eq!(parse("a+b*c+d").unwrap(), Expr::Binary(Binary {
            lhs: Box::new(sym("a", 0..1)),
            op: BinOp { kind: BinOpKind::Add, span: 1..2 },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Binary(Binary {
                    lhs: Box::new(sym("b", 2..3)),
                    op: BinOp { kind: BinOpKind::Mul, span: 3..4 },
                    rhs: Box::new(sym("c", 4..5)),
                    span: 2..5,
                })),
                op: BinOp { kind: BinOpKind::Add, span: 5..6 },
                rhs: Box::new(sym("d", 6..7)),
                span: 2..7,
            })),
            span: 0..7,
        }));
    }

    #[test]
    fn parenthesized() {
        assert_eq!(parse("(x)").unwrap(), Expr::Paren(Paren {
            expr: Box::new(sym("x", 1..2)),
            span: 0..3,
        }));
        assert_eq!(parse("(((x)))").unwrap().innermost(), &sym("x", 3..4));
    }

    #[test]
    fn accepted_inputs() {
        let inputs = [
            "3 + 2.4",
            "3 * x + 2.4",
            "3 * (x + 2.4030)",
            "((3 + 4) * x * x)",
            "foo + bar+baz",
            "(3+5*6)*4*3",
            "(3+5*6)*4*3+3",
            "abc",
            "(2*x    )+    (    y*x    )",
            "4 + 3 * x + 2 * x * x + 1 * x * x * (((x)))",
        ];

        for input in inputs {
            assert!(parse(input).is_ok(), "failed to parse {:?}", input);
        }
    }

    #[test]
    fn display_strips_whitespace() {
        assert_eq!(parse("(2*x    )+    (    y*x    )").unwrap().to_string(), "(2*x)+(y*x)");
        assert_eq!(parse("foo + bar+baz").unwrap().to_string(), "foo+bar+baz");
    }

    #[test]
    fn dangling_operator() {
        let err = parse("3 *").unwrap_err();
        assert!(err.kind_as::<UnexpectedEof>().is_some());
    }

    #[test]
    fn missing_close_paren() {
        let err = parse("( 3").unwrap_err();
        assert_eq!(err.kind_as::<UnclosedParenthesis>(), Some(&UnclosedParenthesis { opening: true }));
        assert_eq!(err.spans, vec![0..1]);
        assert!(err.fatal);
    }

    #[test]
    fn extra_close_paren() {
        let err = parse("3)").unwrap_err();
        assert_eq!(err.kind_as::<UnclosedParenthesis>(), Some(&UnclosedParenthesis { opening: false }));
        assert_eq!(err.spans, vec![1..2]);
    }

    #[test]
    fn juxtaposition_is_rejected() {
        let err = parse("3 x").unwrap_err();
        assert!(err.kind_as::<ExpectedEof>().is_some());
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn empty_input() {
        assert!(parse("").unwrap_err().kind_as::<UnexpectedEof>().is_some());
        assert!(parse("   ").unwrap_err().kind_as::<UnexpectedEof>().is_some());
    }

    #[test]
    fn empty_parens() {
        let err = parse("x + ()").unwrap_err();
        assert!(err.kind_as::<EmptyParenthesis>().is_some());
        assert_eq!(err.spans, vec![4..6]);
    }

    #[test]
    fn unsupported_operators() {
        for (input, op) in [("3 - x", "-"), ("x / 2", "/"), ("x^2", "^"), ("2 * -x", "-")] {
            let err = parse(input).unwrap_err();
            assert_eq!(
                err.kind_as::<UnsupportedOperator>(),
                Some(&UnsupportedOperator { op: op.to_string() }),
                "input {:?}",
                input,
            );
        }
    }

    #[test]
    fn unknown_symbol() {
        let err = parse("$").unwrap_err();
        assert_eq!(err.kind_as::<UnexpectedToken>(), Some(&UnexpectedToken {
            expected: &[TokenKind::Number, TokenKind::Name, TokenKind::OpenParen],
            found: TokenKind::Symbol,
        }));
    }

    #[test]
    fn lone_dot_is_not_a_number() {
        // `.` alone lexes as a symbol, not a number
        let err = parse("3 + .").unwrap_err();
        assert!(err.kind_as::<InvalidNumber>().is_none());
        assert!(err.kind_as::<UnexpectedToken>().is_some());
    }

    #[test]
    fn long_chain_is_rejected() {
        let source = format!("{}x", "x*".repeat(100_000));
        let err = parse(&source).unwrap_err();
        assert!(err.fatal);
        assert_eq!(err.kind_as::<NestingTooDeep>(), Some(&NestingTooDeep { limit: DEFAULT_MAX_DEPTH }));

        // the operator that would have started level 513
        assert_eq!(err.spans, vec![1027..1028]);
    }

    #[test]
    fn deep_parens_are_rejected() {
        let source = format!("{}x{}", "(".repeat(1000), ")".repeat(1000));
        let err = Parser::with_max_depth(&source, 16).try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.kind_as::<NestingTooDeep>(), Some(&NestingTooDeep { limit: 16 }));
    }

    #[test]
    fn nesting_limit() {
        assert!(Parser::with_max_depth("((x))", 2).try_parse_full::<Expr>().is_ok());
        assert!(Parser::with_max_depth("((x))", 1).try_parse_full::<Expr>().is_err());

        // the first operator of a chain does not nest
        assert!(Parser::with_max_depth("x*y*z", 1).try_parse_full::<Expr>().is_ok());
        assert!(Parser::with_max_depth("x*y*z*w", 1).try_parse_full::<Expr>().is_err());

        // an operator of lower precedence ends the chain instead of nesting
        assert!(Parser::with_max_depth("a*b + c*d", 1).try_parse_full::<Expr>().is_ok());
    }
}
