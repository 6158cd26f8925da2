//! Kinds of errors that can occur while parsing an expression.

use ariadne::Fmt;
use expresso_attrs::ErrorKind;
use expresso_error::EXPR;
use crate::tokenizer::TokenKind;

pub use expresso_error::Error;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of file",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of file",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = "terms must be joined with `+` or `*`",
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", self.expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", self.found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// An operator that the language does not support was used.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unsupported operator `{}`", self.op),
    labels = ["this operator"],
    help = format!("only {} and {} are supported", "addition (`+`)".fg(EXPR), "multiplication (`*`)".fg(EXPR)),
)]
pub struct UnsupportedOperator {
    /// The operator that was used.
    pub op: String,
}

/// A number literal could not be represented as a finite real number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid number",
    labels = [format!("`{}` is not a finite decimal number", self.lexeme)],
)]
pub struct InvalidNumber {
    /// The lexeme of the number.
    pub lexeme: String,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if self.opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// The expression is nested more deeply than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = ["parsing stopped here"],
    help = format!("at most {} levels of parentheses and chained operators are allowed", self.limit.to_string().fg(EXPR)),
)]
pub struct NestingTooDeep {
    /// The nesting limit of the parser.
    pub limit: usize,
}
