//! Errors that can occur while simplifying or differentiating an expression.

use ariadne::Fmt;
use expresso_attrs::ErrorKind;
use expresso_error::EXPR;

/// The variable to differentiate with respect to is not a valid variable name.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate with respect to `{}`", self.name),
    help = format!("variable names consist of {} only, such as `x` or `foo`", "letters".fg(EXPR)),
)]
pub struct InvalidVariable {
    /// The rejected variable name.
    pub name: String,
}

/// Term extraction reached a node that cannot be part of a product of literals. This can only
/// happen if the expression was not fully expanded, and indicates a bug.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expanded expression is not a sum of products",
    labels = [format!("found `{}` inside a product", self.found)],
    help = "this is a bug; please report it along with the input expression",
)]
pub struct NotSumOfProducts {
    /// The offending subexpression, rendered.
    pub found: String,
}

/// The expanded form of the expression would have more terms than allowed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is too large to expand",
    labels = [format!("this expands to {} terms", self.terms)],
    help = format!("the limit is {} terms; try factoring less deeply nested products", self.limit.to_string().fg(EXPR)),
)]
pub struct TooManyTerms {
    /// The number of terms the expansion would produce (saturating at `usize::MAX`).
    pub terms: usize,

    /// The configured limit.
    pub limit: usize,
}

/// The expression is nested more deeply than allowed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = [format!("this expression has depth {}", self.depth)],
    help = format!("the limit is {}", self.limit.to_string().fg(EXPR)),
)]
pub struct TooDeep {
    /// The depth of the expression tree.
    pub depth: usize,

    /// The configured limit.
    pub limit: usize,
}

/// A coefficient grew too large to be represented as a finite number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "coefficient is too large",
    labels = ["a coefficient of this expression overflows"],
    help = format!("coefficients must stay below about {}", "1.8e308".fg(EXPR)),
)]
pub struct CoefficientOverflow;
