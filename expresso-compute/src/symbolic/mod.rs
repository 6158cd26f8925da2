//! Algebraic manipulation of polynomial expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are represented as a binary tree of [`Expression`] nodes. It's
//! similar to the [`expresso_parser::parser::ast::Expr`] nodes produced by [`expresso_parser`],
//! without parentheses or span information. Conversion is done with the [`From`] trait.
//!
//! # Canonical form
//!
//! Both operations in this module reduce an expression to a [`Polynomial`], a canonical sum of
//! monomials:
//!
//! 1. The expression is [expanded](expand::expand) into a sum of products, by distributing
//!    multiplication over addition.
//! 2. Every product is turned into a [`PolynomialTerm`](term::PolynomialTerm): a coefficient and
//!    a set of variables with exponents.
//! 3. Terms with the same variables and exponents are combined, and the result is sorted.
//!
//! ```
//! use expresso_compute::{options::Options, symbolic::{expr::Expression, simplify}};
//! use expresso_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("4*(x*y + y*x + x*x*x)");
//! let expr: Expression = parser.try_parse_full::<Expr>().unwrap().into();
//!
//! let simplified = simplify(expr, &Options::default()).unwrap();
//! assert_eq!(simplified.to_string(), "4.0*x*x*x+8.0*x*y");
//! ```
//!
//! Differentiation additionally maps every term of the canonical form to its derivative, then
//! combines and sorts the result again. See [`derivative()`].

pub mod derivative;
pub mod error;
pub mod expand;
pub mod expr;
pub mod polynomial;
pub mod term;

pub use derivative::derivative;
pub use expr::Expression;
pub use polynomial::Polynomial;

use crate::options::Options;
use expand::expand_with;
use expresso_error::Error;

/// Reduces the expression to canonical form.
///
/// Fails if the expression exceeds the limits in the given [`Options`].
pub fn simplify(expr: Expression, options: &Options) -> Result<Polynomial, Error> {
    let expanded = expand_with(expr, options)?;
    Polynomial::from_expanded(&expanded)
}
