//! Symbolic differentiation of polynomial expressions.

use crate::options::Options;
use expresso_error::Error;
use log::trace;
use super::{
    expand::expand_with,
    expr::{Expression, Variable},
    polynomial::Polynomial,
};

/// Differentiates the expression with respect to the given variable.
///
/// The expression is expanded and reduced to canonical form first, so that equal monomials are
/// only differentiated once. The derivative of each monomial is then taken, and the results are
/// combined into canonical form again.
///
/// Fails if the expression exceeds the limits in the given [`Options`], or if a coefficient
/// overflows.
pub fn derivative(
    expr: Expression,
    variable: &Variable,
    options: &Options,
) -> Result<Polynomial, Error> {
    let expanded = expand_with(expr, options)?;
    let polynomial = Polynomial::from_expanded(&expanded)?;
    trace!("differentiating {} with respect to {}", polynomial, variable);
    polynomial.derivative(variable.name()).check_finite()
}
