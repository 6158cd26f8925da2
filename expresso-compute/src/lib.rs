//! Simplification and differentiation of polynomial expressions.
//!
//! This crate takes expressions written with constants, variables, `+` and `*`, and reduces them
//! to a canonical sum of monomials, optionally differentiating them first. The top-level
//! functions work on strings:
//!
//! ```
//! use expresso_compute::{differentiate, simplify};
//!
//! assert_eq!(simplify("4*(x*y + y*x + x*x*x)").unwrap(), "4.0*x*x*x+8.0*x*y");
//! assert_eq!(differentiate("4*(x*y + y*x + x*x*x)", "x").unwrap(), "12.0*x*x+8.0*y");
//! ```
//!
//! Canonical output writes every number with a fractional part (`13.0`), joins terms with `+`
//! and contains no whitespace or parentheses. Terms are sorted by descending highest exponent,
//! with the constant term last.
//!
//! Expansion can produce exponentially many terms. Callers handling untrusted input should use
//! [`simplify_with`] and [`differentiate_with`] with limits set in [`Options`].
//!
//! For finer control, see the [`symbolic`] module, which works on parsed expression trees.

pub mod fmt;
pub mod options;
pub mod symbolic;

pub use expresso_error::Error;
pub use options::{Options, OptionsBuilder};

use expresso_parser::parser::{ast::Expr, Parser, DEFAULT_MAX_DEPTH};
use log::debug;
use symbolic::{error::InvalidVariable, expr::Variable, Expression};

/// Parses the input into an [`Expression`].
///
/// The parser rejects input nested more deeply than [`Options::max_depth`], or than
/// [`DEFAULT_MAX_DEPTH`] if no limit is set, before building the tree.
pub fn parse(input: &str, options: &Options) -> Result<Expression, Error> {
    let max_depth = options.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
    Parser::with_max_depth(input, max_depth)
        .try_parse_full::<Expr>()
        .map(Expression::from)
}

/// Errors from the symbolic engine are not tied to a specific part of the input; point them at
/// the whole input.
fn whole_input(input: &str) -> impl FnOnce(Error) -> Error + '_ {
    move |err| {
        if err.spans.is_empty() {
            Error { spans: vec![0..input.len()], ..err }
        } else {
            err
        }
    }
}

/// Simplifies the given expression to canonical form, with no limits.
pub fn simplify(input: &str) -> Result<String, Error> {
    simplify_with(input, &Options::default())
}

/// Simplifies the given expression to canonical form.
///
/// Fails with a parse error if the input is not a valid expression, or with a limit error if
/// the expression exceeds the limits in the given [`Options`].
pub fn simplify_with(input: &str, options: &Options) -> Result<String, Error> {
    debug!("simplify: {:?}", input);
    let expr = parse(input, options)?;
    symbolic::simplify(expr, options)
        .map(|polynomial| polynomial.to_string())
        .map_err(whole_input(input))
}

/// Differentiates the given expression with respect to `variable`, with no limits.
pub fn differentiate(input: &str, variable: &str) -> Result<String, Error> {
    differentiate_with(input, variable, &Options::default())
}

/// Differentiates the given expression with respect to `variable`, returning the derivative in
/// canonical form.
///
/// Fails with a parse error if the input is not a valid expression, with an
/// [`InvalidVariable`] error if `variable` is not made of letters only, or with a limit error if
/// the expression exceeds the limits in the given [`Options`].
pub fn differentiate_with(input: &str, variable: &str, options: &Options) -> Result<String, Error> {
    debug!("differentiate: {:?} with respect to {:?}", input, variable);
    let expr = parse(input, options)?;
    let variable = Variable::new(variable)
        .ok_or_else(|| Error::new(Vec::new(), InvalidVariable { name: variable.to_owned() }))?;

    symbolic::derivative(expr, &variable, options)
        .map(|polynomial| polynomial.to_string())
        .map_err(whole_input(input))
}
