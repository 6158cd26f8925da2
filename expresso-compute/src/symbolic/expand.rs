//! Expansion of expressions into a sum of products.
//!
//! Expansion repeatedly distributes multiplication over addition, until no multiplication has an
//! addition beneath it. The result is algebraically equivalent to the input, and every product in
//! it is a product of literals only.
//!
//! ```
//! use expresso_compute::symbolic::{expand::expand, expr::Expression};
//! use expresso_parser::parser::{ast::Expr, Parser};
//!
//! let expr: Expression = Parser::new("x*(y + 2)").try_parse_full::<Expr>().unwrap().into();
//! assert_eq!(expand(expr).to_string(), "(x*y) + (x*2.0)");
//! ```

use crate::options::Options;
use expresso_error::Error;
use log::{debug, trace};
use super::{
    error::{TooDeep, TooManyTerms},
    expr::Expression,
};

/// Expands the given expression into a sum of products.
///
/// A product `l*r` is expanded by first expanding both operands. If the expanded right operand is
/// a sum `rl + rr`, the result is `l*rl + l*rr`; otherwise, if the expanded left operand is a sum
/// `ll + lr`, the result is `r*ll + r*lr`. Each of the new products is expanded in turn.
///
/// The number of terms in the result can be exponential in the depth of the input. Use
/// [`expand_with`] to reject inputs that are too large.
pub fn expand(expr: Expression) -> Expression {
    match expr {
        Expression::Constant(_) | Expression::Variable(_) => expr,
        Expression::Add(lhs, rhs) => Expression::add(expand(*lhs), expand(*rhs)),
        Expression::Mul(lhs, rhs) => distribute(expand(*lhs), expand(*rhs)),
    }
}

/// Multiplies two expanded expressions, distributing the product over a sum at the top of either
/// operand. The right operand is distributed over first.
fn distribute(lhs: Expression, rhs: Expression) -> Expression {
    match (lhs, rhs) {
        (lhs, Expression::Add(rl, rr)) => Expression::add(
            distribute(lhs.clone(), *rl),
            distribute(lhs, *rr),
        ),
        (Expression::Add(ll, lr), rhs) => Expression::add(
            distribute(rhs.clone(), *ll),
            distribute(rhs, *lr),
        ),
        (lhs, rhs) => Expression::mul(lhs, rhs),
    }
}

/// Checks the expression against the limits in the given [`Options`], then expands it.
///
/// The returned error has no spans; the caller is expected to attach the span of the input.
pub fn expand_with(expr: Expression, options: &Options) -> Result<Expression, Error> {
    let depth = expr.depth();
    if let Some(limit) = options.max_depth {
        if depth > limit {
            return Err(Error::new(Vec::new(), TooDeep { depth, limit }));
        }
    }

    let terms = expr.term_count();
    if let Some(limit) = options.max_terms {
        if terms > limit {
            return Err(Error::new(Vec::new(), TooManyTerms { terms, limit }));
        }
    }

    debug!("expanding expression of depth {} into {} terms", depth, terms);
    trace!("before expansion: {}", expr);
    let expanded = expand(expr);
    trace!("after expansion: {}", expanded);
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use crate::options::OptionsBuilder;
    use expresso_parser::parser::{ast::Expr, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(source: &str) -> Expression {
        Parser::new(source).try_parse_full::<Expr>().unwrap().into()
    }

    /// Returns true if no product in the expression has a sum beneath it.
    fn is_sum_of_products(expr: &Expression) -> bool {
        match expr {
            Expression::Add(lhs, rhs) => is_sum_of_products(lhs) && is_sum_of_products(rhs),
            product => !contains_sum(product),
        }
    }

    fn contains_sum(expr: &Expression) -> bool {
        match expr {
            Expression::Add(..) => true,
            Expression::Mul(lhs, rhs) => contains_sum(lhs) || contains_sum(rhs),
            _ => false,
        }
    }

    #[test]
    fn literals_are_unchanged() {
        assert_eq!(expand(parse("x")), parse("x"));
        assert_eq!(expand(parse("4.5")), parse("4.5"));
    }

    #[test]
    fn sums_are_unchanged() {
        assert_eq!(expand(parse("x + y*z + 3")), parse("x + y*z + 3"));
    }

    #[test]
    fn distribute_right_operand() {
        assert_eq!(expand(parse("x*(y + z)")), parse("x*y + x*z"));
    }

    #[test]
    fn distribute_left_operand() {
        // the right operand becomes the left factor
        assert_eq!(expand(parse("(y + z)*x")), parse("x*y + x*z"));
    }

    #[test]
    fn distribute_both_operands() {
        assert_eq!(
            expand(parse("(a + b)*(c + d)")),
            parse("((c*a) + (c*b)) + ((d*a) + (d*b))"),
        );
    }

    #[test]
    fn nested() {
        let expanded = expand(parse("2.0*(x*y + x*(y*x + x*x*x))"));
        assert!(is_sum_of_products(&expanded));
        assert_eq!(expanded.term_count(), 3);
        assert_eq!(expanded, parse("2*(x*y) + (2*(x*(y*x)) + 2*(x*(x*(x*x))))"));
    }

    #[test]
    fn term_count_matches_expansion() {
        for source in ["(a + b)*(c + d + e)*(f + g)", "x*(y + (z + 1)*(w + 2))", "((a + b))"] {
            let expr = parse(source);
            let predicted = expr.term_count();
            let expanded = expand(expr);
            assert!(is_sum_of_products(&expanded));
            assert_eq!(expanded.term_count(), predicted, "{}", source);
        }
    }

    #[test]
    fn limits() {
        let options = OptionsBuilder::new().max_terms(Some(7)).build();
        let err = expand_with(parse("(a + b)*(c + d)*(e + f)"), &options).unwrap_err();
        assert_eq!(err.kind_as::<TooManyTerms>(), Some(&TooManyTerms { terms: 8, limit: 7 }));

        let options = OptionsBuilder::new().max_depth(Some(2)).build();
        let err = expand_with(parse("x*y*z"), &options).unwrap_err();
        assert_eq!(err.kind_as::<TooDeep>(), Some(&TooDeep { depth: 3, limit: 2 }));

        let options = OptionsBuilder::new().max_terms(Some(8)).max_depth(Some(5)).build();
        assert!(expand_with(parse("(a + b)*(c + d)*(e + f)"), &options).is_ok());
    }

    #[test]
    fn unlimited_by_default() {
        let expanded = expand_with(parse("(a + b)*(a + b)*(a + b)*(a + b)"), &Options::default());
        assert_eq!(expanded.unwrap().term_count(), 16);
    }
}
