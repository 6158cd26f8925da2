//! Canonical sums of monomials.

use expresso_error::Error;
use log::debug;
use std::{cmp::Reverse, collections::HashMap, fmt};
use super::{
    error::CoefficientOverflow,
    expr::Expression,
    term::{Exponents, PolynomialTerm},
};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A polynomial in canonical form: a list of pairwise unequal [`PolynomialTerm`]s in canonical
/// order.
///
/// Terms are ordered by descending maximum exponent, with constant terms last. Terms with the
/// same maximum exponent keep the order they were first seen in.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Polynomial {
    terms: Vec<PolynomialTerm>,
}

impl Polynomial {
    /// Creates a polynomial from any list of terms, combining equal terms and sorting them into
    /// canonical order.
    pub fn new(terms: impl IntoIterator<Item = PolynomialTerm>) -> Self {
        Self { terms: combine(terms) }
    }

    /// Creates a polynomial from an expanded expression. See [`extract_terms`].
    ///
    /// Returns a [`CoefficientOverflow`] error if a coefficient is not finite after combining.
    pub fn from_expanded(expr: &Expression) -> Result<Self, Error> {
        Self::new(extract_terms(expr)?).check_finite()
    }

    /// Returns the terms of the polynomial, in canonical order.
    pub fn terms(&self) -> &[PolynomialTerm] {
        &self.terms
    }

    /// Differentiates the polynomial term by term with respect to the given variable.
    pub fn derivative(&self, variable: &str) -> Self {
        Self::new(self.terms.iter().map(|term| term.derivative(variable)))
    }

    /// Returns a [`CoefficientOverflow`] error if any coefficient is not finite.
    pub(crate) fn check_finite(self) -> Result<Self, Error> {
        if self.terms.iter().all(|term| term.coefficient().is_finite()) {
            Ok(self)
        } else {
            Err(Error::new(Vec::new(), CoefficientOverflow))
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.terms.iter().filter(|term| !term.is_zero());
        match iter.next() {
            Some(term) => {
                write!(f, "{}", term)?;
                for term in iter {
                    write!(f, "+{}", term)?;
                }
                Ok(())
            },
            None => write!(f, "{}", PolynomialTerm::zero()),
        }
    }
}

/// Splits an expanded expression into its terms, from left to right.
///
/// Every operand of the top-level additions becomes one [`PolynomialTerm`]. Returns a fatal error
/// if one of them is not a product of literals.
pub fn extract_terms(expr: &Expression) -> Result<Vec<PolynomialTerm>, Error> {
    let mut terms = Vec::new();
    let mut stack = vec![expr];
    while let Some(expr) = stack.pop() {
        match expr {
            Expression::Add(lhs, rhs) => {
                stack.push(rhs);
                stack.push(lhs);
            },
            product => terms.push(PolynomialTerm::from_product(product)?),
        }
    }
    Ok(terms)
}

/// Combines equal terms by adding their coefficients, then sorts the result into canonical
/// order.
///
/// Each group of equal terms is represented by the first term of the group, so the variable order
/// of that term is kept. Coefficients are added in input order.
pub fn combine(terms: impl IntoIterator<Item = PolynomialTerm>) -> Vec<PolynomialTerm> {
    let mut combined: Vec<PolynomialTerm> = Vec::new();
    let mut groups: HashMap<Exponents, usize> = HashMap::new();
    let mut count = 0usize;

    for term in terms {
        count += 1;
        match groups.get(term.exponents()) {
            Some(&index) => combined[index].absorb(&term),
            None => {
                groups.insert(term.exponents().clone(), combined.len());
                combined.push(term);
            },
        }
    }

    let mut combined = combined.into_iter()
        .map(|term| PolynomialTerm::new(term.coefficient(), term.exponents().clone()))
        .collect::<Vec<_>>();
    combined.sort_by_key(|term| (term.is_constant(), Reverse(term.max_exponent())));

    debug!("combined {} terms into {}", count, combined.len());
    combined
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use crate::symbolic::expand::expand;
    use expresso_parser::parser::{ast::Expr, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(source: &str) -> Expression {
        Parser::new(source).try_parse_full::<Expr>().unwrap().into()
    }

    fn polynomial(source: &str) -> Polynomial {
        Polynomial::from_expanded(&expand(parse(source))).unwrap()
    }

    #[test]
    fn extract_left_to_right() {
        let terms = extract_terms(&parse("x + 2*y + 3")).unwrap();
        let rendered = terms.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        assert_eq!(rendered, vec!["x", "2.0*y", "3.0"]);
    }

    #[test]
    fn extract_rejects_unexpanded() {
        let err = extract_terms(&parse("x + y*(z + 1)")).unwrap_err();
        assert!(err.fatal);
    }

    #[test]
    fn combine_keeps_first_representative() {
        let p = polynomial("y*x + 2*x*y");
        assert_eq!(p.terms().len(), 1);
        assert_float_relative_eq!(p.terms()[0].coefficient(), 3.0);
        assert_eq!(p.to_string(), "3.0*y*x");
    }

    #[test]
    fn canonical_order() {
        // constants last, then descending maximum exponent, ties in first-seen order
        let p = polynomial("3 + x*y + z*z*z + x*x*x + w");
        assert_eq!(p.to_string(), "z*z*z+x*x*x+x*y+w+3.0");
    }

    #[test]
    fn zero_terms_are_skipped() {
        assert_eq!(polynomial("0 + foo").to_string(), "foo");
        assert_eq!(polynomial("0*x + 0*y").to_string(), "0.0");
        assert_eq!(Polynomial::default().to_string(), "0.0");
    }

    #[test]
    fn zero_combines_with_constants() {
        let p = polynomial("0.0*x+1.0");
        assert_eq!(p.terms().len(), 1);
        assert_eq!(p.to_string(), "1.0");
    }

    #[test]
    fn derivative_keeps_distinct_terms() {
        // different monomials stay apart after differentiation; `y*y` sorts first before
        // differentiating, and the tie between `2.0*y` and `x` keeps that order
        let p = polynomial("x*y + y*y").derivative("y");
        assert_eq!(p.to_string(), "2.0*y+x");

        let p = polynomial("x*y + y*y").derivative("x");
        assert_eq!(p.to_string(), "y");
    }

    #[test]
    fn overflowing_sum_is_rejected() {
        let big = format!("1{}", "0".repeat(308));
        let err = Polynomial::from_expanded(&parse(&format!("{0}*x + {0}*x", big))).unwrap_err();
        assert_eq!(err.kind_as::<CoefficientOverflow>(), Some(&CoefficientOverflow));

        assert!(Polynomial::from_expanded(&parse(&format!("{0}*x + {0}*y", big))).is_ok());
    }

    #[test]
    fn coefficients_add_in_order() {
        let p = polynomial("food*food + food*food + 2.45*(food*food)");
        assert_float_relative_eq!(p.terms()[0].coefficient(), 4.45);
        assert_eq!(p.derivative("food").to_string(), "8.9*food");
    }
}
