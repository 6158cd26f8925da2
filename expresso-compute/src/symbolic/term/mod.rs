//! Monomials: a coefficient multiplied by variables raised to positive integer powers.
//!
//! A [`PolynomialTerm`] is built from one product of an expanded expression, such as `2*x*y*x`
//! (which becomes `2.0*x*x*y`). Terms are **mathematically** compared: two terms are equal if
//! they have the same variables with the same exponents, regardless of their coefficients or the
//! order the variables were written in. Equal terms can be combined by adding their coefficients.

mod exponents;

pub use exponents::Exponents;

use crate::fmt::{fmt_real, Real};
use expresso_error::Error;
use std::fmt;
use super::{error::{CoefficientOverflow, NotSumOfProducts}, expr::Expression};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A canonical monomial.
///
/// The coefficient is never negative, and a term with a zero coefficient has no variables, so
/// there is exactly one zero term.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PolynomialTerm {
    coefficient: f64,
    exponents: Exponents,
}

impl PolynomialTerm {
    /// Creates a new term. If the coefficient is zero, the variables are dropped.
    pub fn new(coefficient: f64, mut exponents: Exponents) -> Self {
        if coefficient == 0.0 {
            exponents.clear();
        }

        Self {
            // `+ 0.0` turns `-0.0` into `0.0`
            coefficient: coefficient + 0.0,
            exponents,
        }
    }

    /// Returns the zero term.
    pub fn zero() -> Self {
        Self::new(0.0, Exponents::new())
    }

    /// Builds a term from a product of literals, such as `2*(x*(y*x))`.
    ///
    /// The product is walked left to right. Every constant multiplies into the coefficient, which
    /// starts at `1`, and every variable adds one to its exponent. Returns a fatal
    /// [`NotSumOfProducts`] error if an addition is found, which means the expression was not
    /// expanded, and a [`CoefficientOverflow`] error if the coefficient stops being finite.
    pub fn from_product(expr: &Expression) -> Result<Self, Error> {
        let mut coefficient = 1.0;
        let mut exponents = Exponents::new();

        let mut stack = vec![expr];
        while let Some(expr) = stack.pop() {
            match expr {
                Expression::Constant(constant) => {
                    coefficient *= constant.value();
                    if !coefficient.is_finite() {
                        return Err(Error::new(Vec::new(), CoefficientOverflow));
                    }
                },
                Expression::Variable(variable) => exponents.add(variable.name(), 1),
                Expression::Mul(lhs, rhs) => {
                    stack.push(rhs);
                    stack.push(lhs);
                },
                Expression::Add(..) => {
                    return Err(Error::new_fatal(Vec::new(), NotSumOfProducts {
                        found: expr.to_string(),
                    }));
                },
            }
        }

        Ok(Self::new(coefficient, exponents))
    }

    /// Returns the coefficient of the term.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Returns the variables of the term and their exponents.
    pub fn exponents(&self) -> &Exponents {
        &self.exponents
    }

    /// Returns true if this is the zero term.
    pub fn is_zero(&self) -> bool {
        self.coefficient == 0.0
    }

    /// Returns true if the term has no variables.
    pub fn is_constant(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Returns the largest exponent of any variable in the term, or `0` for a constant.
    pub fn max_exponent(&self) -> u32 {
        self.exponents.max()
    }

    /// Adds the coefficient of `other` to this term's coefficient. The terms are assumed to be
    /// equal.
    pub(crate) fn absorb(&mut self, other: &PolynomialTerm) {
        self.coefficient += other.coefficient;
    }

    /// Differentiates the term with respect to the given variable.
    ///
    /// If the variable does not appear in the term, the derivative is the zero term. Otherwise,
    /// the coefficient is multiplied by the exponent, and the exponent is decreased by one (which
    /// removes the variable if the exponent was one).
    pub fn derivative(&self, variable: &str) -> Self {
        let power = self.exponents.get(variable);
        if power == 0 {
            return Self::zero();
        }

        let mut exponents = self.exponents.clone();
        exponents.set(variable, power - 1);
        Self::new(self.coefficient * f64::from(power), exponents)
    }

    /// Writes the variables of the term, each repeated once per power and joined by `*`. If
    /// `leading` is true, the first variable is preceded by `*` too.
    fn fmt_variables(&self, f: &mut fmt::Formatter<'_>, mut leading: bool) -> fmt::Result {
        for (name, exp) in self.exponents.iter() {
            for _ in 0..exp {
                if leading {
                    write!(f, "*")?;
                }
                write!(f, "{}", name)?;
                leading = true;
            }
        }
        Ok(())
    }
}

/// Terms are equal when they are **mathematically** equal, i.e. they have the same variables
/// with the same exponents. The coefficients are ignored.
impl PartialEq for PolynomialTerm {
    fn eq(&self, other: &Self) -> bool {
        self.exponents == other.exponents
    }
}

impl Eq for PolynomialTerm {}

impl std::hash::Hash for PolynomialTerm {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.exponents.hash(state);
    }
}

impl fmt::Display for PolynomialTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            write!(f, "{}", Real(0.0))
        } else if self.is_constant() {
            fmt_real(f, self.coefficient)
        } else if self.coefficient == 1.0 {
            self.fmt_variables(f, false)
        } else {
            fmt_real(f, self.coefficient)?;
            self.fmt_variables(f, true)
        }
    }
}
