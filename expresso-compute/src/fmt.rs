//! Formatting of real numbers in canonical output.
//!
//! Every number in canonical output carries an explicit fractional part, so that `13` is written
//! as `13.0`. Otherwise the shortest representation that round-trips is used, which is what the
//! standard [`Display`] implementation of `f64` produces.

use std::fmt::{self, Display, Formatter, Write};

/// Writes the given number with an explicit fractional part.
///
/// Non-finite values are written as-is.
pub fn fmt_real<F: Write>(f: &mut F, n: f64) -> fmt::Result {
    let s = n.to_string();
    if n.is_finite() && !s.contains('.') {
        write!(f, "{}.0", s)
    } else {
        write!(f, "{}", s)
    }
}

/// A real number that displays with an explicit fractional part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Real(pub f64);

impl Display for Real {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_real(f, self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn integers_get_fraction() {
        assert_eq!(Real(13.0).to_string(), "13.0");
        assert_eq!(Real(0.0).to_string(), "0.0");
        assert_eq!(Real(1e16).to_string(), "10000000000000000.0");
    }

    #[test]
    fn fractions_are_shortest() {
        assert_eq!(Real(5.3).to_string(), "5.3");
        assert_eq!(Real(8.9).to_string(), "8.9");
        assert_eq!(Real(0.1 + 0.2).to_string(), "0.30000000000000004");
    }

    #[test]
    fn non_finite() {
        assert_eq!(Real(f64::INFINITY).to_string(), "inf");
    }
}
