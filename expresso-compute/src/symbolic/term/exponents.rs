use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::Serialize;

/// The variables of a monomial, each with a positive exponent.
///
/// Variables are kept in the order they were first inserted, which is the order they are
/// rendered in. Equality and hashing ignore that order: `x*y` and `y*x` have equal exponents.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Exponents(Vec<(String, u32)>);

impl Exponents {
    /// Creates an empty set of exponents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are no variables.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the exponent of the given variable, or `0` if it is absent.
    pub fn get(&self, name: &str) -> u32 {
        self.0.iter()
            .find(|(n, _)| n == name)
            .map_or(0, |(_, exp)| *exp)
    }

    /// Adds `exp` to the exponent of the given variable, inserting it at the end if it is absent.
    /// Adding a zero exponent does nothing.
    pub fn add(&mut self, name: &str, exp: u32) {
        if exp == 0 {
            return;
        }

        match self.0.iter_mut().find(|(n, _)| n == name) {
            Some((_, current)) => *current = current.saturating_add(exp),
            None => self.0.push((name.to_owned(), exp)),
        }
    }

    /// Sets the exponent of the given variable, keeping its position. A zero exponent removes the
    /// variable.
    pub fn set(&mut self, name: &str, exp: u32) {
        match self.0.iter().position(|(n, _)| n == name) {
            Some(index) if exp == 0 => {
                self.0.remove(index);
            },
            Some(index) => self.0[index].1 = exp,
            None if exp == 0 => (),
            None => self.0.push((name.to_owned(), exp)),
        }
    }

    /// Removes all variables.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns the largest exponent, or `0` if there are no variables.
    pub fn max(&self) -> u32 {
        self.0.iter().map(|(_, exp)| *exp).max().unwrap_or(0)
    }

    /// Returns an iterator over the variables and their exponents, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, exp)| (name.as_str(), *exp))
    }

    /// Returns the variables and exponents sorted by name. This is the identity of the monomial.
    pub fn key(&self) -> Vec<(&str, u32)> {
        let mut key = self.iter().collect::<Vec<_>>();
        key.sort_unstable();
        key
    }
}

impl PartialEq for Exponents {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.key() == other.key()
    }
}

impl Eq for Exponents {}

impl Hash for Exponents {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
