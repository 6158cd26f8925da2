//! Options that control how much work an operation is allowed to do.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Limits applied to an expression before it is expanded.
///
/// Expansion can grow a tree exponentially: `(a + b)*(c + d)*...` with `n` factors expands to
/// `2^n` terms. These limits let callers that accept untrusted input refuse such expressions
/// up front. The default options place no limits at all.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Options {
    /// The maximum number of terms the expanded expression may have. See
    /// [`Expression::term_count`] for how the number is computed.
    ///
    /// [`Expression::term_count`]: crate::symbolic::expr::Expression::term_count
    pub max_terms: Option<usize>,

    /// The maximum depth of the expression tree. See [`Expression::depth`].
    ///
    /// [`Expression::depth`]: crate::symbolic::expr::Expression::depth
    pub max_depth: Option<usize>,
}

impl Options {
    /// Wraps the given [`Options`] into a builder for further customization.
    pub fn into_builder(self) -> OptionsBuilder {
        OptionsBuilder(self)
    }
}

/// A builder for [`Options`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OptionsBuilder(Options);

impl OptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of terms. If [`None`], any number of terms is allowed.
    pub fn max_terms(mut self, max_terms: Option<usize>) -> Self {
        self.0.max_terms = max_terms;
        self
    }

    /// Sets the maximum tree depth. If [`None`], any depth is allowed.
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.0.max_depth = max_depth;
        self
    }

    /// Builds the [`Options`].
    pub fn build(self) -> Options {
        self.0
    }
}

impl From<OptionsBuilder> for Options {
    fn from(builder: OptionsBuilder) -> Self {
        builder.build()
    }
}
