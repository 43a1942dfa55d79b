//! Rename operations.
//!
//! [`PathNormalizer`] performs the traversal; [`RunSummary`] reports what a
//! run did (or, for a dry run, would have done).

mod normalizer;

use std::fmt;

use crate::NormalizationForm;

pub use normalizer::PathNormalizer;

/// Outcome of a normalizer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Form the run normalized to.
    pub form: NormalizationForm,
    /// Whether renames were only simulated.
    pub dry_run: bool,
    /// Number of entries examined.
    pub visited: usize,
    /// Number of entries renamed, or that would be renamed in a dry run.
    pub renamed: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.renamed == 1 { "entry" } else { "entries" };
        let verb = if self.dry_run {
            "would be renamed"
        } else {
            "renamed"
        };
        write!(
            f,
            "{} {noun} {verb} to {} ({} examined)",
            self.renamed, self.form, self.visited
        )
    }
}
