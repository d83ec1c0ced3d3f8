//! Error type for semigroup construction and queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error type for precondition failures.
///
/// Lookups that merely fail to find something (`position`, `at`,
/// `sorted_position`) return `Option`/`UNDEFINED` instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemigroupError {
    /// The generating set was empty.
    EmptyGeneratingSet,
    /// Two generators had different degrees.
    DegreeMismatch {
        /// Degree of the first generator.
        expected: usize,
        /// Degree of the offending generator.
        found: usize,
    },
}

impl fmt::Display for SemigroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemigroupError::EmptyGeneratingSet => {
                write!(f, "at least one generator is required")
            }
            SemigroupError::DegreeMismatch { expected, found } => {
                write!(
                    f,
                    "generators must have equal degree (expected {}, found {})",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for SemigroupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            SemigroupError::EmptyGeneratingSet.to_string(),
            "at least one generator is required"
        );
        assert_eq!(
            SemigroupError::DegreeMismatch {
                expected: 3,
                found: 5
            }
            .to_string(),
            "generators must have equal degree (expected 3, found 5)"
        );
    }
}
