//! Error types for the diff crate.

use std::fmt;

/// Which input of a comparison an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Original,
    Modified,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => write!(f, "original"),
            Self::Modified => write!(f, "modified"),
        }
    }
}

/// Errors that can occur during a comparison.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// An input exceeded one of the engine's size guards.
    #[error("{side} text is too large to compare: {actual} {unit} (limit {limit} {unit})")]
    InputTooLarge {
        side: Side,
        limit: usize,
        actual: usize,
        unit: &'static str,
    },

    /// The texts differ by more lines than the edit budget can search.
    #[error(
        "texts are too different to compare: more than {max_distance} changed lines \
         in a {lines}-line region (edit budget {budget})"
    )]
    TooManyChanges {
        lines: usize,
        max_distance: usize,
        budget: u64,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
