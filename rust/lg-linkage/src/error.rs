//! Error types for linkage assembly.

use thiserror::Error;

/// Errors that can occur while assembling a linkage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkageError {
    /// The requested rank is not among the ranked parses of the sentence.
    #[error("linkage {rank} requested, but only {available} are available")]
    RankOutOfRange { rank: usize, available: usize },

    /// Extraction produced a link whose endpoints do not fit the sentence.
    #[error("link {left}-{right} does not fit a sentence of {num_words} words")]
    LinkOutOfBounds {
        left: usize,
        right: usize,
        num_words: usize,
    },

    /// Extraction produced a chosen-disjunct table of the wrong length.
    #[error("expected {expected} chosen disjuncts, found {found}")]
    DisjunctCount { expected: usize, found: usize },

    /// A document of precomputed parses could not be read.
    #[error("invalid precomputed parses: {0}")]
    Parses(String),

    /// Parse options could not be read.
    #[error("invalid parse options: {0}")]
    Options(String),
}

impl From<serde_json::Error> for LinkageError {
    fn from(value: serde_json::Error) -> Self {
        LinkageError::Options(value.to_string())
    }
}
