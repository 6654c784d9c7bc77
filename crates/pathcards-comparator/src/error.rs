//! Error types for comparator operations

use thiserror::Error;

/// Errors that can occur while matching and classifying a card
///
/// All variants are scoped to a single inference card; batch processing logs
/// them and moves on.
#[derive(Error, Debug)]
pub enum ComparatorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Candidate lookup failed in the card source
    #[error("Card source error: {0}")]
    Source(String),

    /// Candidate set exceeded the configured ceiling
    #[error("Too many candidates: {count} (max: {limit})")]
    TooManyCandidates {
        /// Candidates that passed the match filter
        count: usize,
        /// Configured ceiling
        limit: usize,
    },

    /// Card source returned a position it cannot resolve
    #[error("Unknown reference card at position {0}")]
    UnknownCard(usize),
}
