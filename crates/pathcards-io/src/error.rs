//! Error types for reading and writing index cards

use thiserror::Error;

/// Errors that can occur at the JSON boundary
#[derive(Error, Debug)]
pub enum CardIoError {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A card is missing a required field or has the wrong shape
    #[error("Malformed card {index}: {reason}")]
    MalformedCard {
        /// Position of the card in its input
        index: usize,
        /// What is wrong with it
        reason: String,
    },

    /// HGNC mapping file could not be used
    #[error("Mapping error: {0}")]
    Mapping(String),
}
