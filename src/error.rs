use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur during catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persistence line has fewer than the required fields
    #[error("Line {line}: expected 5 fields, found {found}")]
    MissingFields { line: usize, found: usize },

    /// The cooking time field is not a non-negative integer
    #[error("Line {line}: invalid cooking time '{value}': {source}")]
    InvalidCookingTime {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A recipe was built without one of its required fields
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
