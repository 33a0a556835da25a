//! Error handling for the E-model library
//!
//! The rating engine itself never fails: out-of-domain arithmetic propagates
//! as NaN or infinity. These errors belong to the collaborators around it:
//! loading the input record, validating it and configuring logging.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for E-model operations
pub type Result<T> = std::result::Result<T, EmodelError>;

/// Error type for loading, validating and configuring
#[derive(Error, Debug)]
pub enum EmodelError {
    /// Input file could not be opened or read
    #[error("Failed to read input file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Standard input could not be read
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    /// The input document is malformed or a required field is absent or not a number
    #[error("Failed to decode input parameters: {0}")]
    Decode(#[from] serde_json::Error),

    /// A parameter lies outside the range permitted by G.107
    #[error("Parameter {field} = {value} is out of range ({min} to {max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter is NaN or infinite
    #[error("Parameter {field} is not a finite number")]
    NonFinite { field: &'static str },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EmodelError {
    /// Create a new configuration error
    pub fn config(details: impl Into<String>) -> Self {
        Self::Config(details.into())
    }

    /// Whether this error comes from range checking rather than I/O or decoding
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::NonFinite { .. })
    }
}
