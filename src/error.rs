//! Error types for the retok library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`RetokError`] enum. End of a token stream is not an error: streams signal
//! it with `Ok(None)`.
//!
//! # Examples
//!
//! ```
//! use retok::error::{RetokError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RetokError::invalid_argument("empty language identifier"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for retok operations.
#[derive(Error, Debug)]
pub enum RetokError {
    /// I/O errors (reading configuration or input files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis errors raised while pulling tokens (segmenter or morphological analyzer)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument passed to a constructor or builder
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with RetokError.
pub type Result<T> = std::result::Result<T, RetokError>;

impl RetokError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RetokError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RetokError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RetokError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RetokError::Other(msg.into())
    }

    /// Check whether this error was raised by an analysis component.
    pub fn is_analysis(&self) -> bool {
        matches!(self, RetokError::Analysis(_))
    }
}
