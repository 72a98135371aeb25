//! Error types for the Orthos library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`OrthosError`] enum. No-match outcomes (a word that is not in the
//! dictionary, a query with no suggestions) are never errors; they are
//! reported as `false` or an empty vector.
//!
//! # Examples
//!
//! ```
//! use orthos::error::{OrthosError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(OrthosError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Orthos operations.
#[derive(Error, Debug)]
pub enum OrthosError {
    /// I/O errors (reading the word list, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Word list errors
    #[error("Word list error: {0}")]
    WordList(String),

    /// A query argument the operation cannot accept, e.g. an empty word
    /// where a character position is required
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with OrthosError.
pub type Result<T> = std::result::Result<T, OrthosError>;

impl OrthosError {
    /// Create a new word list error.
    pub fn word_list<S: Into<String>>(msg: S) -> Self {
        OrthosError::WordList(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        OrthosError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        OrthosError::Other(msg.into())
    }
}
