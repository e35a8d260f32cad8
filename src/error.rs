//! Error types for the sarissa-lite library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LiteIndexError`] enum. Storage failures coming from the SQL backend are
//! carried verbatim in [`LiteIndexError::Sql`] so callers can inspect the
//! original `rusqlite` error.
//!
//! # Examples
//!
//! ```
//! use sarissa_lite::error::{LiteIndexError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LiteIndexError::invalid_argument("table name must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for sarissa-lite operations.
#[derive(Error, Debug)]
pub enum LiteIndexError {
    /// Errors raised by the SQL backend (transaction begin/exec/commit,
    /// table create/drop).
    #[error("SQL error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// I/O errors (reading document or config files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (analyzer construction).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Query-related errors (malformed query expressions).
    #[error("Query error: {0}")]
    Query(String),

    /// Invalid argument supplied by the caller.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LiteIndexError.
pub type Result<T> = std::result::Result<T, LiteIndexError>;

impl LiteIndexError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LiteIndexError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        LiteIndexError::Query(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LiteIndexError::InvalidArgument(msg.into())
    }
}
