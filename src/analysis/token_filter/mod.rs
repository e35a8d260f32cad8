//! Token filter implementations for token transformation.
//!
//! - [`LowercaseFilter`] - Converts tokens to lowercase
//! - [`AsciiFoldingFilter`] - Strips diacritics
//! - [`EdgeNgramFilter`] - Expands tokens into their leading prefixes
//! - [`RemoveEmptyFilter`] - Removes empty tokens
//!
//! Filters are chained inside an analyzer:
//!
//! ```text
//! Tokenizer → AsciiFolding → Lowercase → RemoveEmpty → Index
//! ```

pub mod ascii_folding;
pub mod edge_ngram;
pub mod lowercase;
pub mod remove_empty;

pub use ascii_folding::AsciiFoldingFilter;
pub use edge_ngram::EdgeNgramFilter;
pub use lowercase::LowercaseFilter;
pub use remove_empty::RemoveEmptyFilter;

/// Trait for filters that transform token streams.
///
/// Filters receive the tokens produced so far and return a new list; they may
/// modify, drop or add tokens.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: Vec<String>) -> Vec<String>;

    /// Get the name of this filter.
    fn name(&self) -> &'static str;
}
