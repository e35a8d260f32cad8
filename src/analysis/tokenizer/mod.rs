//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of an analyzer: they split raw text into
//! tokens that the filter chain then normalizes.
//!
//! - [`WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`UnicodeWordTokenizer`] - Uses Unicode word boundaries
//! - [`WholeTokenizer`] - Treats entire text as single token

pub mod unicode_word;
pub mod whitespace;
pub mod whole;

pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
pub use whole::WholeTokenizer;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into tokens, in order of appearance.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
