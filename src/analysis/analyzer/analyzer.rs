//! Core analyzer trait definition.
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → tokens
//! ```
//!
//! Index-time and search-time analysis are separate entry points because some
//! analyzers expand tokens when indexing (edge n-grams, synonyms) but must not
//! expand the user's query the same way.
//!
//! # Examples
//!
//! ```
//! use sarissa_lite::analysis::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new();
//! assert_eq!(analyzer.analyze_index("Hello, World"), vec!["hello", "world"]);
//! ```

/// Trait for analyzers that convert text into tokens.
///
/// Implementations must be `Send + Sync` so one instance can be shared by
/// every indexing and query thread.
pub trait Analyzer: Send + Sync {
    /// Tokens stored in the index for `text`.
    fn analyze_index(&self, text: &str) -> Vec<String>;

    /// Tokens looked up when `text` is used as a query.
    ///
    /// Defaults to the index-time analysis.
    fn analyze_search(&self, text: &str) -> Vec<String> {
        self.analyze_index(text)
    }

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}
