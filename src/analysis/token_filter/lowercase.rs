//! Lowercase filter implementation.

use crate::analysis::token_filter::Filter;

/// A filter that converts tokens to lowercase.
///
/// ASCII tokens take a fast path; anything else uses Unicode-aware
/// lowercasing.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .map(|token| {
                if token.is_ascii() {
                    token.to_ascii_lowercase()
                } else {
                    token.to_lowercase()
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
