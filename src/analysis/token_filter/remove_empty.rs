use crate::analysis::token_filter::Filter;

/// A filter that removes empty tokens from the stream.
///
/// This is typically used near the end of an analysis pipeline to clean up
/// tokens that have been emptied by previous filters.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|token| !token.is_empty()).collect()
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}
