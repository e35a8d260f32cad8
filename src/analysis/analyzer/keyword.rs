use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token_filter::RemoveEmptyFilter;
use crate::analysis::tokenizer::WholeTokenizer;

/// A keyword analyzer that treats the entire (trimmed) input as a single token.
///
/// This is useful for ID fields or other cases where you don't want to split the text.
pub struct KeywordAnalyzer {
    inner: PipelineAnalyzer,
}

impl KeywordAnalyzer {
    /// Create a new keyword analyzer.
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WholeTokenizer::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("keyword");

        KeywordAnalyzer { inner: analyzer }
    }
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for KeywordAnalyzer {
    fn analyze_index(&self, text: &str) -> Vec<String> {
        self.inner.analyze_index(text)
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

impl std::fmt::Debug for KeywordAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordAnalyzer").finish()
    }
}
