use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token_filter::{
    AsciiFoldingFilter, EdgeNgramFilter, Filter, LowercaseFilter, RemoveEmptyFilter,
};
use crate::analysis::tokenizer::UnicodeWordTokenizer;
use crate::error::Result;

/// Prefix-matching analyzer.
///
/// At index time every word is expanded into its leading edge n-grams, so a
/// document containing "amsterdam" is stored under "am", "ams", ... At search
/// time words are only normalized, which makes a partially typed word match
/// the full one.
pub struct AutocompleteAnalyzer {
    inner: PipelineAnalyzer,
}

impl AutocompleteAnalyzer {
    /// Create an analyzer indexing prefixes of `min_gram..=max_gram` characters.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        let normalize: Vec<Arc<dyn Filter>> = vec![
            Arc::new(AsciiFoldingFilter::new()),
            Arc::new(LowercaseFilter::new()),
        ];

        let mut analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()));
        for filter in &normalize {
            analyzer = analyzer.add_filter(Arc::clone(filter));
        }
        let mut search_filters = normalize;
        search_filters.push(Arc::new(RemoveEmptyFilter::new()));

        let analyzer = analyzer
            .add_filter(Arc::new(EdgeNgramFilter::new(min_gram, max_gram)?))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_search_filters(search_filters)
            .with_name("autocomplete");

        Ok(AutocompleteAnalyzer { inner: analyzer })
    }
}

impl Analyzer for AutocompleteAnalyzer {
    fn analyze_index(&self, text: &str) -> Vec<String> {
        self.inner.analyze_index(text)
    }

    fn analyze_search(&self, text: &str) -> Vec<String> {
        self.inner.analyze_search(text)
    }

    fn name(&self) -> &str {
        "autocomplete"
    }
}

impl std::fmt::Debug for AutocompleteAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutocompleteAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
