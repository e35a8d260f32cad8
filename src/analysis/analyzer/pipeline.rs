//! Pipeline analyzer: one tokenizer, an index filter chain and an optional
//! search filter chain.

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
///
/// Search-time analysis reuses the index chain unless a separate chain is set
/// with [`with_search_filters`](Self::with_search_filters).
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    search_filters: Option<Vec<Arc<dyn Filter>>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
            search_filters: None,
        }
    }

    /// Add a filter to the index chain.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Use a different filter chain when analyzing queries.
    pub fn with_search_filters(mut self, filters: Vec<Arc<dyn Filter>>) -> Self {
        self.search_filters = Some(filters);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    fn run(&self, text: &str, filters: &[Arc<dyn Filter>]) -> Vec<String> {
        let mut tokens = self.tokenizer.tokenize(text);
        for filter in filters {
            tokens = filter.filter(tokens);
        }
        tokens
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze_index(&self, text: &str) -> Vec<String> {
        self.run(text, &self.filters)
    }

    fn analyze_search(&self, text: &str) -> Vec<String> {
        match &self.search_filters {
            Some(filters) => self.run(text, filters),
            None => self.run(text, &self.filters),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .field(
                "search_filters",
                &self
                    .search_filters
                    .as_ref()
                    .map(|fs| fs.iter().map(|f| f.name()).collect::<Vec<_>>()),
            )
            .field("name", &self.name)
            .finish()
    }
}
