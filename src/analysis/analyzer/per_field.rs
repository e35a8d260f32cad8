//! Per-field analyzer (Lucene-compatible).

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;

/// A per-field analyzer that applies different analyzers to different fields.
///
/// This is similar to Lucene's PerFieldAnalyzerWrapper: fields that were not
/// registered use the default analyzer. The registry is passed explicitly to
/// the index at construction; there is no global analyzer table.
///
/// # Example
///
/// ```
/// use sarissa_lite::analysis::{Analyzer, KeywordAnalyzer, PerFieldAnalyzer, StandardAnalyzer};
/// use std::sync::Arc;
///
/// let keyword_analyzer: Arc<dyn Analyzer> = Arc::new(KeywordAnalyzer::new());
/// let mut analyzer = PerFieldAnalyzer::new(Arc::new(StandardAnalyzer::new()));
/// analyzer.add_analyzer("country", Arc::clone(&keyword_analyzer));
///
/// assert_eq!(analyzer.analyze_index_field("country", "New Zealand"), vec!["New Zealand"]);
/// assert_eq!(analyzer.analyze_index_field("name", "New Zealand"), vec!["new", "zealand"]);
/// ```
#[derive(Clone)]
pub struct PerFieldAnalyzer {
    /// Default analyzer for fields not in the map.
    default_analyzer: Arc<dyn Analyzer>,

    /// Map of field names to their specific analyzers.
    field_analyzers: AHashMap<String, Arc<dyn Analyzer>>,
}

impl PerFieldAnalyzer {
    /// Create a new per-field analyzer with a default analyzer.
    pub fn new(default_analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            default_analyzer,
            field_analyzers: AHashMap::new(),
        }
    }

    /// Add a field-specific analyzer.
    pub fn add_analyzer(&mut self, field: impl Into<String>, analyzer: Arc<dyn Analyzer>) {
        self.field_analyzers.insert(field.into(), analyzer);
    }

    /// Builder form of [`add_analyzer`](Self::add_analyzer).
    pub fn with_analyzer(mut self, field: impl Into<String>, analyzer: Arc<dyn Analyzer>) -> Self {
        self.add_analyzer(field, analyzer);
        self
    }

    /// Get the analyzer for a specific field.
    pub fn get_analyzer(&self, field: &str) -> &Arc<dyn Analyzer> {
        self.field_analyzers
            .get(field)
            .unwrap_or(&self.default_analyzer)
    }

    /// Get the default analyzer.
    pub fn default_analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.default_analyzer
    }

    /// Index-time tokens of `text` for `field`.
    pub fn analyze_index_field(&self, field: &str, text: &str) -> Vec<String> {
        self.get_analyzer(field).analyze_index(text)
    }

    /// Search-time tokens of `text` for `field`.
    pub fn analyze_search_field(&self, field: &str, text: &str) -> Vec<String> {
        self.get_analyzer(field).analyze_search(text)
    }
}

impl Default for PerFieldAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(StandardAnalyzer::new()))
    }
}

impl Analyzer for PerFieldAnalyzer {
    fn analyze_index(&self, text: &str) -> Vec<String> {
        // When used as a regular Analyzer, use the default analyzer
        self.default_analyzer.analyze_index(text)
    }

    fn analyze_search(&self, text: &str) -> Vec<String> {
        self.default_analyzer.analyze_search(text)
    }

    fn name(&self) -> &str {
        "PerFieldAnalyzer"
    }
}

impl std::fmt::Debug for PerFieldAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields: Vec<_> = self
            .field_analyzers
            .iter()
            .map(|(field, analyzer)| (field.as_str(), analyzer.name()))
            .collect();
        fields.sort_unstable();
        f.debug_struct("PerFieldAnalyzer")
            .field("default", &self.default_analyzer.name())
            .field("fields", &fields)
            .finish()
    }
}
