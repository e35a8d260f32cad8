//! Analyzer implementations that combine tokenizers and filters.

#[allow(clippy::module_inception)]
mod analyzer;
mod autocomplete;
mod keyword;
mod per_field;
mod pipeline;
mod standard;

pub use analyzer::Analyzer;
pub use autocomplete::AutocompleteAnalyzer;
pub use keyword::KeywordAnalyzer;
pub use per_field::PerFieldAnalyzer;
pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;
