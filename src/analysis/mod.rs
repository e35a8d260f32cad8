//! Text analysis: turning raw field values into index and search tokens.
//!
//! An [`Analyzer`] runs a [`Tokenizer`](tokenizer::Tokenizer) followed by a
//! chain of [`Filter`](token_filter::Filter)s. Analyzers may tokenize
//! differently at index time and at search time (see
//! [`AutocompleteAnalyzer`]). [`PerFieldAnalyzer`] picks an analyzer by field
//! name, falling back to an explicit default.

pub mod analyzer;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{
    Analyzer, AutocompleteAnalyzer, KeywordAnalyzer, PerFieldAnalyzer, PipelineAnalyzer,
    StandardAnalyzer,
};
