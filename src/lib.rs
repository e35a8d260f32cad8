//! # Sarissa Lite
//!
//! An inverted index whose posting lists are stored in a SQL table.
//!
//! ## Features
//!
//! - One row per `(field, token)` term, holding a compact posting blob
//! - All-or-nothing batch indexing in a single transaction
//! - Per-field text analysis with separate index and search chains
//! - Boolean query operators with idf scoring
//! - Soft term lookups: absent or malformed terms match nothing instead of failing

pub mod analysis;
pub mod cli;
pub mod codec;
pub mod document;
pub mod error;
pub mod index;
pub mod query;
pub mod storage;
pub mod term_key;

/// Identifier of an indexed document.
pub type DocId = u32;

pub mod prelude {
    pub use crate::DocId;
    pub use crate::analysis::{
        Analyzer, AutocompleteAnalyzer, KeywordAnalyzer, PerFieldAnalyzer, StandardAnalyzer,
    };
    pub use crate::document::{Document, SimpleDocument};
    pub use crate::error::{LiteIndexError, Result};
    pub use crate::index::{DocCountPolicy, IndexConfig, LiteIndex, MatchMode};
    pub use crate::query::{
        AndQuery, DisMaxQuery, Hit, NO_MORE_DOCS, OrQuery, Query, QueryExpr, TermQuery, TopDocs,
    };
    pub use crate::storage::MergeDialect;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
