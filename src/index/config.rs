//! Index configuration.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::MergeDialect;

/// How the total document count used for scoring evolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocCountPolicy {
    /// The count only changes through [`LiteIndex::set_total_docs`](crate::index::LiteIndex::set_total_docs).
    Manual,
    /// Every committed batch adds the number of distinct ids it contained.
    #[default]
    CountBatchDocuments,
}

/// Configuration for a [`LiteIndex`](crate::index::LiteIndex).
///
/// Every field has a default, so a JSON config file only needs the keys it
/// changes:
///
/// ```json
/// {"table_name": "cities", "doc_count_policy": "manual"}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Name of the posting table. Must be a plain SQL identifier.
    pub table_name: String,

    /// Statement family used to append to existing rows.
    pub dialect: MergeDialect,

    /// Document count the index starts with. Scoring treats a count of
    /// zero as one.
    pub initial_total_docs: usize,

    /// Whether indexing grows the document count.
    pub doc_count_policy: DocCountPolicy,

    /// How long a statement waits for a locked database, in milliseconds.
    pub busy_timeout_ms: u64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            table_name: "postings".to_string(),
            dialect: MergeDialect::Sqlite,
            initial_total_docs: 0,
            doc_count_policy: DocCountPolicy::CountBatchDocuments,
            busy_timeout_ms: 5000,
        }
    }
}

impl IndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table_name<S: Into<String>>(mut self, table_name: S) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn with_dialect(mut self, dialect: MergeDialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_initial_total_docs(mut self, total_docs: usize) -> Self {
        self.initial_total_docs = total_docs;
        self
    }

    pub fn with_doc_count_policy(mut self, policy: DocCountPolicy) -> Self {
        self.doc_count_policy = policy;
        self
    }

    pub fn with_busy_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.busy_timeout_ms = timeout_ms;
        self
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Parse a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
