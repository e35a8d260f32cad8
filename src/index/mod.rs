//! The posting-list index over a SQL table.
//!
//! [`LiteIndex`] ties the pieces together: documents are analyzed per field
//! (see [`PerFieldAnalyzer`]), the resulting term keys are merged into the
//! posting table in one transaction per batch, and lookups turn stored posting
//! lists back into [`TermQuery`](crate::query::TermQuery) objects that the
//! query operators combine.
//!
//! # Example
//!
//! ```
//! use sarissa_lite::document::SimpleDocument;
//! use sarissa_lite::index::{IndexConfig, LiteIndex};
//! use sarissa_lite::query::QueryExpr;
//!
//! # fn main() -> sarissa_lite::error::Result<()> {
//! let index = LiteIndex::open_in_memory(IndexConfig::default(), None)?;
//! index.index(vec![
//!     SimpleDocument::new(0).add_field("name", "Amsterdam"),
//!     SimpleDocument::new(1).add_field("name", "London"),
//! ])?;
//!
//! let mut query = index.parse(&QueryExpr::term("name", "amsterdam"))?;
//! let mut ids = Vec::new();
//! index.for_each(query.as_mut(), |id, _score| ids.push(id));
//! assert_eq!(ids, vec![0]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod reader;
pub mod writer;

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::DocId;
use crate::analysis::PerFieldAnalyzer;
use crate::error::Result;
use crate::query::{Query, TopDocs, collector};
use crate::storage::{MergeDialect, PostingTable, RowInfo};
use crate::term_key::TermKey;

pub use config::{DocCountPolicy, IndexConfig};
pub use reader::MatchMode;
pub use writer::BatchSummary;

/// Statistics about an index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Name of the posting table.
    pub table_name: String,
    /// Merge statement family in use.
    pub dialect: MergeDialect,
    /// Current document count used for scoring.
    pub total_docs: usize,
    /// Number of stored term keys.
    pub term_count: usize,
}

/// An inverted index whose posting lists live in one SQL table.
///
/// All methods take `&self`; the index can be shared between threads behind
/// an `Arc`. Batches on the same index are serialized by the connection lock,
/// batches from separate connections to one database file by the database's
/// write lock.
#[derive(Debug)]
pub struct LiteIndex {
    table: PostingTable,
    analyzers: PerFieldAnalyzer,
    config: IndexConfig,
    total_docs: AtomicUsize,
}

impl LiteIndex {
    /// Build an index over `conn`, creating the posting table if it does not
    /// exist yet. Existing rows are kept.
    ///
    /// Fields without a registered analyzer use the registry's default; with
    /// no registry at all every field uses the
    /// [`StandardAnalyzer`](crate::analysis::StandardAnalyzer).
    pub fn new(
        conn: Connection,
        config: IndexConfig,
        analyzers: Option<PerFieldAnalyzer>,
    ) -> Result<Self> {
        let table = PostingTable::new(conn, &config.table_name, config.dialect)?;
        table.set_busy_timeout(config.busy_timeout())?;
        table.create_if_absent()?;

        let analyzers = analyzers.unwrap_or_default();
        info!(
            "opened index on table {} ({} dialect, analyzers {:?})",
            config.table_name, config.dialect, analyzers
        );

        Ok(LiteIndex {
            table,
            analyzers,
            total_docs: AtomicUsize::new(config.initial_total_docs),
            config,
        })
    }

    /// Open (or create) a database file and build an index over it.
    pub fn open<P: AsRef<Path>>(
        path: P,
        config: IndexConfig,
        analyzers: Option<PerFieldAnalyzer>,
    ) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::new(conn, config, analyzers)
    }

    /// Build an index over a private in-memory database.
    pub fn open_in_memory(config: IndexConfig, analyzers: Option<PerFieldAnalyzer>) -> Result<Self> {
        Self::new(Connection::open_in_memory()?, config, analyzers)
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn analyzers(&self) -> &PerFieldAnalyzer {
        &self.analyzers
    }

    /// Current document count used for idf.
    pub fn total_docs(&self) -> usize {
        self.total_docs.load(Ordering::Acquire)
    }

    /// Override the document count.
    pub fn set_total_docs(&self, total_docs: usize) {
        self.total_docs.store(total_docs, Ordering::Release);
    }

    /// Call `callback(doc_id, score)` for every document `query` matches.
    pub fn for_each<F>(&self, query: &mut dyn Query, callback: F)
    where
        F: FnMut(DocId, f32),
    {
        collector::for_each(query, callback);
    }

    /// The `limit` best matches of `query`.
    pub fn search(&self, query: &mut dyn Query, limit: usize) -> TopDocs {
        TopDocs::collect(query, limit)
    }

    /// Drop every posting by recreating the table.
    ///
    /// Under [`DocCountPolicy::CountBatchDocuments`] the document count goes
    /// back to its configured initial value.
    pub fn truncate(&self) -> Result<()> {
        self.table.recreate()?;
        if self.config.doc_count_policy == DocCountPolicy::CountBatchDocuments {
            self.set_total_docs(self.config.initial_total_docs);
        }
        Ok(())
    }

    /// Stored terms of `field` with their posting counts, in key order.
    pub fn field_terms(&self, field: &str) -> Result<Vec<RowInfo>> {
        self.table.scan_prefix(&TermKey::field_prefix(field))
    }

    pub fn stats(&self) -> Result<IndexStats> {
        Ok(IndexStats {
            table_name: self.table.table_name().to_string(),
            dialect: self.table.dialect(),
            total_docs: self.total_docs(),
            term_count: self.table.term_count()?,
        })
    }

    /// Close the database connection.
    pub fn close(self) -> Result<()> {
        info!("closing index on table {}", self.config.table_name);
        self.table.close()
    }
}
