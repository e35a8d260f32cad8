//! The posting table: one row per term key, holding the encoded posting list.

use std::sync::LazyLock;
use std::time::Duration;

use log::{debug, info, trace, warn};
use parking_lot::Mutex;
use regex::Regex;
use rusqlite::types::{FromSqlError, ValueRef};
use rusqlite::{Connection, OptionalExtension, Row, Transaction, TransactionBehavior, params};

use crate::error::{LiteIndexError, Result};
use crate::storage::dialect::MergeDialect;

/// Plain SQL identifiers; table names are interpolated into statements.
static TABLE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

/// Summary of one stored row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowInfo {
    /// Stored term key.
    pub key: String,
    /// Number of postings in the blob.
    pub postings: usize,
}

/// A two-column SQL table mapping term keys to posting blobs.
///
/// The connection sits behind a mutex so the table can be shared between
/// threads; every method holds the lock only for the duration of its
/// statements.
#[derive(Debug)]
pub struct PostingTable {
    conn: Mutex<Connection>,
    table: String,
    dialect: MergeDialect,
}

impl PostingTable {
    /// Wrap `conn` without touching the schema.
    ///
    /// The table name is interpolated into SQL, so it must be a plain
    /// identifier.
    pub fn new(conn: Connection, table: &str, dialect: MergeDialect) -> Result<Self> {
        if !TABLE_NAME.is_match(table) {
            return Err(LiteIndexError::invalid_argument(format!(
                "table name must be a plain SQL identifier, got {table:?}"
            )));
        }
        Ok(PostingTable {
            conn: Mutex::new(conn),
            table: table.to_string(),
            dialect,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn dialect(&self) -> MergeDialect {
        self.dialect
    }

    /// Set how long a statement waits on a locked database before failing.
    pub fn set_busy_timeout(&self, timeout: Duration) -> Result<()> {
        self.conn.lock().busy_timeout(timeout)?;
        Ok(())
    }

    /// Create the table if it does not exist. Existing rows are untouched.
    pub fn create_if_absent(&self) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute(&self.dialect.create_table_statement(&self.table), [])?;
        debug!("ensured posting table {}", self.table);
        Ok(())
    }

    /// Drop the table and create it again, discarding every posting.
    pub fn recreate(&self) -> Result<()> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        tx.execute(&format!("DROP TABLE {}", self.table), [])?;
        tx.execute(&self.dialect.create_table_statement(&self.table), [])?;
        tx.commit()?;
        info!("recreated posting table {}", self.table);
        Ok(())
    }

    /// Fetch the raw blob stored under `key`.
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached(&format!("SELECT list FROM {} WHERE id = ?", self.table))?;
        let blob = stmt.query_row(params![key], |row| blob_column(row, 0)).optional()?;
        Ok(blob)
    }

    /// Append every `(key, blob)` pair in one transaction.
    ///
    /// Rows that exist get the blob appended in place through the dialect's
    /// merge statement; missing rows are inserted. Either every pair is
    /// applied or, on the first failure, the whole transaction is rolled back
    /// and the error returned.
    ///
    /// The transaction takes the write lock up front (`BEGIN IMMEDIATE`) so the
    /// existence check and the following write cannot interleave with another
    /// writer.
    pub fn append_all<'a, I>(&self, entries: I) -> Result<usize>
    where
        I: IntoIterator<Item = (&'a str, Vec<u8>)>,
    {
        let mut conn = self.conn.lock();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        match self.apply(&tx, entries) {
            Ok(rows) => {
                tx.commit()?;
                Ok(rows)
            }
            Err(e) => {
                if let Err(rollback) = tx.rollback() {
                    warn!("rollback of posting batch on {} failed: {rollback}", self.table);
                }
                Err(e)
            }
        }
    }

    fn apply<'a, I>(&self, tx: &Transaction<'_>, entries: I) -> Result<usize>
    where
        I: IntoIterator<Item = (&'a str, Vec<u8>)>,
    {
        let mut exists = tx.prepare_cached(&format!("SELECT id FROM {} WHERE id = ?", self.table))?;
        let mut merge = tx.prepare_cached(&self.dialect.merge_statement(&self.table))?;
        let mut insert = tx.prepare_cached(&format!(
            "INSERT INTO {} (id, list) VALUES (?, ?)",
            self.table
        ))?;

        let mut rows = 0;
        for (key, blob) in entries {
            if exists.exists(params![key])? {
                trace!("append {} bytes to {key}", blob.len());
                merge.execute(params![blob, key])?;
            } else {
                trace!("insert {key} with {} bytes", blob.len());
                insert.execute(params![key, blob])?;
            }
            rows += 1;
        }
        Ok(rows)
    }

    /// Number of stored term keys.
    pub fn term_count(&self) -> Result<usize> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", self.table), [], |row| {
            row.get(0)
        })?;
        Ok(count as usize)
    }

    /// Rows whose key starts with `prefix`, in key order.
    pub fn scan_prefix(&self, prefix: &str) -> Result<Vec<RowInfo>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!(
            "SELECT id, length(CAST(list AS BLOB)) FROM {} WHERE substr(id, 1, ?) = ? ORDER BY id",
            self.table
        ))?;
        let rows = stmt.query_map(params![prefix.chars().count() as i64, prefix], |row| {
            let key: String = row.get(0)?;
            let len: Option<i64> = row.get(1)?;
            Ok(RowInfo {
                key,
                postings: len.unwrap_or(0) as usize / crate::codec::POSTING_WIDTH,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Close the underlying connection, reporting any error from the backend.
    pub fn close(self) -> Result<()> {
        let conn = self.conn.into_inner();
        conn.close().map_err(|(_, e)| LiteIndexError::from(e))
    }
}

/// Read a posting blob, accepting rows whose value was stored as TEXT by a
/// concatenation that was not cast back.
fn blob_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Vec<u8>> {
    match row.get_ref(idx)? {
        ValueRef::Blob(bytes) | ValueRef::Text(bytes) => Ok(bytes.to_vec()),
        ValueRef::Null => Ok(Vec::new()),
        other => Err(rusqlite::Error::FromSqlConversionFailure(
            idx,
            other.data_type(),
            Box::new(FromSqlError::InvalidType),
        )),
    }
}
