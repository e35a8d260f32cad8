//! SQL statement templates per backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LiteIndexError, Result};

/// How a backend appends new posting bytes to an existing row.
///
/// Both variants express the same operation, "append this blob to the blob
/// stored under this id"; they differ only in the SQL the backend accepts.
/// Statements use anonymous `?` placeholders, bound as `(blob, id)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeDialect {
    /// Blob concatenation with the `||` operator (SQLite).
    #[default]
    Sqlite,
    /// Blob concatenation with the `concat()` function (MySQL).
    #[serde(rename = "mysql")]
    MySql,
}

impl MergeDialect {
    /// `UPDATE` statement appending the bound blob to the row with the bound id.
    pub fn merge_statement(&self, table: &str) -> String {
        match self {
            // `||` yields TEXT in SQLite; cast back so the column keeps blob affinity.
            MergeDialect::Sqlite => {
                format!("UPDATE {table} SET list = CAST(list || ? AS BLOB) WHERE id = ?")
            }
            MergeDialect::MySql => format!("UPDATE {table} SET list = concat(list, ?) WHERE id = ?"),
        }
    }

    /// Idempotent `CREATE TABLE` for the two-column posting schema.
    pub fn create_table_statement(&self, table: &str) -> String {
        let blob_type = match self {
            MergeDialect::Sqlite => "BLOB",
            MergeDialect::MySql => "LONGBLOB",
        };
        format!("CREATE TABLE IF NOT EXISTS {table} (id VARCHAR(255) PRIMARY KEY, list {blob_type})")
    }

    pub fn name(&self) -> &'static str {
        match self {
            MergeDialect::Sqlite => "sqlite",
            MergeDialect::MySql => "mysql",
        }
    }
}

impl fmt::Display for MergeDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MergeDialect {
    type Err = LiteIndexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(MergeDialect::Sqlite),
            "mysql" => Ok(MergeDialect::MySql),
            other => Err(LiteIndexError::invalid_argument(format!(
                "unknown merge dialect: {other}"
            ))),
        }
    }
}
