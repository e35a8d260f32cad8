//! SQL storage for posting lists.
//!
//! Postings live in a single two-column table per index: `id` holds the term
//! key and `list` the encoded posting blob. The backend is reached through
//! `rusqlite`; the statement used to append to an existing row is selected by
//! [`MergeDialect`].

pub mod dialect;
pub mod table;

pub use dialect::MergeDialect;
pub use table::{PostingTable, RowInfo};
