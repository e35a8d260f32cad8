//! The document iterator protocol shared by all queries.

use std::fmt::Debug;

use crate::DocId;

/// Returned by [`Query::doc_id`] once a query is exhausted.
///
/// This id is reserved and can never be indexed.
pub const NO_MORE_DOCS: DocId = DocId::MAX;

/// A document iterator with scores.
///
/// Documents come out in ascending id order, each at most once. A fresh query
/// is positioned before its first document; `doc_id` and `score` are only
/// meaningful after `next` or `advance` returned `true`.
pub trait Query: Send + Debug {
    /// Move to the next matching document. Returns `false` when exhausted.
    fn next(&mut self) -> bool;

    /// Move to the first matching document `>= target`.
    ///
    /// Never moves backwards: if the current document is already `>= target`
    /// the query stays where it is. Returns `false` when exhausted.
    fn advance(&mut self, target: DocId) -> bool;

    /// Current document, or [`NO_MORE_DOCS`] once exhausted.
    fn doc_id(&self) -> DocId;

    /// Score of the current document.
    fn score(&self) -> f32;

    /// Upper bound on the number of documents this query can match.
    fn cost(&self) -> usize;

    /// Multiply every score by `boost`.
    fn set_boost(&mut self, boost: f32);

    /// Human readable form, used in logs and the CLI.
    fn describe(&self) -> String;
}
