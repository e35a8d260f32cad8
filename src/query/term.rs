//! A query over a single posting list.

use crate::DocId;
use crate::query::query::{NO_MORE_DOCS, Query};

/// Iterates the documents of one term.
///
/// Stored posting lists keep append order and may repeat a document that was
/// indexed twice, so the postings are sorted and deduplicated when the query
/// is built.
///
/// Each match scores `ln(1 + total_docs / df) * boost`, where `df` is the
/// number of distinct documents in the list.
#[derive(Debug, Clone)]
pub struct TermQuery {
    name: String,
    postings: Vec<DocId>,
    cursor: Option<usize>,
    idf: f32,
    boost: f32,
}

impl TermQuery {
    /// Create a term over `postings`.
    ///
    /// `total_docs` is the collection size used for the idf; `name` identifies
    /// the term in [`describe`](Query::describe) output.
    pub fn new<S: Into<String>>(total_docs: usize, name: S, mut postings: Vec<DocId>) -> Self {
        postings.sort_unstable();
        postings.dedup();
        let idf = if postings.is_empty() {
            0.0
        } else {
            (1.0 + total_docs.max(1) as f32 / postings.len() as f32).ln()
        };

        TermQuery {
            name: name.into(),
            postings,
            cursor: None,
            idf,
            boost: 1.0,
        }
    }

    /// Set the boost factor.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// The term key, or a `missing(..)` / `broken(..)` tag for empty terms.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distinct matching documents in ascending order.
    pub fn postings(&self) -> &[DocId] {
        &self.postings
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn idf(&self) -> f32 {
        self.idf
    }
}

impl Query for TermQuery {
    fn next(&mut self) -> bool {
        let next = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(self.postings.len()),
        };
        self.cursor = Some(next);
        next < self.postings.len()
    }

    fn advance(&mut self, target: DocId) -> bool {
        let start = match self.cursor {
            Some(i) if i < self.postings.len() && self.postings[i] >= target => return true,
            Some(i) => i,
            None => 0,
        };
        let idx = start + self.postings[start..].partition_point(|&doc| doc < target);
        self.cursor = Some(idx);
        idx < self.postings.len()
    }

    fn doc_id(&self) -> DocId {
        self.cursor
            .and_then(|i| self.postings.get(i))
            .copied()
            .unwrap_or(NO_MORE_DOCS)
    }

    fn score(&self) -> f32 {
        self.idf * self.boost
    }

    fn cost(&self) -> usize {
        self.postings.len()
    }

    fn set_boost(&mut self, boost: f32) {
        self.boost *= boost;
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
