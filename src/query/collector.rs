//! Draining queries into callbacks and ranked hit lists.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::DocId;
use crate::query::query::Query;

/// A matching document and its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// The document ID.
    pub doc_id: DocId,
    /// The relevance score.
    pub score: f32,
}

/// Advance `query` until it is exhausted, calling `callback` with every
/// matching document and its score.
pub fn for_each<F>(query: &mut dyn Query, mut callback: F)
where
    F: FnMut(DocId, f32),
{
    while query.next() {
        callback(query.doc_id(), query.score());
    }
}

/// The best `limit` hits of a query plus the total number of matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopDocs {
    /// Hits ordered by descending score, ties by ascending id.
    pub hits: Vec<Hit>,
    /// Number of documents the query matched.
    pub total_hits: usize,
}

impl TopDocs {
    /// Drain `query` and keep the `limit` best hits.
    pub fn collect(query: &mut dyn Query, limit: usize) -> Self {
        let mut hits = Vec::new();
        let mut total_hits = 0;
        for_each(query, |doc_id, score| {
            total_hits += 1;
            hits.push(Hit { doc_id, score });
        });

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.doc_id.cmp(&b.doc_id))
        });
        hits.truncate(limit);

        TopDocs { hits, total_hits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::disjunction::OrQuery;
    use crate::query::term::TermQuery;

    #[test]
    fn test_for_each_visits_every_match() {
        let mut query = TermQuery::new(10, "t", vec![4, 2, 9]);
        let mut seen = Vec::new();
        for_each(&mut query, |doc, score| {
            assert!(score > 0.0);
            seen.push(doc);
        });
        assert_eq!(seen, vec![2, 4, 9]);
    }

    #[test]
    fn test_top_docs_ranks_and_limits() {
        let mut query = OrQuery::new(vec![
            Box::new(TermQuery::new(10, "a", vec![1, 2, 3])),
            Box::new(TermQuery::new(10, "b", vec![3])),
        ]);
        let top = TopDocs::collect(&mut query, 2);

        assert_eq!(top.total_hits, 3);
        assert_eq!(top.hits.len(), 2);
        assert_eq!(top.hits[0].doc_id, 3);
        assert_eq!(top.hits[1].doc_id, 1);
    }
}
