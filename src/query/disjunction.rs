//! Disjunctions (OR and DisMax) of queries.

use crate::DocId;
use crate::query::query::{NO_MORE_DOCS, Query};

/// Matches documents present in at least one sub-query.
///
/// The score is the sum of the scores of the sub-queries positioned on the
/// current document.
#[derive(Debug)]
pub struct OrQuery {
    queries: Vec<Box<dyn Query>>,
    doc: DocId,
    started: bool,
    boost: f32,
}

impl OrQuery {
    pub fn new(queries: Vec<Box<dyn Query>>) -> Self {
        OrQuery {
            queries,
            doc: NO_MORE_DOCS,
            started: false,
            boost: 1.0,
        }
    }

    fn update(&mut self) -> bool {
        self.doc = self
            .queries
            .iter()
            .map(|q| q.doc_id())
            .min()
            .unwrap_or(NO_MORE_DOCS);
        self.doc != NO_MORE_DOCS
    }

    /// Scores of the sub-queries matching the current document.
    fn matching_scores(&self) -> impl Iterator<Item = f32> + '_ {
        self.queries
            .iter()
            .filter(move |q| q.doc_id() == self.doc)
            .map(|q| q.score())
    }

    fn describe_with(&self, separator: &str) -> String {
        let parts: Vec<String> = self.queries.iter().map(|q| q.describe()).collect();
        format!("({})", parts.join(separator))
    }
}

impl Query for OrQuery {
    fn next(&mut self) -> bool {
        if !self.started {
            self.started = true;
            for query in self.queries.iter_mut() {
                query.next();
            }
        } else {
            if self.doc == NO_MORE_DOCS {
                return false;
            }
            let current = self.doc;
            for query in self.queries.iter_mut() {
                if query.doc_id() == current {
                    query.next();
                }
            }
        }
        self.update()
    }

    fn advance(&mut self, target: DocId) -> bool {
        if self.started && (self.doc == NO_MORE_DOCS || self.doc >= target) {
            return self.doc != NO_MORE_DOCS;
        }
        self.started = true;
        for query in self.queries.iter_mut() {
            query.advance(target);
        }
        self.update()
    }

    fn doc_id(&self) -> DocId {
        self.doc
    }

    fn score(&self) -> f32 {
        self.matching_scores().sum::<f32>() * self.boost
    }

    fn cost(&self) -> usize {
        self.queries.iter().map(|q| q.cost()).sum()
    }

    fn set_boost(&mut self, boost: f32) {
        self.boost *= boost;
    }

    fn describe(&self) -> String {
        self.describe_with(" OR ")
    }
}

/// Disjunction scored by its best sub-query.
///
/// Score is `max + tie_breaker * (sum - max)` over the sub-queries matching the
/// current document, so `tie_breaker = 0` keeps only the best match and `1`
/// behaves like [`OrQuery`].
#[derive(Debug)]
pub struct DisMaxQuery {
    inner: OrQuery,
    tie_breaker: f32,
}

impl DisMaxQuery {
    pub fn new(queries: Vec<Box<dyn Query>>, tie_breaker: f32) -> Self {
        DisMaxQuery {
            inner: OrQuery::new(queries),
            tie_breaker,
        }
    }
}

impl Query for DisMaxQuery {
    fn next(&mut self) -> bool {
        self.inner.next()
    }

    fn advance(&mut self, target: DocId) -> bool {
        self.inner.advance(target)
    }

    fn doc_id(&self) -> DocId {
        self.inner.doc_id()
    }

    fn score(&self) -> f32 {
        let (max, sum) = self
            .inner
            .matching_scores()
            .fold((0.0f32, 0.0f32), |(max, sum), s| (max.max(s), sum + s));
        (max + self.tie_breaker * (sum - max)) * self.inner.boost
    }

    fn cost(&self) -> usize {
        self.inner.cost()
    }

    fn set_boost(&mut self, boost: f32) {
        self.inner.set_boost(boost);
    }

    fn describe(&self) -> String {
        self.inner.describe_with(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::term::TermQuery;

    fn term(postings: Vec<DocId>) -> Box<dyn Query> {
        Box::new(TermQuery::new(100, "t", postings))
    }

    fn drain(query: &mut dyn Query) -> Vec<DocId> {
        let mut out = Vec::new();
        while query.next() {
            out.push(query.doc_id());
        }
        out
    }

    #[test]
    fn test_union() {
        let mut or = OrQuery::new(vec![term(vec![1, 5]), term(vec![2, 5, 9]), term(vec![])]);
        assert_eq!(drain(&mut or), vec![1, 2, 5, 9]);
        assert!(!or.next());
    }

    #[test]
    fn test_empty_or() {
        let mut or = OrQuery::new(vec![]);
        assert!(!or.next());
        assert_eq!(or.doc_id(), NO_MORE_DOCS);
    }

    #[test]
    fn test_score_sums_matching() {
        let mut or = OrQuery::new(vec![term(vec![1, 2]), term(vec![2])]);
        assert!(or.next());
        let one = or.score();
        assert!(or.next());
        assert!(or.score() > one);
    }

    #[test]
    fn test_advance() {
        let mut or = OrQuery::new(vec![term(vec![1, 10]), term(vec![4, 7])]);
        assert!(or.advance(5));
        assert_eq!(or.doc_id(), 7);
        assert!(or.next());
        assert_eq!(or.doc_id(), 10);
        assert!(!or.next());
    }

    #[test]
    fn test_dis_max_takes_best() {
        let a = TermQuery::new(100, "a", vec![1]);
        let b = TermQuery::new(100, "b", (0..50).collect());
        let (best, other) = (a.idf(), b.idf());

        let mut dis_max = DisMaxQuery::new(vec![Box::new(a), Box::new(b)], 0.5);
        assert!(dis_max.next());
        assert_eq!(dis_max.doc_id(), 0);
        assert!(dis_max.next());
        assert_eq!(dis_max.doc_id(), 1);
        assert!((dis_max.score() - (best + 0.5 * other)).abs() < 1e-6);
    }
}
