//! Conjunction (AND) of queries, with an optional exclusion.

use crate::DocId;
use crate::query::query::{NO_MORE_DOCS, Query};

/// Matches documents present in every sub-query and absent from the `not`
/// query, if one is set.
///
/// Sub-queries are leapfrogged starting from the cheapest one. The score is
/// the sum of the sub-query scores.
#[derive(Debug)]
pub struct AndQuery {
    queries: Vec<Box<dyn Query>>,
    not: Option<Box<dyn Query>>,
    doc: DocId,
    started: bool,
    boost: f32,
}

impl AndQuery {
    pub fn new(mut queries: Vec<Box<dyn Query>>) -> Self {
        queries.sort_by_key(|q| q.cost());
        AndQuery {
            queries,
            not: None,
            doc: NO_MORE_DOCS,
            started: false,
            boost: 1.0,
        }
    }

    /// Exclude every document matched by `not`.
    pub fn with_not(mut self, not: Box<dyn Query>) -> Self {
        self.not = Some(not);
        self
    }

    fn exhaust(&mut self) -> bool {
        self.doc = NO_MORE_DOCS;
        false
    }

    /// Bring every sub-query onto the lead's document, moving forward until
    /// they agree on one that is not excluded.
    fn align(&mut self) -> bool {
        let AndQuery {
            queries, not, doc, ..
        } = self;
        let Some((lead, rest)) = queries.split_first_mut() else {
            *doc = NO_MORE_DOCS;
            return false;
        };

        let mut target = lead.doc_id();
        'search: loop {
            if target == NO_MORE_DOCS {
                *doc = NO_MORE_DOCS;
                return false;
            }
            for query in rest.iter_mut() {
                if !query.advance(target) {
                    *doc = NO_MORE_DOCS;
                    return false;
                }
                let found = query.doc_id();
                if found > target {
                    lead.advance(found);
                    target = lead.doc_id();
                    continue 'search;
                }
            }
            if let Some(not) = not.as_mut() {
                if not.advance(target) && not.doc_id() == target {
                    lead.next();
                    target = lead.doc_id();
                    continue 'search;
                }
            }
            *doc = target;
            return true;
        }
    }
}

impl Query for AndQuery {
    fn next(&mut self) -> bool {
        if self.started && self.doc == NO_MORE_DOCS {
            return false;
        }
        self.started = true;
        let moved = match self.queries.first_mut() {
            Some(lead) => lead.next(),
            None => false,
        };
        if moved { self.align() } else { self.exhaust() }
    }

    fn advance(&mut self, target: DocId) -> bool {
        if self.started && (self.doc == NO_MORE_DOCS || self.doc >= target) {
            return self.doc != NO_MORE_DOCS;
        }
        self.started = true;
        let moved = match self.queries.first_mut() {
            Some(lead) => lead.advance(target),
            None => false,
        };
        if moved { self.align() } else { self.exhaust() }
    }

    fn doc_id(&self) -> DocId {
        self.doc
    }

    fn score(&self) -> f32 {
        self.queries.iter().map(|q| q.score()).sum::<f32>() * self.boost
    }

    fn cost(&self) -> usize {
        self.queries.first().map(|q| q.cost()).unwrap_or(0)
    }

    fn set_boost(&mut self, boost: f32) {
        self.boost *= boost;
    }

    fn describe(&self) -> String {
        let parts: Vec<String> = self.queries.iter().map(|q| q.describe()).collect();
        match &self.not {
            Some(not) => format!("({} AND NOT {})", parts.join(" AND "), not.describe()),
            None => format!("({})", parts.join(" AND ")),
        }
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
    fn test_intersection() {
        let mut and = AndQuery::new(vec![
            term(vec![1, 3, 5, 7, 9]),
            term(vec![3, 4, 5, 9, 10]),
            term(vec![0, 3, 9]),
        ]);
        assert_eq!(drain(&mut and), vec![3, 9]);
        assert!(!and.next());
    }

    #[test]
    fn test_empty_operand_matches_nothing() {
        let mut and = AndQuery::new(vec![term(vec![1, 2]), term(vec![])]);
        assert!(drain(&mut and).is_empty());

        let mut none = AndQuery::new(vec![]);
        assert!(!none.next());
    }

    #[test]
    fn test_not_excludes() {
        let mut and = AndQuery::new(vec![term(vec![1, 2, 3, 4])]).with_not(term(vec![2, 4]));
        assert_eq!(drain(&mut and), vec![1, 3]);
    }

    #[test]
    fn test_advance() {
        let mut and = AndQuery::new(vec![term(vec![1, 5, 8, 12]), term(vec![5, 8, 12])]);
        assert!(and.advance(6));
        assert_eq!(and.doc_id(), 8);
        assert!(and.advance(2));
        assert_eq!(and.doc_id(), 8);
        assert!(and.next());
        assert_eq!(and.doc_id(), 12);
        assert!(!and.advance(13));
    }

    #[test]
    fn test_score_is_sum() {
        let mut and = AndQuery::new(vec![term(vec![1]), term(vec![1, 2])]);
        assert!(and.next());
        let expected = TermQuery::new(100, "a", vec![1]).idf() + TermQuery::new(100, "b", vec![1, 2]).idf();
        assert!((and.score() - expected).abs() < 1e-6);
    }
}
