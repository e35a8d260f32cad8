//! Term lookup and query construction.
//!
//! Lookups never fail: a term that cannot be looked up becomes an empty
//! [`TermQuery`] whose name records why, so one bad term in a boolean query
//! only removes its own matches.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::codec::decode_postings;
use crate::error::{LiteIndexError, Result};
use crate::index::LiteIndex;
use crate::query::{AndQuery, OrQuery, Query, QueryExpr, TermQuery};
use crate::term_key::TermKey;

/// How the terms of one analyzed text are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every term must match.
    And,
    /// At least one term must match.
    #[default]
    Or,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::And => f.write_str("and"),
            MatchMode::Or => f.write_str("or"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = LiteIndexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(MatchMode::And),
            "or" => Ok(MatchMode::Or),
            other => Err(LiteIndexError::invalid_argument(format!(
                "unknown match mode: {other}"
            ))),
        }
    }
}

impl LiteIndex {
    /// One term per search token of `text`, in token order.
    pub fn terms(&self, field: &str, text: &str) -> Vec<TermQuery> {
        self.analyzers
            .analyze_search_field(field, text)
            .iter()
            .map(|token| self.term_query(field, token))
            .collect()
    }

    /// The stored postings of a single `(field, token)` pair.
    ///
    /// An empty field or token yields an empty term named
    /// `broken(field:token)`; a key that is not stored, or whose lookup
    /// fails, yields one named `missing(field:token)`.
    pub fn term_query(&self, field: &str, token: &str) -> TermQuery {
        let total_docs = self.total_docs().max(1);
        if field.is_empty() || token.is_empty() {
            debug!("broken term {field:?}:{token:?}");
            return TermQuery::new(total_docs, format!("broken({field}:{token})"), Vec::new());
        }

        let key = TermKey::new(field, token);
        match self.table.get(key.as_str()) {
            Ok(Some(blob)) => TermQuery::new(total_docs, key.into_string(), decode_postings(&blob)),
            Ok(None) => TermQuery::new(total_docs, format!("missing({field}:{token})"), Vec::new()),
            Err(e) => {
                warn!("lookup of term {key} failed: {e}");
                TermQuery::new(total_docs, format!("missing({field}:{token})"), Vec::new())
            }
        }
    }

    /// Combine the terms of `text` with `mode`.
    ///
    /// Text without any search token gives a broken term that matches nothing.
    pub fn text_query(&self, field: &str, text: &str, mode: MatchMode) -> Box<dyn Query> {
        let terms: Vec<Box<dyn Query>> = self
            .terms(field, text)
            .into_iter()
            .map(|term| Box::new(term) as Box<dyn Query>)
            .collect();
        if terms.is_empty() {
            return Box::new(self.term_query(field, ""));
        }
        match mode {
            MatchMode::And => Box::new(AndQuery::new(terms)),
            MatchMode::Or => Box::new(OrQuery::new(terms)),
        }
    }

    /// Build an executable query from an expression.
    ///
    /// A term leaf whose text analyzes to a single token becomes that term;
    /// several tokens are OR-combined.
    pub fn parse(&self, expr: &QueryExpr) -> Result<Box<dyn Query>> {
        let query = expr.build(&mut |field: &str, value: &str| self.leaf_query(field, value))?;
        debug!("parsed query {}", query.describe());
        Ok(query)
    }

    fn leaf_query(&self, field: &str, value: &str) -> Box<dyn Query> {
        let mut terms = self.terms(field, value);
        match terms.len() {
            0 => Box::new(self.term_query(field, "")),
            1 => Box::new(terms.remove(0)),
            _ => Box::new(OrQuery::new(
                terms
                    .into_iter()
                    .map(|term| Box::new(term) as Box<dyn Query>)
                    .collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocId;
    use crate::document::SimpleDocument;
    use crate::index::IndexConfig;

    fn cities() -> LiteIndex {
        let index = LiteIndex::open_in_memory(IndexConfig::default(), None).unwrap();
        index
            .index(vec![
                SimpleDocument::new(0).add_field("name", "Amsterdam").add_field("country", "NL"),
                SimpleDocument::new(1).add_field("name", "Amsterdam, USA").add_field("country", "USA"),
                SimpleDocument::new(2).add_field("name", "London").add_field("country", "UK"),
                SimpleDocument::new(3).add_field("name", "Sofia Amsterdam").add_field("country", "BG"),
            ])
            .unwrap();
        index
    }

    fn ids(index: &LiteIndex, mut query: Box<dyn Query>) -> Vec<DocId> {
        let mut out = Vec::new();
        index.for_each(query.as_mut(), |id, _| out.push(id));
        out
    }

    #[test]
    fn test_terms_follow_token_order() {
        let index = cities();
        let terms = index.terms("name", "Sofia amsterdam");
        let names: Vec<&str> = terms.iter().map(TermQuery::name).collect();
        assert_eq!(names, vec!["name/sofia", "name/amsterdam"]);
        assert_eq!(terms[1].postings(), &[0, 1, 3]);
    }

    #[test]
    fn test_missing_and_broken_terms() {
        let index = cities();

        let missing = index.term_query("name", "paris");
        assert!(missing.is_empty());
        assert_eq!(missing.name(), "missing(name:paris)");

        let broken = index.term_query("", "paris");
        assert!(broken.is_empty());
        assert_eq!(broken.name(), "broken(:paris)");
        assert_eq!(index.term_query("name", "").name(), "broken(name:)");
    }

    #[test]
    fn test_text_query_modes() {
        let index = cities();
        assert_eq!(
            ids(&index, index.text_query("name", "Amsterdam Sofia", MatchMode::And)),
            vec![3]
        );
        assert_eq!(
            ids(&index, index.text_query("name", "Amsterdam Sofia", MatchMode::Or)),
            vec![0, 1, 3]
        );
        assert!(ids(&index, index.text_query("name", "  ", MatchMode::Or)).is_empty());
    }

    #[test]
    fn test_missing_term_does_not_break_disjunction() {
        let index = cities();
        assert_eq!(
            ids(&index, index.text_query("name", "london atlantis", MatchMode::Or)),
            vec![2]
        );
    }

    #[test]
    fn test_parse_expression() {
        let index = cities();
        let expr = QueryExpr::and_not(
            vec![QueryExpr::term("name", "amsterdam")],
            QueryExpr::term("country", "usa"),
        );
        assert_eq!(ids(&index, index.parse(&expr).unwrap()), vec![0, 3]);

        // several tokens in one leaf are OR-combined
        let expr = QueryExpr::term("name", "london sofia");
        assert_eq!(ids(&index, index.parse(&expr).unwrap()), vec![2, 3]);

        assert!(index.parse(&QueryExpr::or(vec![])).is_err());
    }

    #[test]
    fn test_match_mode_parse() {
        assert_eq!("AND".parse::<MatchMode>().unwrap(), MatchMode::And);
        assert_eq!("or".parse::<MatchMode>().unwrap(), MatchMode::Or);
        assert!("xor".parse::<MatchMode>().is_err());
    }
}
