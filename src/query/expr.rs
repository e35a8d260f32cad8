//! Serializable query expressions.
//!
//! A [`QueryExpr`] describes a boolean query tree whose leaves are raw
//! `(field, text)` conditions. Building it into an executable [`Query`]
//! requires a resolver for the leaves, normally
//! [`LiteIndex::parse`](crate::index::LiteIndex::parse), which analyzes the
//! text and looks the resulting terms up in storage.
//!
//! The JSON form is tagged by `type`:
//!
//! ```json
//! {"type": "and", "queries": [
//!     {"type": "term", "field": "name", "value": "amsterdam"},
//!     {"type": "or", "queries": [
//!         {"type": "term", "field": "country", "value": "nl"},
//!         {"type": "term", "field": "country", "value": "bg", "boost": 2.0}
//!     ]}
//! ], "not": {"type": "term", "field": "name", "value": "usa"}}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{LiteIndexError, Result};
use crate::query::conjunction::AndQuery;
use crate::query::disjunction::{DisMaxQuery, OrQuery};
use crate::query::query::Query;

fn default_boost() -> f32 {
    1.0
}

/// A boolean query tree over `(field, text)` leaves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryExpr {
    /// Documents matching the analyzed `value` in `field`.
    Term {
        field: String,
        value: String,
        #[serde(default = "default_boost")]
        boost: f32,
    },
    /// Documents matching every sub-expression and not matching `not`.
    And {
        queries: Vec<QueryExpr>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        not: Option<Box<QueryExpr>>,
    },
    /// Documents matching any sub-expression.
    Or { queries: Vec<QueryExpr> },
    /// Like `or`, scored by the best matching sub-expression.
    DisMax {
        queries: Vec<QueryExpr>,
        #[serde(default)]
        tie_breaker: f32,
    },
}

impl QueryExpr {
    pub fn term<F: Into<String>, V: Into<String>>(field: F, value: V) -> Self {
        QueryExpr::Term {
            field: field.into(),
            value: value.into(),
            boost: 1.0,
        }
    }

    pub fn and(queries: Vec<QueryExpr>) -> Self {
        QueryExpr::And { queries, not: None }
    }

    pub fn and_not(queries: Vec<QueryExpr>, not: QueryExpr) -> Self {
        QueryExpr::And {
            queries,
            not: Some(Box::new(not)),
        }
    }

    pub fn or(queries: Vec<QueryExpr>) -> Self {
        QueryExpr::Or { queries }
    }

    pub fn dis_max(queries: Vec<QueryExpr>, tie_breaker: f32) -> Self {
        QueryExpr::DisMax {
            queries,
            tie_breaker,
        }
    }

    /// Parse the JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build an executable query, resolving each leaf with `leaf(field, value)`.
    ///
    /// Composite expressions without sub-expressions are rejected.
    pub fn build<F>(&self, leaf: &mut F) -> Result<Box<dyn Query>>
    where
        F: FnMut(&str, &str) -> Box<dyn Query>,
    {
        match self {
            QueryExpr::Term {
                field,
                value,
                boost,
            } => {
                let mut query = leaf(field, value);
                if *boost != 1.0 {
                    query.set_boost(*boost);
                }
                Ok(query)
            }
            QueryExpr::And { queries, not } => {
                let mut and = AndQuery::new(Self::build_all("and", queries, leaf)?);
                if let Some(not) = not {
                    and = and.with_not(not.build(leaf)?);
                }
                Ok(Box::new(and))
            }
            QueryExpr::Or { queries } => {
                Ok(Box::new(OrQuery::new(Self::build_all("or", queries, leaf)?)))
            }
            QueryExpr::DisMax {
                queries,
                tie_breaker,
            } => Ok(Box::new(DisMaxQuery::new(
                Self::build_all("dis_max", queries, leaf)?,
                *tie_breaker,
            ))),
        }
    }

    fn build_all<F>(kind: &str, queries: &[QueryExpr], leaf: &mut F) -> Result<Vec<Box<dyn Query>>>
    where
        F: FnMut(&str, &str) -> Box<dyn Query>,
    {
        if queries.is_empty() {
            return Err(LiteIndexError::query(format!("{kind} requires at least one query")));
        }
        queries.iter().map(|q| q.build(leaf)).collect()
    }
}
