//! Query execution over posting lists.
//!
//! Every query is a document iterator following the "advance until
//! exhausted, read doc id, read score" protocol of the [`Query`] trait.
//! [`TermQuery`] iterates one posting list; [`AndQuery`], [`OrQuery`] and
//! [`DisMaxQuery`] combine other queries. [`QueryExpr`] is a serializable
//! description of such a tree whose leaves are resolved by the index.

pub mod collector;
pub mod conjunction;
pub mod disjunction;
pub mod expr;
#[allow(clippy::module_inception)]
pub mod query;
pub mod term;

pub use self::collector::{Hit, TopDocs, for_each};
pub use self::conjunction::AndQuery;
pub use self::disjunction::{DisMaxQuery, OrQuery};
pub use self::expr::QueryExpr;
pub use self::query::{NO_MORE_DOCS, Query};
pub use self::term::TermQuery;
