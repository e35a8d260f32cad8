//! Documents handed to the index.

#[allow(clippy::module_inception)]
pub mod document;

pub use document::{Document, SimpleDocument};
