use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::DocId;

/// Anything that can be indexed.
///
/// Identifiers are assigned by the caller and must stay unique and stable for
/// the lifetime of the index; the index never recycles or checks them beyond
/// rejecting the reserved [`NO_MORE_DOCS`](crate::query::NO_MORE_DOCS) value.
pub trait Document {
    /// Stable identifier of this document.
    fn doc_id(&self) -> DocId;

    /// Raw values to analyze, keyed by field name.
    ///
    /// Fields with an empty name are skipped by the indexer.
    fn indexable_fields(&self) -> HashMap<String, Vec<String>>;
}

/// A plain document: an id plus a list of values per field.
///
/// This is the shape read by the command line loader, one JSON object per
/// line:
///
/// ```json
/// {"id": 3, "fields": {"name": ["Sofia Amsterdam"], "country": ["BG"]}}
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleDocument {
    /// The document id.
    pub id: DocId,
    /// Field values, in the order they should be analyzed.
    #[serde(default)]
    pub fields: HashMap<String, Vec<String>>,
}

impl SimpleDocument {
    /// Create a new document without fields.
    pub fn new(id: DocId) -> Self {
        SimpleDocument {
            id,
            fields: HashMap::new(),
        }
    }

    /// Append a value to `name`.
    pub fn add_field<S: Into<String>, V: Into<String>>(mut self, name: S, value: V) -> Self {
        self.fields.entry(name.into()).or_default().push(value.into());
        self
    }

    /// Get the values of a field.
    pub fn get_field(&self, name: &str) -> Option<&[String]> {
        self.fields.get(name).map(Vec::as_slice)
    }
}

impl Document for SimpleDocument {
    fn doc_id(&self) -> DocId {
        self.id
    }

    fn indexable_fields(&self) -> HashMap<String, Vec<String>> {
        self.fields.clone()
    }
}

impl<D: Document + ?Sized> Document for &D {
    fn doc_id(&self) -> DocId {
        (**self).doc_id()
    }

    fn indexable_fields(&self) -> HashMap<String, Vec<String>> {
        (**self).indexable_fields()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_appends_values() {
        let doc = SimpleDocument::new(4)
            .add_field("names", "Sofia")
            .add_field("names", "София")
            .add_field("country", "BG");

        assert_eq!(doc.doc_id(), 4);
        assert_eq!(doc.get_field("names").unwrap(), ["Sofia", "София"]);
        assert_eq!(doc.indexable_fields().len(), 2);
        assert!(doc.get_field("missing").is_none());
    }

    #[test]
    fn test_json_shape() {
        let doc: SimpleDocument =
            serde_json::from_str(r#"{"id": 3, "fields": {"name": ["Sofia Amsterdam"]}}"#).unwrap();
        assert_eq!(doc, SimpleDocument::new(3).add_field("name", "Sofia Amsterdam"));

        let bare: SimpleDocument = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert!(bare.fields.is_empty());
    }
}
