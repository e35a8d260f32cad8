//! Batch indexing.

use std::sync::atomic::Ordering;

use ahash::{AHashMap, AHashSet};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::DocId;
use crate::codec::encode_postings;
use crate::document::Document;
use crate::error::{LiteIndexError, Result};
use crate::index::LiteIndex;
use crate::index::config::DocCountPolicy;
use crate::query::NO_MORE_DOCS;
use crate::term_key::TermKey;

/// What one committed batch wrote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Distinct document ids in the batch.
    pub documents: usize,
    /// Term keys inserted or appended to.
    pub terms: usize,
}

impl LiteIndex {
    /// Index a batch of documents in a single transaction.
    ///
    /// Postings are grouped by term key across the whole batch, so every key
    /// is written once. Each group is appended to the stored list in document
    /// order. If any write fails nothing from the batch is kept and the error
    /// is returned.
    pub fn index<I>(&self, docs: I) -> Result<BatchSummary>
    where
        I: IntoIterator,
        I::Item: Document,
    {
        let mut postings: AHashMap<TermKey, Vec<DocId>> = AHashMap::new();
        let mut ids = AHashSet::new();

        for doc in docs {
            let doc_id = doc.doc_id();
            if doc_id == NO_MORE_DOCS {
                return Err(LiteIndexError::invalid_argument(format!(
                    "document id {NO_MORE_DOCS} is reserved"
                )));
            }
            ids.insert(doc_id);

            for (field, values) in doc.indexable_fields() {
                if field.is_empty() {
                    continue;
                }
                for value in &values {
                    for token in self.analyzers.analyze_index_field(&field, value) {
                        if token.is_empty() {
                            continue;
                        }
                        postings
                            .entry(TermKey::new(&field, &token))
                            .or_default()
                            .push(doc_id);
                    }
                }
            }
        }

        let mut entries: Vec<(TermKey, Vec<DocId>)> = postings.into_iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let terms = if entries.is_empty() {
            0
        } else {
            self.table.append_all(
                entries
                    .iter()
                    .map(|(key, doc_ids)| (key.as_str(), encode_postings(doc_ids))),
            )?
        };

        if self.config.doc_count_policy == DocCountPolicy::CountBatchDocuments {
            self.total_docs.fetch_add(ids.len(), Ordering::AcqRel);
        }

        debug!(
            "indexed {} documents into {terms} terms of {}",
            ids.len(),
            self.config.table_name
        );
        Ok(BatchSummary {
            documents: ids.len(),
            terms,
        })
    }
}
