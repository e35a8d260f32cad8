//! Edge n-gram filter for prefix matching.

use crate::analysis::token_filter::Filter;
use crate::error::{LiteIndexError, Result};

/// A filter that replaces every token with its leading prefixes.
///
/// For each token, prefixes of `min_gram..=max_gram` characters that are
/// shorter than the token are emitted, followed by the token itself so exact
/// matches keep working.
#[derive(Clone, Debug)]
pub struct EdgeNgramFilter {
    min_gram: usize,
    max_gram: usize,
}

impl EdgeNgramFilter {
    /// Create a new edge n-gram filter.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_gram` is 0 or `max_gram` is less than `min_gram`.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        if min_gram == 0 {
            return Err(LiteIndexError::analysis("min_gram must be at least 1"));
        }
        if max_gram < min_gram {
            return Err(LiteIndexError::analysis(format!(
                "max_gram ({max_gram}) must be >= min_gram ({min_gram})"
            )));
        }
        Ok(Self { min_gram, max_gram })
    }
}

impl Filter for EdgeNgramFilter {
    fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        let mut out = Vec::with_capacity(tokens.len() * (self.max_gram - self.min_gram + 2));
        for token in tokens {
            let boundaries: Vec<usize> = token
                .char_indices()
                .map(|(idx, _)| idx)
                .skip(1)
                .chain(std::iter::once(token.len()))
                .collect();

            // boundaries[n - 1] is the byte length of the first n characters
            for n in self.min_gram..=self.max_gram {
                if n >= boundaries.len() {
                    break;
                }
                out.push(token[..boundaries[n - 1]].to_string());
            }
            out.push(token);
        }
        out
    }

    fn name(&self) -> &'static str {
        "edge_ngram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_ngrams() {
        let filter = EdgeNgramFilter::new(1, 3).unwrap();
        assert_eq!(
            filter.filter(vec!["london".to_string()]),
            vec!["l", "lo", "lon", "london"]
        );
    }

    #[test]
    fn test_short_token_is_kept_once() {
        let filter = EdgeNgramFilter::new(2, 5).unwrap();
        assert_eq!(filter.filter(vec!["uk".to_string()]), vec!["uk"]);
        assert_eq!(filter.filter(vec!["a".to_string()]), vec!["a"]);
    }

    #[test]
    fn test_multibyte_prefixes() {
        let filter = EdgeNgramFilter::new(1, 2).unwrap();
        assert_eq!(filter.filter(vec!["日本語".to_string()]), vec!["日", "日本", "日本語"]);
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(EdgeNgramFilter::new(0, 2).is_err());
        assert!(EdgeNgramFilter::new(3, 2).is_err());
    }
}
