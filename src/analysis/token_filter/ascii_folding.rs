//! Diacritic folding.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::analysis::token_filter::Filter;

/// A filter that removes diacritics ("Zürich" → "Zurich").
///
/// Tokens are decomposed (NFKD) and their combining marks dropped; the
/// compatibility decomposition also flattens ligatures and full-width forms.
#[derive(Clone, Debug, Default)]
pub struct AsciiFoldingFilter;

impl AsciiFoldingFilter {
    pub fn new() -> Self {
        AsciiFoldingFilter
    }

    fn fold(token: String) -> String {
        if token.is_ascii() {
            return token;
        }
        token.nfkd().filter(|c| !is_combining_mark(*c)).collect()
    }
}

impl Filter for AsciiFoldingFilter {
    fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().map(Self::fold).collect()
    }

    fn name(&self) -> &'static str {
        "ascii_folding"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_folding_filter() {
        let filter = AsciiFoldingFilter::new();
        let tokens = vec!["Zürich".to_string(), "São".to_string(), "plain".to_string()];

        assert_eq!(filter.filter(tokens), vec!["Zurich", "Sao", "plain"]);
    }

    #[test]
    fn test_compatibility_forms() {
        let filter = AsciiFoldingFilter::new();
        assert_eq!(filter.filter(vec!["ﬁle".to_string()]), vec!["file"]);
    }
}
