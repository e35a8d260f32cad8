use super::Tokenizer;

/// A tokenizer that emits the whole (trimmed) input as one token.
#[derive(Clone, Debug, Default)]
pub struct WholeTokenizer;

impl WholeTokenizer {
    /// Create a new whole tokenizer.
    pub fn new() -> Self {
        WholeTokenizer
    }
}

impl Tokenizer for WholeTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        vec![text.trim().to_string()]
    }

    fn name(&self) -> &'static str {
        "whole"
    }
}
