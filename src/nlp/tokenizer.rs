//! Word tokenization
//!
//! Every character that is not alphabetic (punctuation, digits, whitespace,
//! line breaks) acts as a separator, and runs of separators collapse. The
//! surviving words are lower-cased.

/// A letters-only word tokenizer
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Minimum token length in characters
    min_token_length: usize,
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            min_token_length: 1,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Tokenize text into an ordered sequence of lowercase words
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphabetic())
            .filter(|word| !word.is_empty())
            .filter(|word| word.chars().count() >= self.min_token_length)
            .map(str::to_lowercase)
            .collect()
    }

    /// Iterate over consecutive word pairs of `words`
    pub fn pairs(words: &[String]) -> impl Iterator<Item = (&str, &str)> {
        words.windows(2).map(|w| (w[0].as_str(), w[1].as_str()))
    }
}
