//! Tokenization strategies for term extraction.
//!
//! - [`WordTokenizer`]: runs of two or more word characters, the usual
//!   pattern for TF-IDF features (punctuation and single letters dropped)
//! - [`WhitespaceTokenizer`]: splits on Unicode whitespace only

use crate::text::Tokenizer;

/// Whitespace tokenizer that splits text on Unicode whitespace characters.
///
/// Punctuation attached to words is preserved.
///
/// ```
/// use palate::text::{Tokenizer, tokenize::WhitespaceTokenizer};
///
/// let tokens = WhitespaceTokenizer::new().tokenize("Hello,  world!");
/// assert_eq!(tokens, vec!["Hello,", "world!"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}

/// Word tokenizer keeping runs of word characters.
///
/// A word character is alphanumeric (any script) or `_`. Runs shorter than
/// `min_len` characters are discarded; the default of 2 drops stray letters
/// such as the "s" of "Sinatra's".
///
/// ```
/// use palate::text::{Tokenizer, tokenize::WordTokenizer};
///
/// let tokens = WordTokenizer::new().tokenize("Sinatra's Greatest Hits (Vol. 2)");
/// assert_eq!(tokens, vec!["Sinatra", "Greatest", "Hits", "Vol"]);
/// ```
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    min_len: usize,
}

impl WordTokenizer {
    /// Create a word tokenizer with a minimum token length of 2.
    #[must_use]
    pub fn new() -> Self {
        Self { min_len: 2 }
    }

    /// Set the minimum token length in characters (at least 1).
    #[must_use]
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len.max(1);
        self
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !Self::is_word_char(c))
            .filter(|token| token.chars().count() >= self.min_len)
            .map(str::to_string)
            .collect()
    }
}
