//! Text processing for content-based similarity.
//!
//! - [`tokenize`]: splitting text into terms
//! - [`stopwords`]: English stop-word filtering
//! - [`vectorize`]: TF-IDF weighting into sparse vectors
//! - [`similarity`]: cosine similarity and the pairwise similarity matrix
//!
//! # Quick Start
//!
//! ```
//! use palate::text::vectorize::TfidfVectorizer;
//! use palate::text::similarity::cosine_similarity;
//!
//! let docs = ["jazz piano trio live", "live jazz quartet", "heavy metal anthems"];
//! let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
//! let matrix = vectorizer.fit_transform(&docs).expect("non-empty vocabulary");
//!
//! let jazz = cosine_similarity(matrix.row(0), matrix.row(1));
//! let metal = cosine_similarity(matrix.row(0), matrix.row(2));
//! assert!(jazz > metal);
//! ```

pub mod similarity;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

/// Splits raw text into terms.
pub trait Tokenizer: Send + Sync {
    /// Tokenize `text`, preserving term order.
    fn tokenize(&self, text: &str) -> Vec<String>;
}
