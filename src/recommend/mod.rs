//! Content-based recommendation.
//!
//! Items are described by free text; [`ContentRecommender`] weights that
//! text with TF-IDF and ranks every other item by cosine similarity to a
//! query item.
//!
//! # Quick Start
//!
//! ```
//! use palate::recommend::ContentRecommender;
//!
//! let titles = ["Kind of Blue", "Blue Train", "Master of Puppets"];
//! let texts = [
//!     "Kind of Blue modal jazz trumpet",
//!     "Blue Train hard bop jazz saxophone",
//!     "Master of Puppets thrash metal",
//! ];
//! let recommender = ContentRecommender::fit(&titles, &texts).expect("non-empty corpus");
//!
//! let recs = recommender.recommend("Kind of Blue", 2).expect("title exists");
//! assert_eq!(recs.len(), 2);
//! assert_eq!(recs[0].title, "Blue Train");
//! ```

use crate::error::{PalateError, Result};
use crate::text::similarity::cosine_similarity;
use crate::text::vectorize::{TfidfMatrix, TfidfVectorizer};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// One ranked recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Position of the item in the corpus
    pub index: usize,
    /// Item title
    pub title: String,
    /// Cosine similarity to the query
    pub score: f64,
}

/// TF-IDF + cosine similarity recommender over a fixed corpus.
#[derive(Debug, Clone)]
pub struct ContentRecommender {
    titles: Vec<String>,
    first_index: HashMap<String, usize>,
    matrix: TfidfMatrix,
}

impl ContentRecommender {
    /// Vectorize `texts` (English stop words removed) and index `titles`.
    ///
    /// `titles[i]` names the item described by `texts[i]`.
    ///
    /// # Errors
    ///
    /// Returns an error when the two slices differ in length, the corpus is
    /// empty, or no term survives stop-word removal.
    pub fn fit<T: AsRef<str>, S: AsRef<str>>(titles: &[T], texts: &[S]) -> Result<Self> {
        let vectorizer = TfidfVectorizer::new().with_stop_words_english();
        Self::fit_with(vectorizer, titles, texts)
    }

    /// Same as [`fit`](Self::fit) with a caller-configured vectorizer.
    ///
    /// # Errors
    ///
    /// See [`fit`](Self::fit).
    pub fn fit_with<T: AsRef<str>, S: AsRef<str>>(
        mut vectorizer: TfidfVectorizer,
        titles: &[T],
        texts: &[S],
    ) -> Result<Self> {
        if titles.len() != texts.len() {
            return Err(PalateError::invalid_param(
                "texts",
                format!("{} entries", texts.len()),
                &format!("one text per title ({} titles)", titles.len()),
            ));
        }

        let matrix = vectorizer.fit_transform(texts)?;
        let titles: Vec<String> = titles.iter().map(|t| t.as_ref().to_string()).collect();

        let mut first_index = HashMap::with_capacity(titles.len());
        for (idx, title) in titles.iter().enumerate() {
            first_index.entry(title.clone()).or_insert(idx);
        }

        info!(
            items = titles.len(),
            vocabulary = matrix.n_cols(),
            "content recommender ready"
        );
        Ok(Self {
            titles,
            first_index,
            matrix,
        })
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// True when the corpus is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Item titles in corpus order.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Index of the first item with exactly this title.
    #[must_use]
    pub fn find(&self, title: &str) -> Option<usize> {
        self.first_index.get(title).copied()
    }

    /// TF-IDF vectors of the corpus.
    #[must_use]
    pub fn matrix(&self) -> &TfidfMatrix {
        &self.matrix
    }

    /// Rank every other item against item `query`.
    ///
    /// Scores sort descending; equal scores keep corpus order. The query
    /// itself is never returned, so the result has `min(k, N - 1)` items.
    /// An out-of-range `query` yields an empty list.
    #[must_use]
    pub fn rank(&self, query: usize, k: usize) -> Vec<Recommendation> {
        if query >= self.len() {
            return Vec::new();
        }

        let query_vec = self.matrix.row(query);
        let mut scored: Vec<(usize, f64)> = self
            .matrix
            .rows()
            .iter()
            .enumerate()
            .filter(|&(idx, _)| idx != query)
            .map(|(idx, row)| (idx, cosine_similarity(query_vec, row)))
            .collect();

        // stable: ties stay in ascending index order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(k);

        debug!(query, returned = scored.len(), "ranked similar items");
        scored
            .into_iter()
            .map(|(index, score)| Recommendation {
                index,
                title: self.titles[index].clone(),
                score,
            })
            .collect()
    }

    /// Top `k` items similar to the item titled `title`.
    ///
    /// Returns `None` when no item has that exact title.
    #[must_use]
    pub fn recommend(&self, title: &str, k: usize) -> Option<Vec<Recommendation>> {
        self.find(title).map(|idx| self.rank(idx, k))
    }
}
