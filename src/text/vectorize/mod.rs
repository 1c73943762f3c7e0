//! TF-IDF vectorization into sparse, L2-normalised vectors.
//!
//! **TF-IDF formula** (smooth IDF, the default):
//! ```text
//! tfidf(t, d) = tf(t, d) × idf(t)
//! tf(t, d)    = count of term t in document d
//! idf(t)      = ln((1 + N) / (1 + df(t))) + 1
//! ```
//! Each document vector is then scaled to unit L2 norm, so the cosine
//! similarity of two documents is just their dot product.
//!
//! Vectors are sparse because a catalog of tens of thousands of product
//! descriptions has a vocabulary of the same order, while each row holds
//! only a few dozen terms.

use crate::error::{PalateError, Result};
use crate::text::stopwords::StopWordsFilter;
use crate::text::tokenize::WordTokenizer;
use crate::text::Tokenizer;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Sparse vector with strictly ascending indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Build from `(index, value)` pairs in any order.
    ///
    /// Duplicate indices are summed and explicit zeros dropped.
    ///
    /// ```
    /// use palate::text::vectorize::SparseVector;
    ///
    /// let v = SparseVector::from_pairs(vec![(3, 1.0), (1, 2.0), (3, 0.5)]);
    /// assert_eq!(v.get(3), 1.5);
    /// assert_eq!(v.get(2), 0.0);
    /// assert_eq!(v.nnz(), 2);
    /// ```
    #[must_use]
    pub fn from_pairs(mut pairs: Vec<(usize, f64)>) -> Self {
        pairs.sort_by_key(|&(idx, _)| idx);
        let mut indices: Vec<usize> = Vec::with_capacity(pairs.len());
        let mut values: Vec<f64> = Vec::with_capacity(pairs.len());
        for (idx, value) in pairs {
            if indices.last() == Some(&idx) {
                if let Some(last) = values.last_mut() {
                    *last += value;
                }
            } else {
                indices.push(idx);
                values.push(value);
            }
        }

        let (indices, values) = indices
            .into_iter()
            .zip(values)
            .filter(|&(_, v)| v != 0.0)
            .unzip();
        Self { indices, values }
    }

    /// Number of stored (non-zero) entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// True when every entry is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Value at `index` (0.0 when absent).
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        self.indices
            .binary_search(&index)
            .map_or(0.0, |pos| self.values[pos])
    }

    /// Iterate over `(index, value)` entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Dot product by merging the two index lists.
    #[must_use]
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for v in &mut self.values {
                *v /= norm;
            }
        }
    }
}

/// Row-sparse document-term matrix produced by [`TfidfVectorizer`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TfidfMatrix {
    n_cols: usize,
    rows: Vec<SparseVector>,
}

impl TfidfMatrix {
    /// Number of documents.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Vocabulary size.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Vector of document `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_rows()`.
    #[must_use]
    pub fn row(&self, i: usize) -> &SparseVector {
        &self.rows[i]
    }

    /// All document vectors.
    #[must_use]
    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    /// Dense copy of one row.
    #[must_use]
    pub fn dense_row(&self, i: usize) -> Vec<f64> {
        let mut dense = vec![0.0; self.n_cols];
        for (idx, value) in self.rows[i].iter() {
            dense[idx] = value;
        }
        dense
    }
}

/// TF-IDF vectorizer that converts text to L2-normalised TF-IDF vectors.
///
/// Defaults: [`WordTokenizer`], lowercase, no stop words, smooth IDF, raw
/// term counts. The vocabulary is sorted alphabetically, so column `j` is
/// the `j`-th term in lexical order.
///
/// # Examples
///
/// ```
/// use palate::text::vectorize::TfidfVectorizer;
///
/// let docs = vec!["the cat sat on the mat", "the dog sat on the log"];
///
/// let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
/// let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
///
/// assert_eq!(matrix.n_rows(), 2);
/// // "the" and "on" are stop words
/// assert_eq!(vectorizer.vocabulary_size(), 5);
/// ```
#[allow(missing_debug_implementations)]
pub struct TfidfVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    lowercase: bool,
    stop_words: Option<StopWordsFilter>,
    smooth_idf: bool,
    sublinear_tf: bool,
    vocabulary: HashMap<String, usize>,
    idf_values: Vec<f64>,
}

impl TfidfVectorizer {
    /// Create a new `TfidfVectorizer` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(WordTokenizer::new()),
            lowercase: true,
            stop_words: None,
            smooth_idf: true,
            sublinear_tf: false,
            vocabulary: HashMap::new(),
            idf_values: Vec::new(),
        }
    }

    /// Replace the tokenizer.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set whether text is lowercased before tokenizing.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Drop English stop words.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    /// Drop a custom stop-word set.
    #[must_use]
    pub fn with_stop_words(mut self, filter: StopWordsFilter) -> Self {
        self.stop_words = Some(filter);
        self
    }

    /// Toggle smooth IDF (`ln((1+N)/(1+df)) + 1` vs `ln(N/df) + 1`).
    #[must_use]
    pub fn with_smooth_idf(mut self, smooth: bool) -> Self {
        self.smooth_idf = smooth;
        self
    }

    /// Use sublinear TF scaling: `tf = 1 + ln(tf)`.
    #[must_use]
    pub fn with_sublinear_tf(mut self, sublinear: bool) -> Self {
        self.sublinear_tf = sublinear;
        self
    }

    fn terms(&self, text: &str) -> Vec<String> {
        let tokens = if self.lowercase {
            self.tokenizer.tokenize(&text.to_lowercase())
        } else {
            self.tokenizer.tokenize(text)
        };
        match &self.stop_words {
            Some(filter) => filter.filter_owned(tokens),
            None => tokens,
        }
    }

    /// Learn vocabulary and IDF weights.
    ///
    /// # Errors
    ///
    /// Returns [`PalateError::EmptyInput`] when there are no documents or
    /// every term was filtered out.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(PalateError::EmptyInput(
                "cannot fit TF-IDF on zero documents".to_string(),
            ));
        }

        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let unique: HashSet<String> = self.terms(doc.as_ref()).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(PalateError::EmptyInput(
                "empty vocabulary; documents contain only stop words".to_string(),
            ));
        }

        let mut terms: Vec<(String, usize)> = doc_freq.into_iter().collect();
        terms.sort_by(|a, b| a.0.cmp(&b.0));

        let n_docs = documents.len() as f64;
        self.idf_values = terms
            .iter()
            .map(|&(_, df)| {
                let df = df as f64;
                if self.smooth_idf {
                    ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
                } else {
                    (n_docs / df).ln() + 1.0
                }
            })
            .collect();
        self.vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(idx, (term, _))| (term, idx))
            .collect();

        debug!(
            documents = documents.len(),
            vocabulary = self.vocabulary.len(),
            "tf-idf vocabulary fitted"
        );
        Ok(())
    }

    /// Transform documents with the learned vocabulary.
    ///
    /// Terms outside the vocabulary are ignored; a document with no known
    /// term becomes an empty (all-zero) vector.
    ///
    /// # Errors
    ///
    /// Returns [`PalateError::EmptyInput`] if called before [`fit`](Self::fit).
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<TfidfMatrix> {
        if self.vocabulary.is_empty() {
            return Err(PalateError::EmptyInput(
                "vocabulary is empty; call fit() first".to_string(),
            ));
        }

        let rows = documents
            .iter()
            .map(|doc| {
                let mut counts: HashMap<usize, f64> = HashMap::new();
                for term in self.terms(doc.as_ref()) {
                    if let Some(&idx) = self.vocabulary.get(&term) {
                        *counts.entry(idx).or_insert(0.0) += 1.0;
                    }
                }
                let pairs = counts
                    .into_iter()
                    .map(|(idx, tf)| {
                        let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                        (idx, tf * self.idf_values[idx])
                    })
                    .collect();
                let mut row = SparseVector::from_pairs(pairs);
                row.normalize();
                row
            })
            .collect();

        Ok(TfidfMatrix {
            n_cols: self.vocabulary.len(),
            rows,
        })
    }

    /// Fit on `documents`, then transform them.
    ///
    /// # Errors
    ///
    /// See [`fit`](Self::fit).
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<TfidfMatrix> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Learned term -> column mapping.
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// IDF weight per column.
    #[must_use]
    pub fn idf_values(&self) -> &[f64] {
        &self.idf_values
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
