//! Document similarity metrics.
//!
//! - [`cosine_similarity`] for sparse TF-IDF vectors
//! - [`cosine_similarity_dense`] for plain slices
//! - [`SimilarityMatrix`], the full pairwise matrix for small corpora

use crate::error::{PalateError, Result};
use crate::text::vectorize::{SparseVector, TfidfMatrix};

/// Cosine similarity of two sparse vectors.
///
/// ```text
/// cosine_sim(A, B) = (A · B) / (||A|| * ||B||)
/// ```
///
/// A zero vector is orthogonal to everything, including itself.
///
/// ```
/// use palate::text::similarity::cosine_similarity;
/// use palate::text::vectorize::SparseVector;
///
/// let a = SparseVector::from_pairs(vec![(0, 1.0), (1, 1.0)]);
/// let b = SparseVector::from_pairs(vec![(1, 2.0)]);
/// assert!((cosine_similarity(&a, &b) - 0.5f64.sqrt()).abs() < 1e-12);
/// ```
#[must_use]
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    a.dot(b) / (norm_a * norm_b)
}

/// Cosine similarity of two dense vectors.
///
/// # Errors
///
/// Returns an error when the lengths differ or the vectors are empty.
pub fn cosine_similarity_dense(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(PalateError::invalid_param(
            "vector length",
            b.len(),
            &format!("{} to match the first vector", a.len()),
        ));
    }
    if a.is_empty() {
        return Err(PalateError::EmptyInput("vectors cannot be empty".to_string()));
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (norm_a * norm_b))
}

/// Symmetric N×N cosine similarity matrix.
///
/// Storage is quadratic in the number of documents; ranking a single
/// query against a large corpus should go through
/// [`ContentRecommender`](crate::recommend::ContentRecommender) instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute all pairwise similarities of the rows of `matrix`.
    ///
    /// The diagonal is 1 for every non-empty row.
    #[must_use]
    pub fn from_tfidf(matrix: &TfidfMatrix) -> Self {
        let n = matrix.n_rows();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            let row_i = matrix.row(i);
            data[i * n + i] = if row_i.is_empty() { 0.0 } else { 1.0 };
            for j in (i + 1)..n {
                let sim = cosine_similarity(row_i, matrix.row(j));
                data[i * n + j] = sim;
                data[j * n + i] = sim;
            }
        }
        Self { n, data }
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// True for an empty corpus.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity of documents `i` and `j`, `None` when out of range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.n && j < self.n).then(|| self.data[i * self.n + j])
    }

    /// Row `i` of the matrix.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        (i < self.n).then(|| &self.data[i * self.n..(i + 1) * self.n])
    }
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
