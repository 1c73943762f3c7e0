//! Filtered song catalog and its recommender.

use super::{MetadataRow, Product};
use crate::error::Result;
use crate::recommend::{ContentRecommender, Recommendation};
use std::path::Path;
use tracing::info;

/// Songs that carry a title, a brand and an ASIN.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongCatalog {
    products: Vec<Product>,
}

impl SongCatalog {
    /// Keep the complete products, preserving order.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        let total = products.len();
        let products: Vec<Product> = products.into_iter().filter(Product::is_complete).collect();
        info!(
            kept = products.len(),
            dropped = total - products.len(),
            "filtered song catalog"
        );
        Self { products }
    }

    /// Parse rows loaded from `path`, then filter them.
    ///
    /// # Errors
    ///
    /// Returns [`PalateError::Json`](crate::PalateError::Json) when a row
    /// has a mistyped title, brand, asin or description.
    pub fn from_rows(rows: &[MetadataRow], path: &Path) -> Result<Self> {
        let products = rows
            .iter()
            .map(|row| Product::from_row(row, path))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_products(products))
    }

    /// Products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of songs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when every product was filtered out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Title of the first song, if any.
    #[must_use]
    pub fn first_title(&self) -> Option<&str> {
        self.products.first().map(|p| p.title.as_str())
    }
}

/// Ranks catalog songs by the similarity of their combined text.
#[derive(Debug, Clone)]
pub struct SongRecommender {
    ranker: ContentRecommender,
}

impl SongRecommender {
    /// Vectorize the combined text of every song.
    ///
    /// # Errors
    ///
    /// Returns [`PalateError::EmptyInput`](crate::PalateError::EmptyInput)
    /// for an empty catalog or one whose text is all stop words.
    pub fn fit(catalog: &SongCatalog) -> Result<Self> {
        let titles: Vec<&str> = catalog.products.iter().map(|p| p.title.as_str()).collect();
        let texts: Vec<String> = catalog.products.iter().map(Product::combined_text).collect();
        let ranker = ContentRecommender::fit(&titles, &texts)?;
        Ok(Self { ranker })
    }

    /// True when `title` names a catalog song (exact match).
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.ranker.find(title).is_some()
    }

    /// Up to `k` songs most similar to `title`; `None` for an unknown title.
    #[must_use]
    pub fn recommend(&self, title: &str, k: usize) -> Option<Vec<Recommendation>> {
        self.ranker.recommend(title, k)
    }

    /// The underlying text ranker.
    #[must_use]
    pub fn ranker(&self) -> &ContentRecommender {
        &self.ranker
    }
}

#[cfg(test)]
#[path = "songs_tests.rs"]
mod tests;
