//! Song pipeline: product metadata loading, column exploration, catalog
//! filtering and content-based recommendations.
//!
//! Input is Amazon-style product metadata, one JSON object per line,
//! usually gzip-compressed.
//!
//! ```
//! use palate::songs::{Product, SongCatalog, SongRecommender};
//!
//! let catalog = SongCatalog::from_products(vec![
//!     Product::new("Blue Train", "Blue Note", "B001", ["hard bop jazz saxophone"]),
//!     Product::new("Giant Steps", "Atlantic", "B002", ["hard bop jazz saxophone classic"]),
//!     Product::new("Paranoid", "Vertigo", "B003", ["heavy metal riffs"]),
//!     Product::new("No Label", "", "B004", ["dropped before ranking"]),
//! ]);
//! assert_eq!(catalog.len(), 3);
//!
//! let recommender = SongRecommender::fit(&catalog).expect("non-empty catalog");
//! let recs = recommender.recommend("Blue Train", 10).expect("known title");
//! assert_eq!(recs[0].title, "Giant Steps");
//! assert_eq!(recs.len(), 2);
//! ```

mod catalog;
mod explore;
mod export;
mod loader;
mod product;

pub use catalog::{SongCatalog, SongRecommender};
pub use explore::{explore_columns, ColumnSummary, UniqueCount};
pub use export::{write_recommendations, write_recommendations_to};
pub use loader::{read_json_lines, MetadataRow};
pub use product::Product;
