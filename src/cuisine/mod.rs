//! Cuisine pipeline: recipe loading, descriptive statistics and
//! per-cuisine ingredient association rules.
//!
//! ```
//! use palate::config::MiningConfig;
//! use palate::cuisine::{analyze_cuisine, Recipe, RecipeBook};
//!
//! let book = RecipeBook::from_recipes(vec![
//!     Recipe::new("Greek", ["feta", "olive oil", "oregano"]),
//!     Recipe::new("Greek", ["feta", "oregano"]),
//!     Recipe::new("Greek", ["lamb", "yogurt"]),
//! ]);
//!
//! let analysis = analyze_cuisine(&book, "GREEK", &MiningConfig::default())
//!     .expect("valid thresholds")
//!     .expect("cuisine present");
//! assert_eq!(analysis.recipe_count, 3);
//! assert!(analyze_cuisine(&book, "thai", &MiningConfig::default())
//!     .expect("valid thresholds")
//!     .is_none());
//! ```

mod analysis;
mod recipe;
mod stats;

#[cfg(test)]
#[path = "cuisine_tests.rs"]
mod tests;

pub use analysis::{analyze_cuisine, format_itemset, format_rule, title_case, CuisineAnalysis};
pub use recipe::{Recipe, RecipeBook};
pub use stats::{CuisineCount, IngredientCount, RecipeStats};
