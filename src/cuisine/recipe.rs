//! Recipe records and the JSON loader.

use crate::error::{PalateError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// One recipe: a cuisine label and its ingredient list.
///
/// Extra fields in the source JSON (such as `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Cuisine label, as written in the data
    pub cuisine: String,
    /// Ingredients in recipe order
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Convenience constructor.
    pub fn new<I, S>(cuisine: &str, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cuisine: cuisine.to_string(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

/// The loaded recipe collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    /// Wrap already-parsed recipes.
    #[must_use]
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Load a JSON array of recipe objects.
    ///
    /// # Errors
    ///
    /// Missing or malformed files are fatal: an I/O or JSON error is
    /// returned with the path attached.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| PalateError::io(path, e))?;
        let reader = std::io::BufReader::new(file);
        let recipes: Vec<Recipe> =
            serde_json::from_reader(reader).map_err(|source| PalateError::Json {
                path: path.to_path_buf(),
                line: None,
                source,
            })?;

        let empty = recipes.iter().filter(|r| r.ingredients.is_empty()).count();
        if empty > 0 {
            warn!(empty, "recipes without ingredients cannot contribute rules");
        }
        info!(recipes = recipes.len(), path = %path.display(), "loaded recipes");
        Ok(Self { recipes })
    }

    /// All recipes in file order.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True when no recipe was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes whose cuisine matches `cuisine`, ignoring case.
    pub fn by_cuisine<'a>(&'a self, cuisine: &str) -> impl Iterator<Item = &'a Recipe> + 'a {
        let wanted = cuisine.to_lowercase();
        self.recipes
            .iter()
            .filter(move |r| r.cuisine.to_lowercase() == wanted)
    }

    /// True when some recipe belongs to `cuisine` (case-insensitive).
    #[must_use]
    pub fn has_cuisine(&self, cuisine: &str) -> bool {
        self.by_cuisine(cuisine).next().is_some()
    }
}
