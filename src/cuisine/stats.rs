//! Descriptive statistics over a [`RecipeBook`].

use super::RecipeBook;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Number of recipes for one cuisine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuisineCount {
    /// Cuisine label
    pub cuisine: String,
    /// Recipes carrying that label
    pub recipes: usize,
}

/// Frequency of one ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientCount {
    /// Ingredient name
    pub ingredient: String,
    /// Occurrences across the counted recipes
    pub count: usize,
}

/// Summary of a recipe collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipeStats {
    /// Number of recipes
    pub total_recipes: usize,
    /// Recipes per cuisine, most popular first (ties keep first-seen order)
    pub cuisine_counts: Vec<CuisineCount>,
    /// Mean ingredient count per cuisine, sorted by cuisine name
    pub average_ingredients: Vec<(String, f64)>,
    /// Most common ingredients overall
    pub most_common: Vec<IngredientCount>,
    /// Most common ingredients per cuisine, cuisines in first-seen order
    pub most_common_by_cuisine: Vec<(String, Vec<IngredientCount>)>,
}

impl RecipeStats {
    /// Compute statistics, keeping `top_n` ingredients per list.
    #[must_use]
    pub fn compute(book: &RecipeBook, top_n: usize) -> Self {
        let recipes = book.recipes();

        let mut per_cuisine: Counter = Counter::default();
        let mut overall: Counter = Counter::default();
        let mut by_cuisine: Vec<(String, Counter)> = Vec::new();
        let mut cuisine_slot: HashMap<&str, usize> = HashMap::new();
        let mut ingredient_totals: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

        for recipe in recipes {
            per_cuisine.add(&recipe.cuisine);

            let slot = *cuisine_slot.entry(recipe.cuisine.as_str()).or_insert_with(|| {
                by_cuisine.push((recipe.cuisine.clone(), Counter::default()));
                by_cuisine.len() - 1
            });
            for ingredient in &recipe.ingredients {
                overall.add(ingredient);
                by_cuisine[slot].1.add(ingredient);
            }

            let totals = ingredient_totals.entry(recipe.cuisine.as_str()).or_default();
            totals.0 += recipe.ingredients.len();
            totals.1 += 1;
        }

        let cuisine_counts = per_cuisine
            .ranked()
            .into_iter()
            .map(|(cuisine, recipes)| CuisineCount { cuisine, recipes })
            .collect();

        let average_ingredients = ingredient_totals
            .into_iter()
            .map(|(cuisine, (ingredients, n))| (cuisine.to_string(), ingredients as f64 / n as f64))
            .collect();

        let most_common_by_cuisine = by_cuisine
            .into_iter()
            .map(|(cuisine, counter)| (cuisine, counter.top(top_n)))
            .collect();

        Self {
            total_recipes: recipes.len(),
            cuisine_counts,
            average_ingredients,
            most_common: overall.top(top_n),
            most_common_by_cuisine,
        }
    }

    /// Number of distinct cuisine labels.
    #[must_use]
    pub fn unique_cuisines(&self) -> usize {
        self.cuisine_counts.len()
    }
}

/// Insertion-ordered frequency counter.
#[derive(Debug, Default)]
struct Counter {
    counts: Vec<(String, usize)>,
    slots: HashMap<String, usize>,
}

impl Counter {
    fn add(&mut self, key: &str) {
        match self.slots.get(key) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.slots.insert(key.to_string(), self.counts.len());
                self.counts.push((key.to_string(), 1));
            }
        }
    }

    /// Entries by count descending; equal counts stay in first-seen order.
    fn ranked(self) -> Vec<(String, usize)> {
        let mut counts = self.counts;
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    fn top(self, n: usize) -> Vec<IngredientCount> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|(ingredient, count)| IngredientCount { ingredient, count })
            .collect()
    }
}
