//! Association-rule analysis for one cuisine.

use super::RecipeBook;
use crate::config::MiningConfig;
use crate::error::Result;
use crate::mining::{Apriori, AssociationRule, FrequentItemset, MiningResult};
use serde::Serialize;
use tracing::info;

/// Mining outcome for one cuisine, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuisineAnalysis {
    /// Cuisine as queried
    pub cuisine: String,
    /// Recipes of that cuisine
    pub recipe_count: usize,
    /// Support threshold actually used
    pub min_support: f64,
    /// Best itemsets by support
    pub top_itemsets: Vec<FrequentItemset>,
    /// Rules whose lift exceeds the reporting threshold
    pub strong_rules: Vec<AssociationRule>,
    /// Lift threshold used for `strong_rules`
    pub lift_threshold: f64,
}

impl CuisineAnalysis {
    /// `Ingredients: a, b | Support: 0.1234` lines.
    #[must_use]
    pub fn itemset_lines(&self) -> Vec<String> {
        self.top_itemsets.iter().map(format_itemset).collect()
    }

    /// `Rule: a -> b | Confidence: 0.1234 | Lift: 2.34` lines.
    #[must_use]
    pub fn rule_lines(&self) -> Vec<String> {
        self.strong_rules.iter().map(format_rule).collect()
    }
}

/// Mine ingredient rules for the recipes of `cuisine`.
///
/// Matching ignores case and surrounding whitespace. A cuisine with no
/// recipes yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`PalateError::InvalidHyperparameter`](crate::PalateError::InvalidHyperparameter)
/// when the configured thresholds are out of range.
pub fn analyze_cuisine(
    book: &RecipeBook,
    cuisine: &str,
    config: &MiningConfig,
) -> Result<Option<CuisineAnalysis>> {
    let query = cuisine.trim();
    let transactions: Vec<&[String]> = book
        .by_cuisine(query)
        .map(|recipe| recipe.ingredients.as_slice())
        .collect();
    if transactions.is_empty() {
        return Ok(None);
    }

    let n = transactions.len();
    let min_support = config.min_support.unwrap_or(1.0 / n as f64);
    info!(cuisine = query, recipes = n, min_support, "mining cuisine");

    let baskets: Vec<Vec<&str>> = transactions
        .iter()
        .map(|ingredients| ingredients.iter().map(String::as_str).collect())
        .collect();
    let result: MiningResult = Apriori::new()
        .with_min_support(min_support)
        .with_min_confidence(config.min_confidence)
        .with_min_lift(config.min_lift)
        .with_min_length(config.min_length)
        .with_max_length(config.max_length)
        .mine(&baskets)?;

    let top_itemsets = result
        .top_itemsets(config.top_itemsets)
        .into_iter()
        .cloned()
        .collect();
    let strong_rules = result
        .rules_with_lift_above(config.report_lift_above)
        .into_iter()
        .cloned()
        .collect();

    Ok(Some(CuisineAnalysis {
        cuisine: query.to_string(),
        recipe_count: n,
        min_support,
        top_itemsets,
        strong_rules,
        lift_threshold: config.report_lift_above,
    }))
}

/// Render an itemset as `Ingredients: a, b | Support: 0.1234`.
#[must_use]
pub fn format_itemset(itemset: &FrequentItemset) -> String {
    format!(
        "Ingredients: {} | Support: {:.4}",
        itemset.items.join(", "),
        itemset.support
    )
}

/// Render a rule as `Rule: a -> b | Confidence: 0.1234 | Lift: 2.34`.
#[must_use]
pub fn format_rule(rule: &AssociationRule) -> String {
    format!(
        "Rule: {} -> {} | Confidence: {:.4} | Lift: {:.2}",
        rule.base.join(", "),
        rule.add.join(", "),
        rule.confidence,
        rule.lift
    )
}

/// Capitalise the first letter of every word and lowercase the rest.
///
/// A word starts after any non-alphabetic character, so `"south-east
/// asian"` becomes `"South-East Asian"`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
