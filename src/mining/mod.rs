//! Pattern mining for association rule discovery.
//!
//! Transactions are sets of named items (recipe ingredients, basket
//! products). [`Apriori`] enumerates frequent itemsets level by level and
//! derives association rules from them; results come back as plain tagged
//! records ([`FrequentItemset`], [`AssociationRule`], [`MinedItemset`]).
//!
//! # Example
//!
//! ```
//! use palate::mining::Apriori;
//!
//! let transactions = vec![
//!     vec!["a", "b"],
//!     vec!["a", "b", "c"],
//!     vec!["a", "b"],
//!     vec!["a", "c"],
//! ];
//!
//! let frequent = Apriori::new()
//!     .with_min_support(0.5)
//!     .frequent_itemsets_of(&transactions)
//!     .expect("thresholds are valid");
//!
//! let ab = frequent
//!     .iter()
//!     .find(|set| set.items == ["a", "b"])
//!     .expect("{a, b} is frequent");
//! assert!((ab.support - 0.75).abs() < 1e-12);
//! ```

mod apriori;
mod catalog;

pub use apriori::Apriori;
pub use catalog::ItemCatalog;

use serde::Serialize;

/// Itemset with its support (fraction of transactions containing it).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequentItemset<T = String> {
    /// Items, in first-seen order
    pub items: Vec<T>,
    /// Fraction of transactions containing every item
    pub support: f64,
}

/// Association rule: `base => add`.
///
/// `base` and `add` are disjoint and non-empty; together they form a
/// frequent itemset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationRule<T = String> {
    /// Left-hand side
    pub base: Vec<T>,
    /// Right-hand side
    pub add: Vec<T>,
    /// Support of `base ∪ add`
    pub support: f64,
    /// P(add | base) = support(base ∪ add) / support(base)
    pub confidence: f64,
    /// confidence / support(add)
    pub lift: f64,
}

/// A frequent itemset together with the rules that survived filtering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinedItemset<T = String> {
    /// The itemset and its support
    pub itemset: FrequentItemset<T>,
    /// Rules partitioning the itemset that met confidence and lift
    pub rules: Vec<AssociationRule<T>>,
}

/// Decoded outcome of one mining run.
///
/// Records are kept in discovery order (shorter itemsets first); use
/// [`MiningResult::top_itemsets`] for the support ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MiningResult {
    /// Number of transactions mined
    pub n_transactions: usize,
    /// Support threshold used
    pub min_support: f64,
    /// Every itemset that produced at least one rule
    pub records: Vec<MinedItemset>,
}

impl MiningResult {
    /// True when no itemset produced a rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The `n` best itemsets by support. Ties keep discovery order.
    #[must_use]
    pub fn top_itemsets(&self, n: usize) -> Vec<&FrequentItemset> {
        let mut ranked: Vec<&FrequentItemset> =
            self.records.iter().map(|r| &r.itemset).collect();
        // sort_by is stable, so equal supports stay in discovery order
        ranked.sort_by(|a, b| b.support.total_cmp(&a.support));
        ranked.truncate(n);
        ranked
    }

    /// All rules across all records, in record order.
    pub fn rules(&self) -> impl Iterator<Item = &AssociationRule> {
        self.records.iter().flat_map(|r| r.rules.iter())
    }

    /// Rules whose lift is strictly greater than `threshold`.
    #[must_use]
    pub fn rules_with_lift_above(&self, threshold: f64) -> Vec<&AssociationRule> {
        self.rules().filter(|rule| rule.lift > threshold).collect()
    }
}
