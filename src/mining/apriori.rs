//! Apriori frequent itemset mining and association rule generation.

use super::{AssociationRule, FrequentItemset, ItemCatalog, MinedItemset, MiningResult};
use crate::error::{PalateError, Result};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Apriori algorithm over item-id transactions.
///
/// # Algorithm
///
/// 1. Find frequent 1-itemsets (support >= `min_support`)
/// 2. Join frequent (k-1)-itemsets sharing a (k-2)-prefix into k-candidates
/// 3. Drop candidates with an infrequent (k-1)-subset, then count support
/// 4. Repeat until a level is empty (or `max_length` is reached)
/// 5. Split every itemset of at least `min_length` items into `base => add`
///    and keep rules meeting `min_confidence` and `min_lift`
///
/// Itemsets are stored as ascending id lists. With ids from
/// [`ItemCatalog`] that is also first-seen order, which makes discovery
/// order (level by level, lexicographic within a level) deterministic.
///
/// # Example
///
/// ```
/// use palate::mining::Apriori;
///
/// let transactions = vec![vec![0, 1], vec![0, 1, 2], vec![0, 1], vec![0, 2]];
///
/// let mut apriori = Apriori::new()
///     .with_min_support(0.5)
///     .with_min_confidence(0.9);
/// apriori.fit(&transactions).expect("thresholds are valid");
///
/// // {1} => {0} holds in every transaction containing 1
/// let rule = apriori.rules().next().expect("at least one rule");
/// assert_eq!((rule.base.as_slice(), rule.add.as_slice()), (&[1][..], &[0][..]));
/// assert_eq!(rule.confidence, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Apriori {
    min_support: f64,
    min_confidence: f64,
    min_lift: f64,
    min_length: usize,
    max_length: Option<usize>,
    frequent_itemsets: Vec<FrequentItemset<usize>>,
    records: Vec<MinedItemset<usize>>,
}

impl Apriori {
    /// Create a new Apriori instance with default parameters.
    ///
    /// # Default Parameters
    ///
    /// - `min_support`: 0.1 (10%)
    /// - `min_confidence`: 0.5 (50%)
    /// - `min_lift`: 0.0 (no lift filter)
    /// - `min_length`: 2
    /// - `max_length`: unbounded
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_support: 0.1,
            min_confidence: 0.5,
            min_lift: 0.0,
            min_length: 2,
            max_length: None,
            frequent_itemsets: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Set the minimum support threshold, in (0, 1].
    #[must_use]
    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    /// Set the minimum confidence threshold, in [0, 1].
    #[must_use]
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Set the minimum lift a rule needs to be kept.
    #[must_use]
    pub fn with_min_lift(mut self, min_lift: f64) -> Self {
        self.min_lift = min_lift;
        self
    }

    /// Set the minimum itemset length of a mined record.
    ///
    /// Rules need two items, so values below 2 behave like 2.
    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Stop enumerating itemsets longer than `max_length`.
    #[must_use]
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    /// Minimum support threshold in use.
    #[must_use]
    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    fn validate(&self) -> Result<()> {
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(PalateError::invalid_param(
                "min_support",
                self.min_support,
                "a value in (0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(PalateError::invalid_param(
                "min_confidence",
                self.min_confidence,
                "a value in [0, 1]",
            ));
        }
        if self.min_lift.is_nan() || self.min_lift < 0.0 {
            return Err(PalateError::invalid_param(
                "min_lift",
                self.min_lift,
                "a non-negative value",
            ));
        }
        if self.max_length == Some(0) {
            return Err(PalateError::invalid_param("max_length", 0, "at least 1"));
        }
        Ok(())
    }

    /// Fit the Apriori algorithm on transaction data.
    ///
    /// Repeated items inside one transaction count once. An empty
    /// transaction list is not an error: it simply yields no itemsets.
    ///
    /// # Errors
    ///
    /// Returns [`PalateError::InvalidHyperparameter`] when a threshold is
    /// out of range.
    pub fn fit(&mut self, transactions: &[Vec<usize>]) -> Result<()> {
        self.validate()?;
        self.frequent_itemsets.clear();
        self.records.clear();

        if transactions.is_empty() {
            return Ok(());
        }

        let baskets: Vec<Vec<usize>> = transactions
            .iter()
            .map(|t| {
                let mut basket = t.clone();
                basket.sort_unstable();
                basket.dedup();
                basket
            })
            .collect();

        let mut level = self.find_frequent_1_itemsets(&baskets);
        let mut k = 1;

        while !level.is_empty() {
            debug!(k, itemsets = level.len(), "frequent itemsets found");
            self.frequent_itemsets.extend(level.iter().cloned());

            if self.max_length.is_some_and(|max| k >= max) {
                break;
            }

            let candidates = generate_candidates(&level);
            if candidates.is_empty() {
                break;
            }

            level = self.prune_candidates(candidates, &baskets);
            k += 1;
        }

        self.records = self.generate_rules();
        debug!(
            itemsets = self.frequent_itemsets.len(),
            records = self.records.len(),
            "apriori finished"
        );
        Ok(())
    }

    fn find_frequent_1_itemsets(&self, baskets: &[Vec<usize>]) -> Vec<FrequentItemset<usize>> {
        let mut item_counts: HashMap<usize, usize> = HashMap::new();
        for basket in baskets {
            for &item in basket {
                *item_counts.entry(item).or_insert(0) += 1;
            }
        }

        let n_transactions = baskets.len() as f64;
        let mut items: Vec<(usize, usize)> = item_counts.into_iter().collect();
        items.sort_unstable_by_key(|&(item, _)| item);

        items
            .into_iter()
            .map(|(item, count)| FrequentItemset {
                items: vec![item],
                support: count as f64 / n_transactions,
            })
            .filter(|set| set.support >= self.min_support)
            .collect()
    }

    fn prune_candidates(
        &self,
        candidates: Vec<Vec<usize>>,
        baskets: &[Vec<usize>],
    ) -> Vec<FrequentItemset<usize>> {
        let n_transactions = baskets.len() as f64;
        candidates
            .into_iter()
            .filter_map(|items| {
                let count = baskets
                    .iter()
                    .filter(|basket| is_sorted_subset(&items, basket))
                    .count();
                let support = count as f64 / n_transactions;
                (support >= self.min_support).then_some(FrequentItemset { items, support })
            })
            .collect()
    }

    fn generate_rules(&self) -> Vec<MinedItemset<usize>> {
        let supports: HashMap<&[usize], f64> = self
            .frequent_itemsets
            .iter()
            .map(|set| (set.items.as_slice(), set.support))
            .collect();
        let min_length = self.min_length.max(2);

        let mut records = Vec::new();
        for set in &self.frequent_itemsets {
            let k = set.items.len();
            if k < min_length {
                continue;
            }

            let mut rules = Vec::new();
            for base_len in 1..k {
                for positions in combinations(k, base_len) {
                    let base: Vec<usize> = positions.iter().map(|&i| set.items[i]).collect();
                    let add: Vec<usize> = (0..k)
                        .filter(|i| !positions.contains(i))
                        .map(|i| set.items[i])
                        .collect();

                    // every subset of a frequent itemset is frequent
                    let (Some(&base_support), Some(&add_support)) =
                        (supports.get(base.as_slice()), supports.get(add.as_slice()))
                    else {
                        continue;
                    };

                    let confidence = set.support / base_support;
                    if confidence < self.min_confidence {
                        continue;
                    }
                    let lift = confidence / add_support;
                    if lift < self.min_lift {
                        continue;
                    }

                    rules.push(AssociationRule {
                        base,
                        add,
                        support: set.support,
                        confidence,
                        lift,
                    });
                }
            }

            if !rules.is_empty() {
                records.push(MinedItemset {
                    itemset: set.clone(),
                    rules,
                });
            }
        }
        records
    }

    /// Frequent itemsets in discovery order.
    #[must_use]
    pub fn frequent_itemsets(&self) -> &[FrequentItemset<usize>] {
        &self.frequent_itemsets
    }

    /// Frequent itemsets sorted by support descending; ties keep discovery order.
    #[must_use]
    pub fn ranked_itemsets(&self) -> Vec<&FrequentItemset<usize>> {
        let mut ranked: Vec<&FrequentItemset<usize>> = self.frequent_itemsets.iter().collect();
        ranked.sort_by(|a, b| b.support.total_cmp(&a.support));
        ranked
    }

    /// Itemsets that produced at least one rule, in discovery order.
    #[must_use]
    pub fn records(&self) -> &[MinedItemset<usize>] {
        &self.records
    }

    /// All generated rules.
    pub fn rules(&self) -> impl Iterator<Item = &AssociationRule<usize>> {
        self.records.iter().flat_map(|r| r.rules.iter())
    }

    /// Mine named transactions and decode the records back to names.
    ///
    /// The receiver is left untouched; fitting happens on a copy.
    ///
    /// # Errors
    ///
    /// Returns [`PalateError::InvalidHyperparameter`] for invalid thresholds.
    pub fn mine<S: AsRef<str>>(&self, transactions: &[Vec<S>]) -> Result<MiningResult> {
        let (catalog, encoded) = ItemCatalog::encode(transactions);
        let mut fitted = self.clone();
        fitted.fit(&encoded)?;

        let records = fitted
            .records
            .iter()
            .map(|record| MinedItemset {
                itemset: decode_itemset(&record.itemset, &catalog),
                rules: record
                    .rules
                    .iter()
                    .map(|rule| AssociationRule {
                        base: catalog.decode(&rule.base),
                        add: catalog.decode(&rule.add),
                        support: rule.support,
                        confidence: rule.confidence,
                        lift: rule.lift,
                    })
                    .collect(),
            })
            .collect();

        Ok(MiningResult {
            n_transactions: transactions.len(),
            min_support: self.min_support,
            records,
        })
    }

    /// Frequent itemsets of named transactions, in discovery order.
    ///
    /// # Errors
    ///
    /// Returns [`PalateError::InvalidHyperparameter`] for invalid thresholds.
    pub fn frequent_itemsets_of<S: AsRef<str>>(
        &self,
        transactions: &[Vec<S>],
    ) -> Result<Vec<FrequentItemset>> {
        let (catalog, encoded) = ItemCatalog::encode(transactions);
        let mut fitted = self.clone();
        fitted.fit(&encoded)?;
        Ok(fitted
            .frequent_itemsets
            .iter()
            .map(|set| decode_itemset(set, &catalog))
            .collect())
    }

    /// Calculate support for a specific itemset.
    ///
    /// Returns 0.0 for an empty transaction list.
    #[must_use]
    pub fn calculate_support(itemset: &[usize], transactions: &[Vec<usize>]) -> f64 {
        if transactions.is_empty() {
            return 0.0;
        }
        let count = transactions
            .iter()
            .filter(|t| itemset.iter().all(|item| t.contains(item)))
            .count();
        count as f64 / transactions.len() as f64
    }
}

impl Default for Apriori {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_itemset(set: &FrequentItemset<usize>, catalog: &ItemCatalog) -> FrequentItemset {
    FrequentItemset {
        items: catalog.decode(&set.items),
        support: set.support,
    }
}

/// Join step: (k-1)-itemsets sharing their first k-2 items combine into a
/// k-candidate, which is kept only if all its (k-1)-subsets are frequent.
///
/// `level` must be in lexicographic order, which keeps equal prefixes
/// contiguous and the output lexicographic too.
fn generate_candidates(level: &[FrequentItemset<usize>]) -> Vec<Vec<usize>> {
    let frequent: HashSet<&[usize]> = level.iter().map(|set| set.items.as_slice()).collect();
    let mut candidates = Vec::new();

    let mut start = 0;
    while start < level.len() {
        let width = level[start].items.len();
        let prefix = &level[start].items[..width - 1];
        let end = level[start..]
            .iter()
            .position(|set| &set.items[..width - 1] != prefix)
            .map_or(level.len(), |offset| start + offset);

        for i in start..end {
            for j in (i + 1)..end {
                let mut candidate = level[i].items.clone();
                candidate.push(level[j].items[width - 1]);
                if !has_infrequent_subset(&candidate, &frequent) {
                    candidates.push(candidate);
                }
            }
        }
        start = end;
    }

    candidates
}

fn has_infrequent_subset(candidate: &[usize], frequent: &HashSet<&[usize]>) -> bool {
    (0..candidate.len()).any(|skip| {
        let subset: Vec<usize> = candidate
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, &item)| item)
            .collect();
        !frequent.contains(subset.as_slice())
    })
}

/// Both slices ascending; true when every item of `needle` is in `haystack`.
fn is_sorted_subset(needle: &[usize], haystack: &[usize]) -> bool {
    let mut rest = haystack.iter();
    needle
        .iter()
        .all(|item| rest.by_ref().any(|candidate| candidate == item))
}

/// All `r`-element position sets of `0..n`, lexicographically.
fn combinations(n: usize, r: usize) -> Vec<Vec<usize>> {
    if r == 0 || r > n {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut idx: Vec<usize> = (0..r).collect();
    loop {
        out.push(idx.clone());
        let mut i = r;
        loop {
            if i == 0 {
                return out;
            }
            i -= 1;
            if idx[i] != i + n - r {
                break;
            }
        }
        idx[i] += 1;
        for j in (i + 1)..r {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

#[cfg(test)]
#[path = "apriori_tests.rs"]
mod tests;
