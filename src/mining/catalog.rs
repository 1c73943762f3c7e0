//! Item name <-> id encoding for transactions.

use std::collections::HashMap;

/// Dense id assignment for item names.
///
/// Ids follow first appearance, so sorting ids reproduces the order in
/// which items were first seen in the transactions.
///
/// ```
/// use palate::mining::ItemCatalog;
///
/// let (catalog, encoded) = ItemCatalog::encode(&[vec!["salt", "egg"], vec!["egg", "milk"]]);
/// assert_eq!(encoded, vec![vec![0, 1], vec![1, 2]]);
/// assert_eq!(catalog.name(2), Some("milk"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    names: Vec<String>,
    ids: HashMap<String, usize>,
}

impl ItemCatalog {
    /// Build a catalog and encode every transaction with it.
    pub fn encode<S: AsRef<str>>(transactions: &[Vec<S>]) -> (Self, Vec<Vec<usize>>) {
        let mut catalog = Self::default();
        let encoded = transactions
            .iter()
            .map(|t| t.iter().map(|item| catalog.intern(item.as_ref())).collect())
            .collect();
        (catalog, encoded)
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    /// Name for an id, if assigned.
    #[must_use]
    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Id for a name, if seen.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no item was seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub(crate) fn decode(&self, ids: &[usize]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.name(id))
            .map(str::to_string)
            .collect()
    }
}
