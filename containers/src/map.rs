//! Ordered keyed facade over `BTreeMap`.

use std::collections::btree_map;
use std::collections::BTreeMap;

use toposort_core::{Key, SortResult};
use toposort_graph::{merge_keyed, PrecedenceGraph};

/// A `BTreeMap` with attached precedence constraints.
///
/// Entries and constraints live side by side: inserting never touches the
/// graph and `precede` never inserts an entry. `sort` reconciles the two,
/// so constraints may name keys the map lacks and the map may hold keys
/// no constraint mentions.
#[derive(Debug, Clone)]
pub struct TopoMap<K: Key, V> {
    entries: BTreeMap<K, V>,
    graph: PrecedenceGraph<K>,
}

impl<K: Key, V> Default for TopoMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key, V> TopoMap<K, V> {
    /// Create an empty map with no constraints.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            graph: PrecedenceGraph::new(),
        }
    }

    // ==================== Container Operations ====================

    /// Insert an entry, returning the previous value for the key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Get the value for a key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Remove an entry. The key's constraints, if any, remain registered.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    /// True when the map holds an entry for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in natural (ascending key) order.
    pub fn iter(&self) -> btree_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Remove all entries. Constraints remain registered.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // ==================== Ordering ====================

    /// Record that `v` must occur before `w` in `sort` output.
    pub fn precede(&mut self, v: K, w: K) {
        self.graph.precede(v, w);
    }

    /// The constraint graph.
    pub fn graph(&self) -> &PrecedenceGraph<K> {
        &self.graph
    }

    /// Emit the entries in constraint-respecting order.
    ///
    /// Constrained entries come first, in topological order; entries no
    /// constraint mentions follow in ascending key order. Constraints
    /// naming absent keys are skipped. The result always holds exactly
    /// `len()` entries.
    pub fn sort(&self) -> SortResult<Vec<(K, V)>>
    where
        V: Clone,
    {
        let order = self.graph.linearize()?;
        let snapshot: Vec<(K, V)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(merge_keyed(&order, &snapshot))
    }
}

impl<K: Key, V> From<BTreeMap<K, V>> for TopoMap<K, V> {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self {
            entries,
            graph: PrecedenceGraph::new(),
        }
    }
}

impl<K: Key, V> FromIterator<(K, V)> for TopoMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from(BTreeMap::from_iter(iter))
    }
}

impl<K: Key, V> Extend<(K, V)> for TopoMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
