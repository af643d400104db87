//! Ordered keyed facade over `HashMap`.

use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;

use toposort_core::{Key, SortResult};
use toposort_graph::{merge_keyed, PrecedenceGraph};

/// A `HashMap` with attached precedence constraints.
///
/// Same surface as [`TopoMap`](crate::TopoMap), with one difference in
/// `sort`: entries no constraint mentions are appended in the hash map's
/// iteration order, which is unspecified. The topological part of the
/// output is unaffected (the constraint graph itself iterates sources in
/// ascending key order regardless of the container).
#[derive(Debug, Clone)]
pub struct TopoHashMap<K: Key + Hash, V> {
    entries: HashMap<K, V>,
    graph: PrecedenceGraph<K>,
}

impl<K: Key + Hash, V> Default for TopoHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key + Hash, V> TopoHashMap<K, V> {
    /// Create an empty map with no constraints.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
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

    /// Iterate entries in natural (unspecified hash) order.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
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
    /// Constrained entries come first, in topological order; the rest
    /// follow in the hash map's iteration order. The result always holds
    /// exactly `len()` entries.
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

impl<K: Key + Hash, V> From<HashMap<K, V>> for TopoHashMap<K, V> {
    fn from(entries: HashMap<K, V>) -> Self {
        Self {
            entries,
            graph: PrecedenceGraph::new(),
        }
    }
}

impl<K: Key + Hash, V> FromIterator<(K, V)> for TopoHashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from(HashMap::from_iter(iter))
    }
}

impl<K: Key + Hash, V> Extend<(K, V)> for TopoHashMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
