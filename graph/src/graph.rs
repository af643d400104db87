//! Precedence constraint storage and linearization.

use std::collections::BTreeMap;

use toposort_core::{Key, SortError, SortResult};

/// Traversal state of a key during one linearization pass.
///
/// Absence from the mark map means "not yet visited". A key on the
/// current DFS path is `InProgress`; revisiting such a key means the
/// constraints are cyclic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// A set of directed "must precede" constraints between keys.
///
/// `precede(v, w)` records that `v` has to occur before `w` in any valid
/// output. Constraints accumulate independently of any container: the
/// graph is re-read, not reset, on every linearization, and may reference
/// keys that no container ever holds.
#[derive(Debug, Clone)]
pub struct PrecedenceGraph<K: Key> {
    /// Source key to successor list, in registration order.
    adj: BTreeMap<K, Vec<K>>,
}

impl<K: Key> Default for PrecedenceGraph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> PrecedenceGraph<K> {
    /// Create an empty constraint graph.
    pub fn new() -> Self {
        Self {
            adj: BTreeMap::new(),
        }
    }

    // ==================== Constraint Registration ====================

    /// Record that `v` must occur before `w`.
    ///
    /// Always succeeds. Neither key has to exist anywhere else; the edge
    /// only creates an adjacency entry for `v`. Registering the same edge
    /// twice is harmless for ordering purposes (it lengthens the successor
    /// list, not the set of valid orders).
    pub fn precede(&mut self, v: K, w: K) {
        self.adj.entry(v).or_default().push(w);
    }

    /// Remove every registered constraint.
    pub fn clear(&mut self) {
        self.adj.clear();
    }

    // ==================== Introspection ====================

    /// True when no constraint has been registered.
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Total number of registered edges, duplicates included.
    pub fn constraint_count(&self) -> usize {
        self.adj.values().map(Vec::len).sum()
    }

    /// Successor list of `key`. Empty when no edge leaves it; absence of
    /// an adjacency entry and an empty entry are equivalent.
    pub fn successors(&self, key: &K) -> &[K] {
        self.adj.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    // ==================== Linearization ====================

    /// Compute a topological order over every key reachable from a
    /// registered edge.
    ///
    /// For every edge `(v, w)`, `v` occurs before `w` in the result.
    /// Keys with no relative constraint are tie-broken by ascending key
    /// order (the adjacency map's source iteration order).
    ///
    /// Returns [`SortError::CycleDetected`] when the constraints admit no
    /// linear order.
    pub fn linearize(&self) -> SortResult<Vec<K>> {
        let mut marks: BTreeMap<&K, Mark> = BTreeMap::new();
        // Collected in post-order, reversed at the end: dependencies
        // before dependents.
        let mut post: Vec<&K> = Vec::new();

        for key in self.adj.keys() {
            if !marks.contains_key(key) {
                self.visit(key, &mut marks, &mut post)?;
            }
        }

        post.reverse();
        Ok(post.into_iter().cloned().collect())
    }

    /// Depth-first visit: finish every successor, then append `key`.
    fn visit<'a>(
        &'a self,
        key: &'a K,
        marks: &mut BTreeMap<&'a K, Mark>,
        post: &mut Vec<&'a K>,
    ) -> SortResult<()> {
        marks.insert(key, Mark::InProgress);

        for succ in self.successors(key) {
            match marks.get(succ) {
                Some(Mark::Done) => {}
                Some(Mark::InProgress) => return Err(SortError::CycleDetected),
                None => self.visit(succ, marks, post)?,
            }
        }

        marks.insert(key, Mark::Done);
        post.push(key);
        Ok(())
    }
}
