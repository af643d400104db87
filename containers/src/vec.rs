//! Ordered sequence facade over `Vec`.

use std::slice;

use toposort_core::{Key, SortResult};
use toposort_graph::{merge_counted, PrecedenceGraph};

/// A `Vec` with attached precedence constraints.
///
/// Elements are their own keys, and duplicates are allowed: `sort` emits
/// all copies of an element together at its first qualifying position.
/// A constraint naming an element the vector lacks contributes nothing
/// to the output while still ordering the elements it relates to.
#[derive(Debug, Clone)]
pub struct TopoVec<T: Key> {
    items: Vec<T>,
    graph: PrecedenceGraph<T>,
}

impl<T: Key> Default for TopoVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Key> TopoVec<T> {
    /// Create an empty vector with no constraints.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            graph: PrecedenceGraph::new(),
        }
    }

    // ==================== Container Operations ====================

    /// Append an element.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Number of elements, duplicates included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate elements in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The elements as a slice, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Remove all elements. Constraints remain registered.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // ==================== Ordering ====================

    /// Record that `v` must occur before `w` in `sort` output.
    pub fn precede(&mut self, v: T, w: T) {
        self.graph.precede(v, w);
    }

    /// The constraint graph.
    pub fn graph(&self) -> &PrecedenceGraph<T> {
        &self.graph
    }

    /// Emit the elements in constraint-respecting order.
    ///
    /// The result has exactly the length and multiset of the vector:
    /// constrained elements first (each element's copies together),
    /// unconstrained elements after, in first-appearance order.
    pub fn sort(&self) -> SortResult<Vec<T>> {
        let order = self.graph.linearize()?;
        Ok(merge_counted(&order, &self.items))
    }
}

impl<T: Key> From<Vec<T>> for TopoVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            graph: PrecedenceGraph::new(),
        }
    }
}

impl<T: Key> FromIterator<T> for TopoVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(Vec::from_iter(iter))
    }
}

impl<T: Key> Extend<T> for TopoVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
