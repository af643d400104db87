//! Ordered fixed-size sequence facade over an array.

use std::slice;

use toposort_core::{Key, SortError, SortResult};
use toposort_graph::{merge_bounded, PrecedenceGraph};

/// A fixed-size array with attached precedence constraints.
///
/// Same sorting semantics as [`TopoVec`](crate::TopoVec), but the
/// destination capacity is the array length `N`. The merge accounts for
/// every emission positionally and reports
/// [`SortError::CapacityExceeded`] instead of writing out of bounds.
#[derive(Debug, Clone)]
pub struct TopoArray<T: Key, const N: usize> {
    items: [T; N],
    graph: PrecedenceGraph<T>,
}

impl<T: Key, const N: usize> TopoArray<T, N> {
    /// Create an array facade over the given elements.
    pub fn new(items: [T; N]) -> Self {
        Self {
            items,
            graph: PrecedenceGraph::new(),
        }
    }

    // ==================== Container Operations ====================

    /// Number of elements (the declared capacity).
    pub fn len(&self) -> usize {
        N
    }

    /// True when the array holds no elements (`N == 0`).
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Iterate elements in declaration order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The elements as a slice, in declaration order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
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

    /// Emit the elements in constraint-respecting order, as a new array
    /// of the same size.
    pub fn sort(&self) -> SortResult<[T; N]> {
        let order = self.graph.linearize()?;
        let merged = merge_bounded(&order, &self.items, N)?;
        // The merge preserves the multiset, so the length is exactly N.
        merged
            .try_into()
            .map_err(|_| SortError::CapacityExceeded { capacity: N })
    }
}

impl<T: Key, const N: usize> From<[T; N]> for TopoArray<T, N> {
    fn from(items: [T; N]) -> Self {
        Self::new(items)
    }
}
