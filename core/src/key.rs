//! Key bounds for precedence constraints.
//!
//! A key is the identity value used both to form constraints and to match
//! container entries. Keys are copied into the graph's internal maps and
//! never mutated.

/// Bound alias for types usable as precedence keys.
///
/// `Ord` gives the adjacency map a deterministic source iteration order
/// (ascending), which in turn fixes the tie-break among mutually
/// unconstrained keys. `Clone` lets the graph and merge results hold
/// their own copies.
pub trait Key: Ord + Clone {}

impl<T: Ord + Clone> Key for T {}
