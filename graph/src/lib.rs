//! Toposort Constraint Graph
//!
//! This crate provides the dependency-ordering engine:
//! - `PrecedenceGraph`: directed "must precede" constraints between keys,
//!   with depth-first linearization into a topological order
//! - Merge policies that reconcile a computed order with a container's
//!   actual contents (keyed, duplicate-sequence, fixed-capacity)
//!
//! The graph is intentionally decoupled from any container: constraints
//! may reference keys that no container holds, and containers may hold
//! keys no constraint mentions. The merge policies define how both cases
//! land in the final output.

mod graph;
mod merge;

pub use graph::*;
pub use merge::*;
