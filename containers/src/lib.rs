//! Toposort Container Facades
//!
//! Each facade owns a plain container plus a
//! [`PrecedenceGraph`](toposort_graph::PrecedenceGraph), forwards the
//! container's standard operations unchanged, and adds two methods:
//! `precede` to register a constraint and `sort` to emit the contents in
//! constraint-respecting order. Sorting never mutates the container; it
//! returns an independent value.
//!
//! - [`TopoMap`]: keyed entries over a `BTreeMap`
//! - [`TopoHashMap`]: keyed entries over a `HashMap`
//! - [`TopoVec`]: a sequence with duplicates over a `Vec`
//! - [`TopoArray`]: a fixed-size sequence over an array

mod array;
mod hash_map;
mod map;
mod vec;

pub use array::*;
pub use hash_map::*;
pub use map::*;
pub use vec::*;
