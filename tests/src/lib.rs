//! Shared helpers for toposort integration tests.

mod order;

pub use order::*;
