//! Toposort Core Types
//!
//! This crate provides the foundational types used throughout toposort:
//! - The `Key` bound alias for precedence keys
//! - Common error types (`SortError`, `SortResult`)

mod error;
mod key;

pub use error::*;
pub use key::*;
