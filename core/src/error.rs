//! Common error types for toposort.

use thiserror::Error;

/// Errors that can occur while computing a constrained ordering.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The registered precedence constraints contain a cycle, so no
    /// linear order can satisfy them.
    #[error("cyclic precedence constraints: no valid linear order exists")]
    CycleDetected,

    /// A fixed-capacity merge would emit more elements than the
    /// destination can hold.
    #[error("merge output exceeds fixed capacity of {capacity}")]
    CapacityExceeded {
        /// Declared capacity of the destination.
        capacity: usize,
    },
}

/// Result type for sort operations.
pub type SortResult<T> = Result<T, SortError>;
