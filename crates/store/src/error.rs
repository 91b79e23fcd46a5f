//! Store error taxonomy.

use thiserror::Error;

/// Errors crossing the store's public boundary.
///
/// Mutating operations never surface persistence failures - a failed slot
/// write is logged and the in-memory effect stands. `Persistence` is
/// reserved for operations whose whole point is serialization (export).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity ID has no match.
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed import payload or invalid field values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Deletion blocked by existing references.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Serialization of the aggregate failed.
    #[error("persistence failure: {0}")]
    Persistence(String),
}
