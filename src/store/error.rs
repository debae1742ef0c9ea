//! Value-level store failures.

use thiserror::Error;

/// Errors reported by store operations.
///
/// Both variants carry the complete human-readable message; callers render
/// them as-is. Neither is fatal and a failed operation has no side effects.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// A referenced id was absent from its collection, or a get-all found an
    /// empty collection.
    #[error("{0}")]
    NotFound(String),

    /// A required string field was empty.
    #[error("{0}")]
    Validation(String),
}

impl StoreError {
    /// `"{label} not found"`, e.g. `"Food item not found"`.
    pub fn not_found(label: &str) -> Self {
        Self::NotFound(format!("{label} not found"))
    }
}
