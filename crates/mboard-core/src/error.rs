//! Error types for the message board domain.
//!
//! Validation failures carry a message that is safe to show to callers;
//! storage failures wrap the underlying [`sqlx::Error`] and must never be
//! exposed verbatim outside the process.

use thiserror::Error;

/// Errors produced by the service and store layers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller supplied input that fails domain validation.
    #[error("{0}")]
    Validation(String),

    /// Propagated from the SQLite store.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
