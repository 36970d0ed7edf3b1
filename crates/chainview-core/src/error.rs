//! Error types shared across the indexing core.

use thiserror::Error;

/// Errors from a storage backend (transaction begin/write/commit).
///
/// Always fatal to the current `handle_events` call: the open transaction is
/// rolled back and the same height must be retried by the dispatcher.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Transaction error: {0}")]
    Transaction(String),
}

/// Malformed bech32 address encountered during prefix conversion.
///
/// Indicates corrupted input or a decoder defect; never retried.
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("Malformed address {address:?}: {reason}")]
    Malformed { address: String, reason: String },

    #[error("Invalid address prefix {prefix:?}: {reason}")]
    InvalidPrefix { prefix: String, reason: String },
}

/// Errors surfaced by a projection's `handle_events`.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// Retryable at height level: nothing was applied.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Not retryable: the event stream itself is defective.
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// The dispatcher delivered a batch without its block-created event.
    #[error("No block-created event in batch for height {height}")]
    MissingBlockCreated { height: u64 },
}

impl ProjectionError {
    /// Returns `true` if retrying the same height can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}
