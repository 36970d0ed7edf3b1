//! View records and the storage seam of the account-message projection.
//!
//! The projection owns two tables (message rows and per-account counters)
//! plus its checkpoint row; the traits below are the only way it touches
//! them. A transaction handle that is dropped without `commit` must roll
//! back — that is the whole atomicity contract, realized by `sqlx` drop
//! semantics in the Postgres backend and by staged ops in the memory store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use chainview_core::error::StorageError;

/// One denormalized row per message event.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountMessageRow {
    pub block_height: u64,
    pub block_hash: String,
    pub block_time: DateTime<Utc>,
    pub transaction_hash: String,
    pub success: bool,
    pub message_index: u32,
    pub message_type: String,
    /// Full event record (JSON), for the read side to render verbatim.
    pub data: serde_json::Value,
}

/// A row plus the involved accounts driving its fan-out.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountMessageRecord {
    pub row: AccountMessageRow,
    pub accounts: Vec<String>,
}

/// Storage backend owned by the account-message projection.
#[async_trait]
pub trait AccountMessageStore: Send + Sync {
    /// Idempotent schema setup; safe on every process start.
    async fn init(&self) -> Result<(), StorageError>;

    /// Open a transaction scoped to one height's application.
    async fn begin(&self) -> Result<Box<dyn AccountMessageStoreTx>, StorageError>;

    /// Last height fully applied by `projection_id`, if any.
    async fn last_handled_height(&self, projection_id: &str)
        -> Result<Option<u64>, StorageError>;
}

/// Mutations inside one open transaction. Dropping the handle without
/// calling [`commit`](Self::commit) discards every staged mutation.
#[async_trait]
pub trait AccountMessageStoreTx: Send {
    /// Insert one view row with its deduplicated account set.
    async fn insert_message(
        &mut self,
        row: &AccountMessageRow,
        accounts: &[String],
    ) -> Result<(), StorageError>;

    /// Add `by` to the counter named `key` (`"{account}:-"` for the
    /// all-types counter, `"{account}:{type}"` for the per-type one).
    async fn increment_message_count(&mut self, key: &str, by: i64) -> Result<(), StorageError>;

    /// Advance the projection's checkpoint, inside this transaction.
    async fn update_last_handled_height(
        &mut self,
        projection_id: &str,
        height: u64,
    ) -> Result<(), StorageError>;

    /// Make every staged mutation visible, atomically.
    async fn commit(self: Box<Self>) -> Result<(), StorageError>;
}
