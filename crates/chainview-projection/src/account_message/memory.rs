//! In-memory account-message store for tests and ephemeral runs.
//!
//! Mutations are staged on the transaction handle and applied to the shared
//! state only on commit, so a dropped handle really does roll back. A
//! one-shot commit-failure switch lets tests exercise the rollback/retry
//! path without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use chainview_core::error::StorageError;

use super::view::{
    AccountMessageRecord, AccountMessageRow, AccountMessageStore, AccountMessageStoreTx,
};

#[derive(Default)]
struct MemoryState {
    rows: Vec<AccountMessageRecord>,
    totals: HashMap<String, i64>,
    checkpoints: HashMap<String, u64>,
    fail_next_commit: bool,
}

/// Shared-state in-memory store.
#[derive(Default, Clone)]
pub struct MemoryAccountMessageStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryAccountMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `commit` fail with a transaction error.
    pub fn fail_next_commit(&self) {
        self.state.lock().unwrap().fail_next_commit = true;
    }

    /// Committed rows, in insertion order.
    pub fn rows(&self) -> Vec<AccountMessageRecord> {
        self.state.lock().unwrap().rows.clone()
    }

    /// Committed counter value for `key` (0 when absent).
    pub fn total(&self, key: &str) -> i64 {
        self.state.lock().unwrap().totals.get(key).copied().unwrap_or(0)
    }

    /// Committed checkpoint for `projection_id`.
    pub fn checkpoint(&self, projection_id: &str) -> Option<u64> {
        self.state.lock().unwrap().checkpoints.get(projection_id).copied()
    }
}

#[async_trait]
impl AccountMessageStore for MemoryAccountMessageStore {
    async fn init(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn begin(&self) -> Result<Box<dyn AccountMessageStoreTx>, StorageError> {
        Ok(Box::new(MemoryTx {
            state: Arc::clone(&self.state),
            rows: Vec::new(),
            totals: HashMap::new(),
            checkpoints: HashMap::new(),
        }))
    }

    async fn last_handled_height(
        &self,
        projection_id: &str,
    ) -> Result<Option<u64>, StorageError> {
        Ok(self.checkpoint(projection_id))
    }
}

struct MemoryTx {
    state: Arc<Mutex<MemoryState>>,
    rows: Vec<AccountMessageRecord>,
    totals: HashMap<String, i64>,
    checkpoints: HashMap<String, u64>,
}

#[async_trait]
impl AccountMessageStoreTx for MemoryTx {
    async fn insert_message(
        &mut self,
        row: &AccountMessageRow,
        accounts: &[String],
    ) -> Result<(), StorageError> {
        self.rows.push(AccountMessageRecord {
            row: row.clone(),
            accounts: accounts.to_vec(),
        });
        Ok(())
    }

    async fn increment_message_count(&mut self, key: &str, by: i64) -> Result<(), StorageError> {
        *self.totals.entry(key.to_string()).or_insert(0) += by;
        Ok(())
    }

    async fn update_last_handled_height(
        &mut self,
        projection_id: &str,
        height: u64,
    ) -> Result<(), StorageError> {
        self.checkpoints.insert(projection_id.to_string(), height);
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<(), StorageError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_next_commit {
            state.fail_next_commit = false;
            return Err(StorageError::Transaction("injected commit failure".into()));
        }
        state.rows.extend(self.rows);
        for (key, by) in self.totals {
            *state.totals.entry(key).or_insert(0) += by;
        }
        for (id, height) in self.checkpoints {
            state.checkpoints.insert(id, height);
        }
        Ok(())
    }
}
