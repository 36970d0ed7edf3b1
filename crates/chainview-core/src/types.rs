//! Raw chain data as handed over by the polling collaborator.
//!
//! Everything here is transient: built once per poll cycle, turned into
//! commands and events, then discarded. Only views and checkpoints persist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Block ────────────────────────────────────────────────────────────────────

/// A block as returned by the node, with its ordered transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block height (unique, monotonically increasing).
    pub height: u64,
    /// Block hash.
    pub hash: String,
    /// Block time (UTC).
    pub time: DateTime<Utc>,
    /// Transactions in block order.
    pub transactions: Vec<Transaction>,
}

/// A transaction inside a block. Execution success arrives separately in
/// [`BlockResults`] and is merged by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction hash (uppercase hex).
    pub hash: String,
    /// Messages in signed order.
    pub messages: Vec<Message>,
}

/// One on-chain message: its protobuf type tag plus the undecoded JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Protobuf type URL, e.g. `"/cosmos.bank.v1beta1.MsgSend"`.
    pub type_url: String,
    /// Index of this message within its transaction.
    pub index: u32,
    /// Raw decoded-JSON field tree, prior to typed decoding.
    pub value: serde_json::Value,
}

// ─── Execution results ────────────────────────────────────────────────────────

/// Per-transaction execution results for one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockResults {
    pub height: u64,
    /// One entry per transaction, in block order.
    pub txs_results: Vec<TxResult>,
}

/// Execution outcome of a single transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxResult {
    /// ABCI result code; `0` means success.
    pub code: u32,
}

impl TxResult {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
