//! Error types for block parsing and message decoding.

use chainview_core::error::AddressError;
use thiserror::Error;

/// A message payload that does not match its declared type's schema: bad
/// base64, unparseable duration text, missing or mistyped fields.
#[derive(Debug, Error)]
#[error("Failed to decode {type_url} params at message {msg_index}: {reason}")]
pub struct DecodeError {
    pub type_url: String,
    pub msg_index: u32,
    pub reason: String,
}

/// Errors from parsing one block's messages into commands.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A message whose type tag is not in the catalog. Under the `Skip`
    /// policy this never surfaces; under `Abort` it fails the whole block.
    #[error("Unknown message type {type_url:?} at tx {tx_hash} message {msg_index}")]
    UnknownMessageType {
        type_url: String,
        tx_hash: String,
        msg_index: u32,
    },

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Malformed address during prefix conversion. Fatal under either
    /// policy: it signals corrupted input or a decoder defect.
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// Block and execution results disagree on the transaction count.
    #[error("Block {height} carries {transactions} transactions but {results} execution results")]
    ResultsMismatch {
        height: u64,
        transactions: usize,
        results: usize,
    },
}

impl ParseError {
    /// Whether the `Skip` policy may drop the offending message and carry on.
    pub(crate) fn is_skippable(&self) -> bool {
        matches!(self, Self::UnknownMessageType { .. } | Self::Decode(_))
    }
}
