//! Commands — the decoded intermediate form of on-chain activity.
//!
//! One command per message (plus one block-created command per height), in
//! the exact order the block produced them. `exec` derives exactly one event
//! and is pure aside from minting the event's fresh identifier.

use uuid::Uuid;

use crate::event::{BlockCreatedEvent, Event, MsgEvent};
use crate::messages::MsgPayload;
use crate::types::Block;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Synthetic per-height command carrying the block itself.
    CreateBlock(Block),
    /// One decoded on-chain message.
    CreateMsg(MsgCommand),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MsgCommand {
    pub height: u64,
    pub tx_hash: String,
    pub tx_success: bool,
    pub msg_index: u32,
    pub payload: MsgPayload,
}

impl Command {
    /// Command name, e.g. `"CreateMsgSend"`.
    pub fn name(&self) -> String {
        match self {
            Self::CreateBlock(_) => "CreateBlock".to_string(),
            Self::CreateMsg(cmd) => format!("Create{}", cmd.payload.msg_type()),
        }
    }

    pub fn version(&self) -> u32 {
        1
    }

    pub fn height(&self) -> u64 {
        match self {
            Self::CreateBlock(block) => block.height,
            Self::CreateMsg(cmd) => cmd.height,
        }
    }

    /// Derive this command's event. Total: every command produces exactly one
    /// event, and the only non-determinism is the fresh identifier.
    pub fn exec(self) -> Event {
        match self {
            Self::CreateBlock(block) => Event::BlockCreated(BlockCreatedEvent {
                uuid: Uuid::new_v4(),
                version: 1,
                height: block.height,
                hash: block.hash,
                time: block.time,
            }),
            Self::CreateMsg(cmd) => Event::Msg(MsgEvent {
                uuid: Uuid::new_v4(),
                version: 1,
                height: cmd.height,
                tx_hash: cmd.tx_hash,
                tx_success: cmd.tx_success,
                msg_index: cmd.msg_index,
                payload: cmd.payload,
            }),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
