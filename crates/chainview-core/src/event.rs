//! Immutable domain events derived from commands.
//!
//! A per-height batch always carries exactly one block-created event ahead of
//! the message events, in the (transaction, message-index) order the block
//! produced them. Projections replay that order unchanged.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::messages::MsgPayload;

/// Name of the synthetic per-height event carrying block metadata.
pub const BLOCK_CREATED: &str = "BlockCreated";

/// One immutable domain fact.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    BlockCreated(BlockCreatedEvent),
    Msg(MsgEvent),
}

impl Event {
    /// Event name as used in subscription declarations.
    pub fn name(&self) -> String {
        match self {
            Self::BlockCreated(_) => BLOCK_CREATED.to_string(),
            Self::Msg(event) => event.name(),
        }
    }

    pub fn height(&self) -> u64 {
        match self {
            Self::BlockCreated(event) => event.height,
            Self::Msg(event) => event.height,
        }
    }

    pub fn uuid(&self) -> Uuid {
        match self {
            Self::BlockCreated(event) => event.uuid,
            Self::Msg(event) => event.uuid,
        }
    }
}

/// Synthetic event marking a block's creation; source of the block metadata
/// (hash, time) that view rows denormalize.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockCreatedEvent {
    pub uuid: Uuid,
    pub version: u32,
    pub height: u64,
    pub hash: String,
    pub time: DateTime<Utc>,
}

/// Event derived from one on-chain message.
#[derive(Debug, Clone, PartialEq)]
pub struct MsgEvent {
    pub uuid: Uuid,
    pub version: u32,
    pub height: u64,
    pub tx_hash: String,
    pub tx_success: bool,
    pub msg_index: u32,
    pub payload: MsgPayload,
}

impl MsgEvent {
    /// `"MsgSend"` becomes `"MsgSendCreated"`, and so on.
    pub fn name(&self) -> String {
        format!("{}Created", self.payload.msg_type())
    }

    /// Full JSON record of this event, as stored in view rows.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name(),
            "version": self.version,
            "uuid": self.uuid,
            "height": self.height,
            "msgName": self.payload.msg_type(),
            "txHash": &self.tx_hash,
            "txSuccess": self.tx_success,
            "msgIndex": self.msg_index,
            "params": &self.payload,
        })
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{bank, Coin};

    fn send_event() -> MsgEvent {
        MsgEvent {
            uuid: Uuid::new_v4(),
            version: 1,
            height: 643_189,
            tx_hash: "E86F52B6".into(),
            tx_success: true,
            msg_index: 1,
            payload: MsgPayload::Send(bank::MsgSendParams {
                from_address: "cro1from".into(),
                to_address: "cro1to".into(),
                amount: vec![Coin {
                    denom: "basecro".into(),
                    amount: "1000".into(),
                }],
            }),
        }
    }

    #[test]
    fn event_names() {
        let event = send_event();
        assert_eq!(event.name(), "MsgSendCreated");
        assert_eq!(Event::Msg(event).name(), "MsgSendCreated");

        let block = Event::BlockCreated(BlockCreatedEvent {
            uuid: Uuid::new_v4(),
            version: 1,
            height: 7,
            hash: "AB".into(),
            time: Utc::now(),
        });
        assert_eq!(block.name(), BLOCK_CREATED);
        assert_eq!(block.height(), 7);
    }

    #[test]
    fn msg_event_json_record() {
        let event = send_event();
        let json = event.to_json();
        assert_eq!(json["name"], "MsgSendCreated");
        assert_eq!(json["version"], 1);
        assert_eq!(json["height"], 643_189);
        assert_eq!(json["msgName"], "MsgSend");
        assert_eq!(json["txHash"], "E86F52B6");
        assert_eq!(json["msgIndex"], 1);
        assert_eq!(json["uuid"], event.uuid.to_string());
        assert_eq!(json["params"]["fromAddress"], "cro1from");
    }
}
