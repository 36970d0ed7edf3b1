//! IBC messages: client/connection/channel handshakes, packet relay, and
//! fungible token transfer.
//!
//! These records are where the wire hooks earn their keep: proofs arrive as
//! base64 text, light-client periods as duration text, and sequences as
//! string-encoded integers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::wire;

// ─── Shared structures ────────────────────────────────────────────────────────

/// Revision-qualified IBC height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Height {
    #[serde(with = "wire::u64_string", default)]
    pub revision_number: u64,
    #[serde(with = "wire::u64_string", default)]
    pub revision_height: u64,
}

/// A packet in flight between two channel ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Packet {
    #[serde(with = "wire::u64_string")]
    pub sequence: u64,
    pub source_port: String,
    pub source_channel: String,
    pub destination_port: String,
    pub destination_channel: String,
    /// Application payload; base64 on the wire.
    #[serde(with = "wire::base64_bytes")]
    pub data: Vec<u8>,
    pub timeout_height: Height,
    /// Nanosecond timestamp, kept as the wire's decimal string.
    pub timeout_timestamp: String,
}

/// Decoded `FungibleTokenPacketData` carried by transfer-port packets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FungibleTokenPacketData {
    pub denom: String,
    pub amount: String,
    pub sender: String,
    pub receiver: String,
}

/// Refund details derived from a timed-out transfer packet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgTransferRefund {
    pub refund_receiver: String,
    pub refund_denom: String,
    pub refund_amount: String,
}

// ─── Client messages ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TrustLevel {
    #[serde(with = "wire::u64_string")]
    pub numerator: u64,
    #[serde(with = "wire::u64_string")]
    pub denominator: u64,
}

/// Tendermint light-client state carried by `MsgCreateClient`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TendermintLightClientState {
    pub chain_id: String,
    pub trust_level: TrustLevel,
    #[serde(with = "wire::duration_text")]
    pub trusting_period: Duration,
    #[serde(with = "wire::duration_text")]
    pub unbonding_period: Duration,
    #[serde(with = "wire::duration_text")]
    pub max_clock_drift: Duration,
    #[serde(default)]
    pub latest_height: Option<Height>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgCreateClientParams {
    #[serde(default)]
    pub client_state: Option<TendermintLightClientState>,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgUpdateClientParams {
    pub client_id: String,
    pub signer: String,
}

// ─── Connection handshake ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MerklePrefix {
    #[serde(with = "wire::base64_bytes")]
    pub key_prefix: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ConnectionCounterparty {
    pub client_id: String,
    #[serde(default)]
    pub connection_id: String,
    #[serde(default)]
    pub prefix: Option<MerklePrefix>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ConnectionVersion {
    pub identifier: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgConnectionOpenInitParams {
    pub client_id: String,
    pub counterparty: ConnectionCounterparty,
    #[serde(with = "wire::u64_string", default)]
    pub delay_period: u64,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgConnectionOpenTryParams {
    pub client_id: String,
    pub counterparty: ConnectionCounterparty,
    #[serde(with = "wire::u64_string", default)]
    pub delay_period: u64,
    #[serde(default)]
    pub counterparty_versions: Vec<ConnectionVersion>,
    #[serde(with = "wire::base64_bytes")]
    pub proof_init: Vec<u8>,
    pub proof_height: Height,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgConnectionOpenAckParams {
    pub connection_id: String,
    #[serde(default)]
    pub counterparty_connection_id: String,
    #[serde(default)]
    pub version: Option<ConnectionVersion>,
    #[serde(with = "wire::base64_bytes")]
    pub proof_try: Vec<u8>,
    pub proof_height: Height,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgConnectionOpenConfirmParams {
    pub connection_id: String,
    #[serde(with = "wire::base64_bytes")]
    pub proof_ack: Vec<u8>,
    pub proof_height: Height,
    pub signer: String,
}

// ─── Channel handshake ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ChannelCounterparty {
    pub port_id: String,
    #[serde(default)]
    pub channel_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Channel {
    #[serde(default)]
    pub state: String,
    pub ordering: String,
    pub counterparty: ChannelCounterparty,
    #[serde(default)]
    pub connection_hops: Vec<String>,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgChannelOpenInitParams {
    pub port_id: String,
    pub channel: Channel,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgChannelOpenTryParams {
    pub port_id: String,
    #[serde(default)]
    pub previous_channel_id: String,
    pub channel: Channel,
    #[serde(default)]
    pub counterparty_version: String,
    #[serde(with = "wire::base64_bytes")]
    pub proof_init: Vec<u8>,
    pub proof_height: Height,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgChannelOpenAckParams {
    pub port_id: String,
    pub channel_id: String,
    #[serde(default)]
    pub counterparty_channel_id: String,
    #[serde(default)]
    pub counterparty_version: String,
    #[serde(with = "wire::base64_bytes")]
    pub proof_try: Vec<u8>,
    pub proof_height: Height,
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgChannelOpenConfirmParams {
    pub port_id: String,
    pub channel_id: String,
    #[serde(with = "wire::base64_bytes")]
    pub proof_ack: Vec<u8>,
    pub proof_height: Height,
    pub signer: String,
}

// ─── Packet relay ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgRecvPacketParams {
    pub packet: Packet,
    #[serde(with = "wire::base64_bytes")]
    pub proof_commitment: Vec<u8>,
    pub proof_height: Height,
    pub signer: String,
    /// Set by the parser when the packet rides the transfer port.
    #[serde(default)]
    pub maybe_fungible_token_packet_data: Option<FungibleTokenPacketData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgAcknowledgementParams {
    pub packet: Packet,
    #[serde(with = "wire::base64_bytes")]
    pub acknowledgement: Vec<u8>,
    #[serde(with = "wire::base64_bytes")]
    pub proof_acked: Vec<u8>,
    pub proof_height: Height,
    pub signer: String,
    #[serde(default)]
    pub maybe_fungible_token_packet_data: Option<FungibleTokenPacketData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgTransferParams {
    pub source_port: String,
    pub source_channel: String,
    pub token: super::Coin,
    pub sender: String,
    pub receiver: String,
    pub timeout_height: Height,
    #[serde(default)]
    pub timeout_timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgTimeoutParams {
    pub packet: Packet,
    #[serde(with = "wire::base64_bytes")]
    pub proof_unreceived: Vec<u8>,
    pub proof_height: Height,
    #[serde(with = "wire::u64_string")]
    pub next_sequence_recv: u64,
    pub signer: String,
    /// Refund derived from the timed-out transfer packet, when present.
    #[serde(default)]
    pub maybe_msg_transfer: Option<MsgTransferRefund>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgTimeoutOnCloseParams {
    pub packet: Packet,
    #[serde(with = "wire::base64_bytes")]
    pub proof_unreceived: Vec<u8>,
    #[serde(with = "wire::base64_bytes")]
    pub proof_close: Vec<u8>,
    pub proof_height: Height,
    #[serde(with = "wire::u64_string")]
    pub next_sequence_recv: u64,
    pub signer: String,
    #[serde(default)]
    pub maybe_msg_transfer: Option<MsgTransferRefund>,
}

// ─── Tests ────────────────────────────────────────────────────────────────────
