//! Bank module messages: plain and multi-party transfers.

use serde::{Deserialize, Serialize};

use super::Coin;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgSendParams {
    pub from_address: String,
    pub to_address: String,
    pub amount: Vec<Coin>,
}

/// One input or output leg of a multi-party transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MultiSendParty {
    pub address: String,
    pub coins: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgMultiSendParams {
    pub inputs: Vec<MultiSendParty>,
    pub outputs: Vec<MultiSendParty>,
}
