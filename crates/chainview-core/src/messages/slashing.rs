//! Slashing module messages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgUnjailParams {
    /// Validator operator address (wire name `validator_addr`).
    pub validator_addr: String,
}
