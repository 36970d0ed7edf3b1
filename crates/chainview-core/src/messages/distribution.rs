//! Distribution module messages: reward withdrawal and community pool funding.

use serde::{Deserialize, Serialize};

use super::Coin;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgSetWithdrawAddressParams {
    pub delegator_address: String,
    pub withdraw_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgWithdrawDelegatorRewardParams {
    pub delegator_address: String,
    pub validator_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgWithdrawValidatorCommissionParams {
    pub validator_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgFundCommunityPoolParams {
    pub depositor: String,
    pub amount: Vec<Coin>,
}
