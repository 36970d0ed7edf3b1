//! Governance module messages.
//!
//! On the wire all four proposal kinds share one message type
//! (`MsgSubmitProposal`) and are distinguished by their content's own type
//! tag; the parser resolves that nested tag before constructing a command.

use serde::{Deserialize, Serialize};

use super::Coin;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ParamChange {
    pub subspace: String,
    pub key: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ParamChangeProposalContent {
    pub title: String,
    pub description: String,
    pub changes: Vec<ParamChange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgSubmitParamChangeProposalParams {
    pub content: ParamChangeProposalContent,
    pub initial_deposit: Vec<Coin>,
    pub proposer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CommunityPoolSpendProposalContent {
    pub title: String,
    pub description: String,
    pub recipient: String,
    pub amount: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgSubmitCommunityPoolSpendProposalParams {
    pub content: CommunityPoolSpendProposalContent,
    pub initial_deposit: Vec<Coin>,
    pub proposer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct UpgradePlan {
    pub name: String,
    #[serde(default)]
    pub time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(with = "crate::wire::u64_string", default)]
    pub height: u64,
    #[serde(default)]
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SoftwareUpgradeProposalContent {
    pub title: String,
    pub description: String,
    pub plan: UpgradePlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgSubmitSoftwareUpgradeProposalParams {
    pub content: SoftwareUpgradeProposalContent,
    pub initial_deposit: Vec<Coin>,
    pub proposer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CancelSoftwareUpgradeProposalContent {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgSubmitCancelSoftwareUpgradeProposalParams {
    pub content: CancelSoftwareUpgradeProposalContent,
    pub initial_deposit: Vec<Coin>,
    pub proposer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgDepositParams {
    #[serde(with = "crate::wire::u64_string")]
    pub proposal_id: u64,
    pub depositor: String,
    pub amount: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MsgVoteParams {
    #[serde(with = "crate::wire::u64_string")]
    pub proposal_id: u64,
    pub voter: String,
    /// Vote option as emitted by the node, e.g. `"VOTE_OPTION_YES"`.
    pub option: String,
}
