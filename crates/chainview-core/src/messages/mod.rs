//! Typed parameter records for every supported on-chain message kind.
//!
//! [`MsgPayload`] is the closed sum over all message kinds the pipeline
//! understands. Keeping it closed buys exhaustiveness checking everywhere a
//! message kind is dispatched on — adding a variant forces every consumer
//! (event naming, projection fan-out, …) to handle it before the crate
//! compiles again.
//!
//! Wire payloads arrive with snake_case field names; records serialize with
//! camelCase names. Byte/duration/integer text encodings are handled by the
//! hooks in [`crate::wire`].

pub mod bank;
pub mod distribution;
pub mod gov;
pub mod ibc;
pub mod nft;
pub mod slashing;
pub mod staking;

use serde::{Deserialize, Serialize};

/// An amount of a single denomination. Amounts stay as decimal strings — the
/// chain's integers exceed `u64` and the views never do arithmetic on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

/// Typed parameters of one decoded message, one variant per message kind.
///
/// Serializes untagged: the value of an event's `params` field is the bare
/// parameter record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MsgPayload {
    Send(bank::MsgSendParams),
    MultiSend(bank::MsgMultiSendParams),

    SetWithdrawAddress(distribution::MsgSetWithdrawAddressParams),
    WithdrawDelegatorReward(distribution::MsgWithdrawDelegatorRewardParams),
    WithdrawValidatorCommission(distribution::MsgWithdrawValidatorCommissionParams),
    FundCommunityPool(distribution::MsgFundCommunityPoolParams),

    SubmitParamChangeProposal(gov::MsgSubmitParamChangeProposalParams),
    SubmitCommunityPoolSpendProposal(gov::MsgSubmitCommunityPoolSpendProposalParams),
    SubmitSoftwareUpgradeProposal(gov::MsgSubmitSoftwareUpgradeProposalParams),
    SubmitCancelSoftwareUpgradeProposal(gov::MsgSubmitCancelSoftwareUpgradeProposalParams),
    Deposit(gov::MsgDepositParams),
    Vote(gov::MsgVoteParams),

    CreateValidator(staking::MsgCreateValidatorParams),
    EditValidator(staking::MsgEditValidatorParams),
    Delegate(staking::MsgDelegateParams),
    Undelegate(staking::MsgUndelegateParams),
    BeginRedelegate(staking::MsgBeginRedelegateParams),

    Unjail(slashing::MsgUnjailParams),

    NftIssueDenom(nft::MsgNftIssueDenomParams),
    NftMint(nft::MsgNftMintParams),
    NftTransfer(nft::MsgNftTransferParams),
    NftEdit(nft::MsgNftEditParams),
    NftBurn(nft::MsgNftBurnParams),

    IbcCreateClient(ibc::MsgCreateClientParams),
    IbcUpdateClient(ibc::MsgUpdateClientParams),
    IbcConnectionOpenInit(ibc::MsgConnectionOpenInitParams),
    IbcConnectionOpenTry(ibc::MsgConnectionOpenTryParams),
    IbcConnectionOpenAck(ibc::MsgConnectionOpenAckParams),
    IbcConnectionOpenConfirm(ibc::MsgConnectionOpenConfirmParams),
    IbcChannelOpenInit(ibc::MsgChannelOpenInitParams),
    IbcChannelOpenTry(ibc::MsgChannelOpenTryParams),
    IbcChannelOpenAck(ibc::MsgChannelOpenAckParams),
    IbcChannelOpenConfirm(ibc::MsgChannelOpenConfirmParams),
    IbcRecvPacket(ibc::MsgRecvPacketParams),
    IbcAcknowledgement(ibc::MsgAcknowledgementParams),
    IbcTransfer(ibc::MsgTransferParams),
    IbcTimeout(ibc::MsgTimeoutParams),
    IbcTimeoutOnClose(ibc::MsgTimeoutOnCloseParams),
}

impl MsgPayload {
    /// Message type label, used for view rows and per-type counters.
    pub fn msg_type(&self) -> &'static str {
        match self {
            Self::Send(_) => "MsgSend",
            Self::MultiSend(_) => "MsgMultiSend",
            Self::SetWithdrawAddress(_) => "MsgSetWithdrawAddress",
            Self::WithdrawDelegatorReward(_) => "MsgWithdrawDelegatorReward",
            Self::WithdrawValidatorCommission(_) => "MsgWithdrawValidatorCommission",
            Self::FundCommunityPool(_) => "MsgFundCommunityPool",
            Self::SubmitParamChangeProposal(_) => "MsgSubmitParamChangeProposal",
            Self::SubmitCommunityPoolSpendProposal(_) => "MsgSubmitCommunityPoolSpendProposal",
            Self::SubmitSoftwareUpgradeProposal(_) => "MsgSubmitSoftwareUpgradeProposal",
            Self::SubmitCancelSoftwareUpgradeProposal(_) => {
                "MsgSubmitCancelSoftwareUpgradeProposal"
            }
            Self::Deposit(_) => "MsgDeposit",
            Self::Vote(_) => "MsgVote",
            Self::CreateValidator(_) => "MsgCreateValidator",
            Self::EditValidator(_) => "MsgEditValidator",
            Self::Delegate(_) => "MsgDelegate",
            Self::Undelegate(_) => "MsgUndelegate",
            Self::BeginRedelegate(_) => "MsgBeginRedelegate",
            Self::Unjail(_) => "MsgUnjail",
            Self::NftIssueDenom(_) => "MsgNFTIssueDenom",
            Self::NftMint(_) => "MsgNFTMintNFT",
            Self::NftTransfer(_) => "MsgNFTTransferNFT",
            Self::NftEdit(_) => "MsgNFTEditNFT",
            Self::NftBurn(_) => "MsgNFTBurnNFT",
            Self::IbcCreateClient(_) => "MsgIBCCreateClient",
            Self::IbcUpdateClient(_) => "MsgIBCUpdateClient",
            Self::IbcConnectionOpenInit(_) => "MsgIBCConnectionOpenInit",
            Self::IbcConnectionOpenTry(_) => "MsgIBCConnectionOpenTry",
            Self::IbcConnectionOpenAck(_) => "MsgIBCConnectionOpenAck",
            Self::IbcConnectionOpenConfirm(_) => "MsgIBCConnectionOpenConfirm",
            Self::IbcChannelOpenInit(_) => "MsgIBCChannelOpenInit",
            Self::IbcChannelOpenTry(_) => "MsgIBCChannelOpenTry",
            Self::IbcChannelOpenAck(_) => "MsgIBCChannelOpenAck",
            Self::IbcChannelOpenConfirm(_) => "MsgIBCChannelOpenConfirm",
            Self::IbcRecvPacket(_) => "MsgIBCRecvPacket",
            Self::IbcAcknowledgement(_) => "MsgIBCAcknowledgement",
            Self::IbcTransfer(_) => "MsgIBCTransfer",
            Self::IbcTimeout(_) => "MsgIBCTimeout",
            Self::IbcTimeoutOnClose(_) => "MsgIBCTimeoutOnClose",
        }
    }
}

/// Every message type label, in declaration order. Drives subscription
/// declarations (`events_to_listen`).
pub const MSG_TYPES: &[&str] = &[
    "MsgSend",
    "MsgMultiSend",
    "MsgSetWithdrawAddress",
    "MsgWithdrawDelegatorReward",
    "MsgWithdrawValidatorCommission",
    "MsgFundCommunityPool",
    "MsgSubmitParamChangeProposal",
    "MsgSubmitCommunityPoolSpendProposal",
    "MsgSubmitSoftwareUpgradeProposal",
    "MsgSubmitCancelSoftwareUpgradeProposal",
    "MsgDeposit",
    "MsgVote",
    "MsgCreateValidator",
    "MsgEditValidator",
    "MsgDelegate",
    "MsgUndelegate",
    "MsgBeginRedelegate",
    "MsgUnjail",
    "MsgNFTIssueDenom",
    "MsgNFTMintNFT",
    "MsgNFTTransferNFT",
    "MsgNFTEditNFT",
    "MsgNFTBurnNFT",
    "MsgIBCCreateClient",
    "MsgIBCUpdateClient",
    "MsgIBCConnectionOpenInit",
    "MsgIBCConnectionOpenTry",
    "MsgIBCConnectionOpenAck",
    "MsgIBCConnectionOpenConfirm",
    "MsgIBCChannelOpenInit",
    "MsgIBCChannelOpenTry",
    "MsgIBCChannelOpenAck",
    "MsgIBCChannelOpenConfirm",
    "MsgIBCRecvPacket",
    "MsgIBCAcknowledgement",
    "MsgIBCTransfer",
    "MsgIBCTimeout",
    "MsgIBCTimeoutOnClose",
];

// ─── Tests ────────────────────────────────────────────────────────────────────
