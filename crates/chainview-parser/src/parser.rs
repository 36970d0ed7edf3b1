//! Block → command parsing.
//!
//! Resolves every message's protobuf type tag to a typed parameter record,
//! preserving transaction order and in-transaction message order. The command
//! sequence leads with one synthetic block-created command per height, so
//! every downstream batch carries block metadata ahead of the domain events.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use chainview_core::address::account_address_from_validator_address;
use chainview_core::messages::{
    bank, distribution, gov, ibc, nft, slashing, staking, Coin, MsgPayload,
};
use chainview_core::types::{Block, BlockResults, Message};
use chainview_core::{Command, MsgCommand};

use crate::error::{DecodeError, ParseError};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Deployment-level parser constants. Fixed at startup, never negotiated at
/// runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Bech32 prefix of account addresses, e.g. `"cro"`.
    pub account_address_prefix: String,
    /// Staking (bond) denomination, e.g. `"basecro"`.
    pub staking_denom: String,
    #[serde(default)]
    pub unknown_message_policy: UnknownMessagePolicy,
}

/// How the parser reacts to a message it cannot decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownMessagePolicy {
    /// Fail the whole block on the first unrecognized or undecodable
    /// message. The conservative default.
    #[default]
    Abort,
    /// Drop the offending message and keep parsing the rest of the block.
    Skip,
}

// ─── Message type tags ────────────────────────────────────────────────────────

/// Protobuf type URLs of the supported message kinds.
pub mod type_url {
    pub const MSG_SEND: &str = "/cosmos.bank.v1beta1.MsgSend";
    pub const MSG_MULTI_SEND: &str = "/cosmos.bank.v1beta1.MsgMultiSend";

    pub const MSG_SET_WITHDRAW_ADDRESS: &str =
        "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress";
    pub const MSG_WITHDRAW_DELEGATOR_REWARD: &str =
        "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward";
    pub const MSG_WITHDRAW_VALIDATOR_COMMISSION: &str =
        "/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission";
    pub const MSG_FUND_COMMUNITY_POOL: &str = "/cosmos.distribution.v1beta1.MsgFundCommunityPool";

    pub const MSG_SUBMIT_PROPOSAL: &str = "/cosmos.gov.v1beta1.MsgSubmitProposal";
    pub const MSG_DEPOSIT: &str = "/cosmos.gov.v1beta1.MsgDeposit";
    pub const MSG_VOTE: &str = "/cosmos.gov.v1beta1.MsgVote";

    pub const MSG_CREATE_VALIDATOR: &str = "/cosmos.staking.v1beta1.MsgCreateValidator";
    pub const MSG_EDIT_VALIDATOR: &str = "/cosmos.staking.v1beta1.MsgEditValidator";
    pub const MSG_DELEGATE: &str = "/cosmos.staking.v1beta1.MsgDelegate";
    pub const MSG_UNDELEGATE: &str = "/cosmos.staking.v1beta1.MsgUndelegate";
    pub const MSG_BEGIN_REDELEGATE: &str = "/cosmos.staking.v1beta1.MsgBeginRedelegate";

    pub const MSG_UNJAIL: &str = "/cosmos.slashing.v1beta1.MsgUnjail";

    pub const MSG_NFT_ISSUE_DENOM: &str = "/chainmain.nft.v1.MsgIssueDenom";
    pub const MSG_NFT_MINT: &str = "/chainmain.nft.v1.MsgMintNFT";
    pub const MSG_NFT_TRANSFER: &str = "/chainmain.nft.v1.MsgTransferNFT";
    pub const MSG_NFT_EDIT: &str = "/chainmain.nft.v1.MsgEditNFT";
    pub const MSG_NFT_BURN: &str = "/chainmain.nft.v1.MsgBurnNFT";

    pub const MSG_IBC_CREATE_CLIENT: &str = "/ibc.core.client.v1.MsgCreateClient";
    pub const MSG_IBC_UPDATE_CLIENT: &str = "/ibc.core.client.v1.MsgUpdateClient";
    pub const MSG_IBC_CONNECTION_OPEN_INIT: &str =
        "/ibc.core.connection.v1.MsgConnectionOpenInit";
    pub const MSG_IBC_CONNECTION_OPEN_TRY: &str = "/ibc.core.connection.v1.MsgConnectionOpenTry";
    pub const MSG_IBC_CONNECTION_OPEN_ACK: &str = "/ibc.core.connection.v1.MsgConnectionOpenAck";
    pub const MSG_IBC_CONNECTION_OPEN_CONFIRM: &str =
        "/ibc.core.connection.v1.MsgConnectionOpenConfirm";
    pub const MSG_IBC_CHANNEL_OPEN_INIT: &str = "/ibc.core.channel.v1.MsgChannelOpenInit";
    pub const MSG_IBC_CHANNEL_OPEN_TRY: &str = "/ibc.core.channel.v1.MsgChannelOpenTry";
    pub const MSG_IBC_CHANNEL_OPEN_ACK: &str = "/ibc.core.channel.v1.MsgChannelOpenAck";
    pub const MSG_IBC_CHANNEL_OPEN_CONFIRM: &str = "/ibc.core.channel.v1.MsgChannelOpenConfirm";
    pub const MSG_IBC_RECV_PACKET: &str = "/ibc.core.channel.v1.MsgRecvPacket";
    pub const MSG_IBC_ACKNOWLEDGEMENT: &str = "/ibc.core.channel.v1.MsgAcknowledgement";
    pub const MSG_IBC_TIMEOUT: &str = "/ibc.core.channel.v1.MsgTimeout";
    pub const MSG_IBC_TIMEOUT_ON_CLOSE: &str = "/ibc.core.channel.v1.MsgTimeoutOnClose";
    pub const MSG_IBC_TRANSFER: &str = "/ibc.applications.transfer.v1.MsgTransfer";

    // Governance proposal content tags, nested inside MsgSubmitProposal.
    pub const PARAM_CHANGE_PROPOSAL: &str = "/cosmos.params.v1beta1.ParameterChangeProposal";
    pub const COMMUNITY_POOL_SPEND_PROPOSAL: &str =
        "/cosmos.distribution.v1beta1.CommunityPoolSpendProposal";
    pub const SOFTWARE_UPGRADE_PROPOSAL: &str = "/cosmos.upgrade.v1beta1.SoftwareUpgradeProposal";
    pub const CANCEL_SOFTWARE_UPGRADE_PROPOSAL: &str =
        "/cosmos.upgrade.v1beta1.CancelSoftwareUpgradeProposal";
}

// ─── Entry point ──────────────────────────────────────────────────────────────

/// Parse one block and its execution results into an ordered command
/// sequence.
///
/// Height 0 (genesis) yields no commands; downstream only a checkpoint
/// advance is expected. For any other height the sequence is one
/// `CreateBlock` followed by one `CreateMsg` per message in (transaction,
/// message-index) order.
pub fn parse_block(
    block: &Block,
    results: &BlockResults,
    config: &ParserConfig,
) -> Result<Vec<Command>, ParseError> {
    if block.height == 0 {
        return Ok(Vec::new());
    }

    if block.transactions.len() != results.txs_results.len() {
        return Err(ParseError::ResultsMismatch {
            height: block.height,
            transactions: block.transactions.len(),
            results: results.txs_results.len(),
        });
    }

    let mut commands = Vec::with_capacity(1 + block.transactions.len());
    commands.push(Command::CreateBlock(block.clone()));

    for (tx, result) in block.transactions.iter().zip(&results.txs_results) {
        for msg in &tx.messages {
            let payload = match parse_message(msg, &tx.hash, config) {
                Ok(payload) => payload,
                Err(err)
                    if config.unknown_message_policy == UnknownMessagePolicy::Skip
                        && err.is_skippable() =>
                {
                    tracing::debug!(
                        tx_hash = %tx.hash,
                        msg_index = msg.index,
                        error = %err,
                        "skipping undecodable message"
                    );
                    continue;
                }
                Err(err) => return Err(err),
            };
            commands.push(Command::CreateMsg(MsgCommand {
                height: block.height,
                tx_hash: tx.hash.clone(),
                tx_success: result.success(),
                msg_index: msg.index,
                payload,
            }));
        }
    }

    Ok(commands)
}

// ─── Per-message dispatch ─────────────────────────────────────────────────────

fn parse_message(
    msg: &Message,
    tx_hash: &str,
    config: &ParserConfig,
) -> Result<MsgPayload, ParseError> {
    use type_url::*;

    let payload = match msg.type_url.as_str() {
        MSG_SEND => MsgPayload::Send(decode_params::<bank::MsgSendParams>(msg)?),
        MSG_MULTI_SEND => MsgPayload::MultiSend(decode_params::<bank::MsgMultiSendParams>(msg)?),

        MSG_SET_WITHDRAW_ADDRESS => MsgPayload::SetWithdrawAddress(decode_params::<
            distribution::MsgSetWithdrawAddressParams,
        >(msg)?),
        MSG_WITHDRAW_DELEGATOR_REWARD => MsgPayload::WithdrawDelegatorReward(decode_params::<
            distribution::MsgWithdrawDelegatorRewardParams,
        >(msg)?),
        MSG_WITHDRAW_VALIDATOR_COMMISSION => {
            let params =
                decode_params::<distribution::MsgWithdrawValidatorCommissionParams>(msg)?;
            // Validate convertibility up front; a bad operator address here
            // means the block data is corrupt.
            account_address_from_validator_address(
                &config.account_address_prefix,
                &params.validator_address,
            )?;
            MsgPayload::WithdrawValidatorCommission(params)
        }
        MSG_FUND_COMMUNITY_POOL => MsgPayload::FundCommunityPool(decode_params::<
            distribution::MsgFundCommunityPoolParams,
        >(msg)?),

        MSG_SUBMIT_PROPOSAL => parse_submit_proposal(msg, tx_hash)?,
        MSG_DEPOSIT => MsgPayload::Deposit(decode_params::<gov::MsgDepositParams>(msg)?),
        MSG_VOTE => MsgPayload::Vote(decode_params::<gov::MsgVoteParams>(msg)?),

        MSG_CREATE_VALIDATOR => {
            let params = decode_params::<staking::MsgCreateValidatorParams>(msg)?;
            note_unexpected_denom(config, "MsgCreateValidator", &params.value);
            MsgPayload::CreateValidator(params)
        }
        MSG_EDIT_VALIDATOR => {
            let params = decode_params::<staking::MsgEditValidatorParams>(msg)?;
            account_address_from_validator_address(
                &config.account_address_prefix,
                &params.validator_address,
            )?;
            MsgPayload::EditValidator(params)
        }
        MSG_DELEGATE => {
            let params = decode_params::<staking::MsgDelegateParams>(msg)?;
            note_unexpected_denom(config, "MsgDelegate", &params.amount);
            MsgPayload::Delegate(params)
        }
        MSG_UNDELEGATE => {
            let params = decode_params::<staking::MsgUndelegateParams>(msg)?;
            note_unexpected_denom(config, "MsgUndelegate", &params.amount);
            MsgPayload::Undelegate(params)
        }
        MSG_BEGIN_REDELEGATE => {
            let params = decode_params::<staking::MsgBeginRedelegateParams>(msg)?;
            note_unexpected_denom(config, "MsgBeginRedelegate", &params.amount);
            MsgPayload::BeginRedelegate(params)
        }

        MSG_UNJAIL => {
            let params = decode_params::<slashing::MsgUnjailParams>(msg)?;
            account_address_from_validator_address(
                &config.account_address_prefix,
                &params.validator_addr,
            )?;
            MsgPayload::Unjail(params)
        }

        MSG_NFT_ISSUE_DENOM => {
            MsgPayload::NftIssueDenom(decode_params::<nft::MsgNftIssueDenomParams>(msg)?)
        }
        MSG_NFT_MINT => MsgPayload::NftMint(decode_params::<nft::MsgNftMintParams>(msg)?),
        MSG_NFT_TRANSFER => {
            MsgPayload::NftTransfer(decode_params::<nft::MsgNftTransferParams>(msg)?)
        }
        MSG_NFT_EDIT => MsgPayload::NftEdit(decode_params::<nft::MsgNftEditParams>(msg)?),
        MSG_NFT_BURN => MsgPayload::NftBurn(decode_params::<nft::MsgNftBurnParams>(msg)?),

        MSG_IBC_CREATE_CLIENT => {
            MsgPayload::IbcCreateClient(decode_params::<ibc::MsgCreateClientParams>(msg)?)
        }
        MSG_IBC_UPDATE_CLIENT => {
            MsgPayload::IbcUpdateClient(decode_params::<ibc::MsgUpdateClientParams>(msg)?)
        }
        MSG_IBC_CONNECTION_OPEN_INIT => MsgPayload::IbcConnectionOpenInit(decode_params::<
            ibc::MsgConnectionOpenInitParams,
        >(msg)?),
        MSG_IBC_CONNECTION_OPEN_TRY => MsgPayload::IbcConnectionOpenTry(decode_params::<
            ibc::MsgConnectionOpenTryParams,
        >(msg)?),
        MSG_IBC_CONNECTION_OPEN_ACK => MsgPayload::IbcConnectionOpenAck(decode_params::<
            ibc::MsgConnectionOpenAckParams,
        >(msg)?),
        MSG_IBC_CONNECTION_OPEN_CONFIRM => MsgPayload::IbcConnectionOpenConfirm(decode_params::<
            ibc::MsgConnectionOpenConfirmParams,
        >(msg)?),
        MSG_IBC_CHANNEL_OPEN_INIT => {
            MsgPayload::IbcChannelOpenInit(decode_params::<ibc::MsgChannelOpenInitParams>(msg)?)
        }
        MSG_IBC_CHANNEL_OPEN_TRY => {
            MsgPayload::IbcChannelOpenTry(decode_params::<ibc::MsgChannelOpenTryParams>(msg)?)
        }
        MSG_IBC_CHANNEL_OPEN_ACK => {
            MsgPayload::IbcChannelOpenAck(decode_params::<ibc::MsgChannelOpenAckParams>(msg)?)
        }
        MSG_IBC_CHANNEL_OPEN_CONFIRM => MsgPayload::IbcChannelOpenConfirm(decode_params::<
            ibc::MsgChannelOpenConfirmParams,
        >(msg)?),

        MSG_IBC_RECV_PACKET => {
            let mut params = decode_params::<ibc::MsgRecvPacketParams>(msg)?;
            params.maybe_fungible_token_packet_data =
                token_packet_data(msg, &params.packet, &params.packet.destination_port)?;
            MsgPayload::IbcRecvPacket(params)
        }
        MSG_IBC_ACKNOWLEDGEMENT => {
            let mut params = decode_params::<ibc::MsgAcknowledgementParams>(msg)?;
            params.maybe_fungible_token_packet_data =
                token_packet_data(msg, &params.packet, &params.packet.source_port)?;
            MsgPayload::IbcAcknowledgement(params)
        }
        MSG_IBC_TRANSFER => MsgPayload::IbcTransfer(decode_params::<ibc::MsgTransferParams>(msg)?),
        MSG_IBC_TIMEOUT => {
            let mut params = decode_params::<ibc::MsgTimeoutParams>(msg)?;
            params.maybe_msg_transfer = transfer_refund(msg, &params.packet)?;
            MsgPayload::IbcTimeout(params)
        }
        MSG_IBC_TIMEOUT_ON_CLOSE => {
            let mut params = decode_params::<ibc::MsgTimeoutOnCloseParams>(msg)?;
            params.maybe_msg_transfer = transfer_refund(msg, &params.packet)?;
            MsgPayload::IbcTimeoutOnClose(params)
        }

        _ => {
            return Err(ParseError::UnknownMessageType {
                type_url: msg.type_url.clone(),
                tx_hash: tx_hash.to_string(),
                msg_index: msg.index,
            })
        }
    };

    Ok(payload)
}

/// `MsgSubmitProposal` carries its real kind in the content's own type tag.
fn parse_submit_proposal(msg: &Message, tx_hash: &str) -> Result<MsgPayload, ParseError> {
    #[derive(Deserialize)]
    struct RawMsgSubmitProposal {
        content: serde_json::Value,
        #[serde(default)]
        initial_deposit: Vec<Coin>,
        proposer: String,
    }

    let raw: RawMsgSubmitProposal = decode_params(msg)?;
    let content_type = raw
        .content
        .get("@type")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let payload = match content_type.as_str() {
        type_url::PARAM_CHANGE_PROPOSAL => {
            MsgPayload::SubmitParamChangeProposal(gov::MsgSubmitParamChangeProposalParams {
                content: decode_content(msg, &raw.content)?,
                initial_deposit: raw.initial_deposit,
                proposer: raw.proposer,
            })
        }
        type_url::COMMUNITY_POOL_SPEND_PROPOSAL => MsgPayload::SubmitCommunityPoolSpendProposal(
            gov::MsgSubmitCommunityPoolSpendProposalParams {
                content: decode_content(msg, &raw.content)?,
                initial_deposit: raw.initial_deposit,
                proposer: raw.proposer,
            },
        ),
        type_url::SOFTWARE_UPGRADE_PROPOSAL => MsgPayload::SubmitSoftwareUpgradeProposal(
            gov::MsgSubmitSoftwareUpgradeProposalParams {
                content: decode_content(msg, &raw.content)?,
                initial_deposit: raw.initial_deposit,
                proposer: raw.proposer,
            },
        ),
        type_url::CANCEL_SOFTWARE_UPGRADE_PROPOSAL => {
            MsgPayload::SubmitCancelSoftwareUpgradeProposal(
                gov::MsgSubmitCancelSoftwareUpgradeProposalParams {
                    content: decode_content(msg, &raw.content)?,
                    initial_deposit: raw.initial_deposit,
                    proposer: raw.proposer,
                },
            )
        }
        _ => {
            return Err(ParseError::UnknownMessageType {
                type_url: format!("{}({content_type})", msg.type_url),
                tx_hash: tx_hash.to_string(),
                msg_index: msg.index,
            })
        }
    };

    Ok(payload)
}

// ─── Decode helpers ───────────────────────────────────────────────────────────

fn decode_params<T: DeserializeOwned>(msg: &Message) -> Result<T, DecodeError> {
    serde_json::from_value(msg.value.clone()).map_err(|e| DecodeError {
        type_url: msg.type_url.clone(),
        msg_index: msg.index,
        reason: e.to_string(),
    })
}

fn decode_content<T: DeserializeOwned>(
    msg: &Message,
    content: &serde_json::Value,
) -> Result<T, DecodeError> {
    serde_json::from_value(content.clone()).map_err(|e| DecodeError {
        type_url: msg.type_url.clone(),
        msg_index: msg.index,
        reason: format!("proposal content: {e}"),
    })
}

/// Decode the fungible-token payload of a transfer-port packet. Packets on
/// other ports carry application data this pipeline does not model and yield
/// `None`, which is not an error.
fn token_packet_data(
    msg: &Message,
    packet: &ibc::Packet,
    port: &str,
) -> Result<Option<ibc::FungibleTokenPacketData>, DecodeError> {
    if port != "transfer" {
        return Ok(None);
    }
    serde_json::from_slice(&packet.data)
        .map(Some)
        .map_err(|e| DecodeError {
            type_url: msg.type_url.clone(),
            msg_index: msg.index,
            reason: format!("fungible token packet data: {e}"),
        })
}

/// A timed-out transfer packet refunds its sender; surface that as typed
/// refund details next to the raw packet.
fn transfer_refund(
    msg: &Message,
    packet: &ibc::Packet,
) -> Result<Option<ibc::MsgTransferRefund>, DecodeError> {
    let data = token_packet_data(msg, packet, &packet.source_port)?;
    Ok(data.map(|d| ibc::MsgTransferRefund {
        refund_receiver: d.sender,
        refund_denom: d.denom,
        refund_amount: d.amount,
    }))
}

fn note_unexpected_denom(config: &ParserConfig, msg_type: &str, coin: &Coin) {
    if coin.denom != config.staking_denom {
        tracing::warn!(
            msg_type,
            denom = %coin.denom,
            expected = %config.staking_denom,
            "staking amount in unexpected denomination"
        );
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use bech32::{Bech32, Hrp};
    use chainview_core::types::{Transaction, TxResult};
    use chainview_core::Event;

    fn config() -> ParserConfig {
        ParserConfig {
            account_address_prefix: "cro".into(),
            staking_denom: "basecro".into(),
            unknown_message_policy: UnknownMessagePolicy::Abort,
        }
    }

    fn skip_config() -> ParserConfig {
        ParserConfig {
            unknown_message_policy: UnknownMessagePolicy::Skip,
            ..config()
        }
    }

    fn message(type_url: &str, index: u32, value: serde_json::Value) -> Message {
        Message {
            type_url: type_url.into(),
            index,
            value,
        }
    }

    fn block_of(height: u64, transactions: Vec<Transaction>) -> (Block, BlockResults) {
        let results = BlockResults {
            height,
            txs_results: transactions.iter().map(|_| TxResult { code: 0 }).collect(),
        };
        let block = Block {
            height,
            hash: format!("B{height}"),
            time: "2021-05-11T10:31:07Z".parse().unwrap(),
            transactions,
        };
        (block, results)
    }

    fn send_value() -> serde_json::Value {
        serde_json::json!({
            "from_address": "cro1from",
            "to_address": "cro1to",
            "amount": [{"denom": "basecro", "amount": "1000"}],
        })
    }

    fn validator_address(prefix: &str) -> String {
        bech32::encode::<Bech32>(Hrp::parse(prefix).unwrap(), &[9u8; 20]).unwrap()
    }

    fn packet_value(dest_port: &str, data: &serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "sequence": "5",
            "source_port": "transfer",
            "source_channel": "channel-9",
            "destination_port": dest_port,
            "destination_channel": "channel-109",
            "data": STANDARD.encode(serde_json::to_vec(data).unwrap()),
            "timeout_height": {"revision_number": "4", "revision_height": "6182017"},
            "timeout_timestamp": "1620753450655319559",
        })
    }

    fn token_data() -> serde_json::Value {
        serde_json::json!({
            "amount": "1",
            "denom": "basecro",
            "receiver": "cro1receiver",
            "sender": "cro1sender",
        })
    }

    #[test]
    fn preserves_transaction_and_message_order() {
        let (block, results) = block_of(
            10,
            vec![
                Transaction {
                    hash: "T1".into(),
                    messages: vec![
                        message(type_url::MSG_SEND, 0, send_value()),
                        message(type_url::MSG_SEND, 1, send_value()),
                    ],
                },
                Transaction {
                    hash: "T2".into(),
                    messages: vec![
                        message(type_url::MSG_SEND, 0, send_value()),
                        message(type_url::MSG_SEND, 1, send_value()),
                    ],
                },
            ],
        );

        let commands = parse_block(&block, &results, &config()).unwrap();
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[0].name(), "CreateBlock");

        let envelope: Vec<(String, u32)> = commands[1..]
            .iter()
            .map(|c| match c {
                Command::CreateMsg(m) => (m.tx_hash.clone(), m.msg_index),
                other => panic!("unexpected command {other:?}"),
            })
            .collect();
        assert_eq!(
            envelope,
            vec![
                ("T1".to_string(), 0),
                ("T1".to_string(), 1),
                ("T2".to_string(), 0),
                ("T2".to_string(), 1),
            ]
        );

        // The derived event sequence replays the same order.
        let events: Vec<Event> = commands.into_iter().map(Command::exec).collect();
        let order: Vec<(String, u32)> = events[1..]
            .iter()
            .map(|e| match e {
                Event::Msg(m) => (m.tx_hash.clone(), m.msg_index),
                other => panic!("unexpected event {other:?}"),
            })
            .collect();
        assert_eq!(order.len(), 4);
        assert!(order.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn genesis_height_produces_no_commands() {
        let (block, results) = block_of(0, vec![]);
        let commands = parse_block(&block, &results, &config()).unwrap();
        assert!(commands.is_empty());
    }

    #[test]
    fn transaction_result_count_mismatch_is_fatal() {
        let (block, _) = block_of(
            3,
            vec![Transaction {
                hash: "T1".into(),
                messages: vec![message(type_url::MSG_SEND, 0, send_value())],
            }],
        );
        let results = BlockResults {
            height: 3,
            txs_results: vec![],
        };
        let err = parse_block(&block, &results, &config()).unwrap_err();
        assert!(matches!(err, ParseError::ResultsMismatch { height: 3, .. }));
    }

    #[test]
    fn failed_transaction_keeps_its_messages_with_success_false() {
        let (block, mut results) = block_of(
            4,
            vec![Transaction {
                hash: "T1".into(),
                messages: vec![message(type_url::MSG_SEND, 0, send_value())],
            }],
        );
        results.txs_results[0].code = 11;

        let commands = parse_block(&block, &results, &config()).unwrap();
        let Command::CreateMsg(cmd) = &commands[1] else {
            panic!("expected message command");
        };
        assert!(!cmd.tx_success);
    }

    #[test]
    fn unknown_type_aborts_and_names_the_message_index() {
        let (block, results) = block_of(
            5,
            vec![Transaction {
                hash: "T1".into(),
                messages: vec![
                    message(type_url::MSG_SEND, 0, send_value()),
                    message("/cosmwasm.wasm.v1.MsgExecuteContract", 1, serde_json::json!({})),
                ],
            }],
        );
        let err = parse_block(&block, &results, &config()).unwrap_err();
        match err {
            ParseError::UnknownMessageType {
                msg_index, tx_hash, ..
            } => {
                assert_eq!(msg_index, 1);
                assert_eq!(tx_hash, "T1");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn unknown_type_is_dropped_under_skip_policy() {
        let (block, results) = block_of(
            5,
            vec![Transaction {
                hash: "T1".into(),
                messages: vec![
                    message(type_url::MSG_SEND, 0, send_value()),
                    message("/cosmwasm.wasm.v1.MsgExecuteContract", 1, serde_json::json!({})),
                    message(type_url::MSG_SEND, 2, send_value()),
                ],
            }],
        );
        let commands = parse_block(&block, &results, &skip_config()).unwrap();
        // CreateBlock + the two sends; the unknown message is omitted.
        assert_eq!(commands.len(), 3);
        let indices: Vec<u32> = commands[1..]
            .iter()
            .map(|c| match c {
                Command::CreateMsg(m) => m.msg_index,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn malformed_payload_follows_the_policy() {
        let bad_send = serde_json::json!({"from_address": "cro1from"});
        let (block, results) = block_of(
            6,
            vec![Transaction {
                hash: "T1".into(),
                messages: vec![message(type_url::MSG_SEND, 0, bad_send)],
            }],
        );

        let err = parse_block(&block, &results, &config()).unwrap_err();
        assert!(matches!(err, ParseError::Decode(_)));

        let commands = parse_block(&block, &results, &skip_config()).unwrap();
        assert_eq!(commands.len(), 1); // CreateBlock only
    }

    #[test]
    fn malformed_validator_address_is_fatal_even_under_skip() {
        let (block, results) = block_of(
            7,
            vec![Transaction {
                hash: "T1".into(),
                messages: vec![message(
                    type_url::MSG_UNJAIL,
                    0,
                    serde_json::json!({"validator_addr": "not-bech32"}),
                )],
            }],
        );
        let err = parse_block(&block, &results, &skip_config()).unwrap_err();
        assert!(matches!(err, ParseError::Address(_)));
    }

    #[test]
    fn well_formed_validator_address_parses() {
        let (block, results) = block_of(
            8,
            vec![Transaction {
                hash: "T1".into(),
                messages: vec![message(
                    type_url::MSG_UNJAIL,
                    0,
                    serde_json::json!({"validator_addr": validator_address("crocncl")}),
                )],
            }],
        );
        let commands = parse_block(&block, &results, &config()).unwrap();
        assert_eq!(commands[1].name(), "CreateMsgUnjail");
    }

    #[test]
    fn recv_packet_on_transfer_port_attaches_token_data() {
        let value = serde_json::json!({
            "packet": packet_value("transfer", &token_data()),
            "proof_commitment": STANDARD.encode(b"proof"),
            "proof_height": {"revision_number": "4", "revision_height": "6185877"},
            "signer": "cro1signer",
        });
        let (block, results) = block_of(
            9,
            vec![Transaction {
                hash: "T1".into(),
                messages: vec![message(type_url::MSG_IBC_RECV_PACKET, 0, value)],
            }],
        );
        let commands = parse_block(&block, &results, &config()).unwrap();
        let Command::CreateMsg(cmd) = &commands[1] else {
            panic!("expected message command");
        };
        let MsgPayload::IbcRecvPacket(params) = &cmd.payload else {
            panic!("expected recv packet payload");
        };
        let data = params.maybe_fungible_token_packet_data.as_ref().unwrap();
        assert_eq!(data.receiver, "cro1receiver");
        assert_eq!(data.amount, "1");
    }

    #[test]
    fn recv_packet_on_other_port_has_no_token_data() {
        let value = serde_json::json!({
            "packet": packet_value("oracle", &serde_json::json!({"request_id": "77"})),
            "proof_commitment": STANDARD.encode(b"proof"),
            "proof_height": {"revision_number": "4", "revision_height": "6185877"},
            "signer": "cro1signer",
        });
        let (block, results) = block_of(
            9,
            vec![Transaction {
                hash: "T1".into(),
                messages: vec![message(type_url::MSG_IBC_RECV_PACKET, 0, value)],
            }],
        );
        let commands = parse_block(&block, &results, &config()).unwrap();
        let Command::CreateMsg(cmd) = &commands[1] else {
            panic!("expected message command");
        };
        let MsgPayload::IbcRecvPacket(params) = &cmd.payload else {
            panic!("expected recv packet payload");
        };
        assert!(params.maybe_fungible_token_packet_data.is_none());
    }

    #[test]
    fn timeout_derives_refund_from_packet_data() {
        let value = serde_json::json!({
            "packet": packet_value("transfer", &token_data()),
            "proof_unreceived": STANDARD.encode(b"proof"),
            "proof_height": {"revision_number": "4", "revision_height": "6185877"},
            "next_sequence_recv": "5",
            "signer": "cro1signer",
        });
        let (block, results) = block_of(
            10,
            vec![Transaction {
                hash: "T1".into(),
                messages: vec![message(type_url::MSG_IBC_TIMEOUT, 0, value)],
            }],
        );
        let commands = parse_block(&block, &results, &config()).unwrap();
        let Command::CreateMsg(cmd) = &commands[1] else {
            panic!("expected message command");
        };
        let MsgPayload::IbcTimeout(params) = &cmd.payload else {
            panic!("expected timeout payload");
        };
        let refund = params.maybe_msg_transfer.as_ref().unwrap();
        assert_eq!(refund.refund_receiver, "cro1sender");
        assert_eq!(refund.refund_denom, "basecro");
        assert_eq!(refund.refund_amount, "1");
        assert_eq!(params.next_sequence_recv, 5);
    }

    #[test]
    fn invalid_base64_in_proof_is_a_decode_error() {
        let value = serde_json::json!({
            "packet": packet_value("transfer", &token_data()),
            "proof_commitment": "%%%",
            "proof_height": {"revision_number": "4", "revision_height": "6185877"},
            "signer": "cro1signer",
        });
        let (block, results) = block_of(
            11,
            vec![Transaction {
                hash: "T1".into(),
                messages: vec![message(type_url::MSG_IBC_RECV_PACKET, 0, value)],
            }],
        );
        let err = parse_block(&block, &results, &config()).unwrap_err();
        match err {
            ParseError::Decode(decode) => {
                assert!(decode.reason.contains("invalid base64"));
                assert_eq!(decode.msg_index, 0);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn invalid_duration_in_client_state_is_a_decode_error() {
        let value = serde_json::json!({
            "client_state": {
                "@type": "/ibc.lightclients.tendermint.v1.ClientState",
                "chain_id": "crypto-org-chain-mainnet-1",
                "trust_level": {"numerator": "1", "denominator": "3"},
                "trusting_period": "two weeks-ish",
                "unbonding_period": "1814400s",
                "max_clock_drift": "10s",
            },
            "signer": "cro1signer",
        });
        let (block, results) = block_of(
            12,
            vec![Transaction {
                hash: "T1".into(),
                messages: vec![message(type_url::MSG_IBC_CREATE_CLIENT, 0, value)],
            }],
        );
        let err = parse_block(&block, &results, &config()).unwrap_err();
        assert!(matches!(err, ParseError::Decode(_)));
    }

    #[test]
    fn submit_proposal_dispatches_on_content_type() {
        let value = serde_json::json!({
            "content": {
                "@type": type_url::PARAM_CHANGE_PROPOSAL,
                "title": "Raise max validators",
                "description": "From 100 to 150",
                "changes": [{"subspace": "staking", "key": "MaxValidators", "value": "150"}],
            },
            "initial_deposit": [{"denom": "basecro", "amount": "10000"}],
            "proposer": "cro1proposer",
        });
        let (block, results) = block_of(
            13,
            vec![Transaction {
                hash: "T1".into(),
                messages: vec![message(type_url::MSG_SUBMIT_PROPOSAL, 0, value)],
            }],
        );
        let commands = parse_block(&block, &results, &config()).unwrap();
        assert_eq!(commands[1].name(), "CreateMsgSubmitParamChangeProposal");
    }

    #[test]
    fn submit_proposal_with_unknown_content_follows_the_policy() {
        let value = serde_json::json!({
            "content": {"@type": "/cosmos.gov.v1beta1.TextProposal", "title": "t", "description": "d"},
            "proposer": "cro1proposer",
        });
        let (block, results) = block_of(
            14,
            vec![Transaction {
                hash: "T1".into(),
                messages: vec![message(type_url::MSG_SUBMIT_PROPOSAL, 0, value)],
            }],
        );

        let err = parse_block(&block, &results, &config()).unwrap_err();
        assert!(matches!(err, ParseError::UnknownMessageType { .. }));

        let commands = parse_block(&block, &results, &skip_config()).unwrap();
        assert_eq!(commands.len(), 1);
    }
}
