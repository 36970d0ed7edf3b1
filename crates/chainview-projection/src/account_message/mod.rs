//! Account-message projection: which accounts were involved in which
//! messages.
//!
//! The exemplar of the fan-out pattern shared by several projections: every
//! message event yields exactly one view row, its involved-account set is
//! deduplicated in first-seen order, and two counters advance once per
//! distinct account (all-types and per-type). Row writes, counter bumps, and
//! the checkpoint advance share one storage transaction.

pub mod memory;
pub mod view;

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use chainview_core::address::account_address_from_validator_address;
use chainview_core::error::ProjectionError;
use chainview_core::event::BLOCK_CREATED;
use chainview_core::messages::{MsgPayload, MSG_TYPES};
use chainview_core::{Event, Projection};

use view::{AccountMessageRecord, AccountMessageRow, AccountMessageStore, AccountMessageStoreTx as _};

/// Checkpoint key of this projection.
pub const PROJECTION_ID: &str = "AccountMessage";

pub struct AccountMessage<S> {
    store: S,
    account_address_prefix: String,
}

impl<S: AccountMessageStore> AccountMessage<S> {
    pub fn new(store: S, account_address_prefix: impl Into<String>) -> Self {
        Self {
            store,
            account_address_prefix: account_address_prefix.into(),
        }
    }

    fn convert(&self, validator_address: &str) -> Result<String, ProjectionError> {
        Ok(account_address_from_validator_address(
            &self.account_address_prefix,
            validator_address,
        )?)
    }

    /// The accounts a message involves. Total over the message catalog:
    /// adding a variant fails compilation until it is mapped here. `None`
    /// means the event yields no row at all (e.g. a packet receipt without
    /// token-transfer data), which is not an error.
    fn involved_accounts(
        &self,
        payload: &MsgPayload,
    ) -> Result<Option<Vec<String>>, ProjectionError> {
        let accounts = match payload {
            MsgPayload::Send(p) => vec![p.from_address.clone(), p.to_address.clone()],
            MsgPayload::MultiSend(p) => p
                .inputs
                .iter()
                .chain(&p.outputs)
                .map(|party| party.address.clone())
                .collect(),

            MsgPayload::SetWithdrawAddress(p) => {
                vec![p.delegator_address.clone(), p.withdraw_address.clone()]
            }
            MsgPayload::WithdrawDelegatorReward(p) => vec![p.delegator_address.clone()],
            MsgPayload::WithdrawValidatorCommission(p) => {
                vec![self.convert(&p.validator_address)?]
            }
            MsgPayload::FundCommunityPool(p) => vec![p.depositor.clone()],

            MsgPayload::SubmitParamChangeProposal(p) => vec![p.proposer.clone()],
            MsgPayload::SubmitCommunityPoolSpendProposal(p) => vec![p.proposer.clone()],
            MsgPayload::SubmitSoftwareUpgradeProposal(p) => vec![p.proposer.clone()],
            MsgPayload::SubmitCancelSoftwareUpgradeProposal(p) => vec![p.proposer.clone()],
            MsgPayload::Deposit(p) => vec![p.depositor.clone()],
            MsgPayload::Vote(p) => vec![p.voter.clone()],

            MsgPayload::CreateValidator(p) => vec![p.delegator_address.clone()],
            MsgPayload::EditValidator(p) => vec![self.convert(&p.validator_address)?],
            MsgPayload::Delegate(p) => vec![p.delegator_address.clone()],
            MsgPayload::Undelegate(p) => vec![p.delegator_address.clone()],
            MsgPayload::BeginRedelegate(p) => vec![p.delegator_address.clone()],
            MsgPayload::Unjail(p) => vec![self.convert(&p.validator_addr)?],

            MsgPayload::NftIssueDenom(p) => vec![p.sender.clone()],
            MsgPayload::NftMint(p) => vec![p.sender.clone(), p.recipient.clone()],
            MsgPayload::NftTransfer(p) => vec![p.sender.clone(), p.recipient.clone()],
            MsgPayload::NftEdit(p) => vec![p.sender.clone()],
            MsgPayload::NftBurn(p) => vec![p.sender.clone()],

            MsgPayload::IbcCreateClient(p) => vec![p.signer.clone()],
            MsgPayload::IbcUpdateClient(p) => vec![p.signer.clone()],
            MsgPayload::IbcConnectionOpenInit(p) => vec![p.signer.clone()],
            MsgPayload::IbcConnectionOpenTry(p) => vec![p.signer.clone()],
            MsgPayload::IbcConnectionOpenAck(p) => vec![p.signer.clone()],
            MsgPayload::IbcConnectionOpenConfirm(p) => vec![p.signer.clone()],
            MsgPayload::IbcChannelOpenInit(p) => vec![p.signer.clone()],
            MsgPayload::IbcChannelOpenTry(p) => vec![p.signer.clone()],
            MsgPayload::IbcChannelOpenAck(p) => vec![p.signer.clone()],
            MsgPayload::IbcChannelOpenConfirm(p) => vec![p.signer.clone()],

            // A packet receipt involves the receiver only when the packet
            // carried decoded token-transfer data.
            MsgPayload::IbcRecvPacket(p) => {
                return Ok(p
                    .maybe_fungible_token_packet_data
                    .as_ref()
                    .map(|data| vec![data.receiver.clone()]))
            }
            MsgPayload::IbcAcknowledgement(p) => vec![p.signer.clone()],
            MsgPayload::IbcTransfer(p) => vec![p.sender.clone()],
            MsgPayload::IbcTimeout(p) => vec![p.signer.clone()],
            MsgPayload::IbcTimeoutOnClose(p) => vec![p.signer.clone()],
        };

        Ok(Some(accounts))
    }
}

#[async_trait]
impl<S: AccountMessageStore> Projection for AccountMessage<S> {
    fn id(&self) -> &str {
        PROJECTION_ID
    }

    fn events_to_listen(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(1 + MSG_TYPES.len());
        names.push(BLOCK_CREATED.to_string());
        names.extend(MSG_TYPES.iter().map(|t| format!("{t}Created")));
        names
    }

    async fn on_init(&self) -> Result<(), ProjectionError> {
        self.store.init().await?;
        Ok(())
    }

    async fn handle_events(&self, height: u64, events: &[Event]) -> Result<(), ProjectionError> {
        // Dropped without commit on any error path below → rollback.
        let mut tx = self.store.begin().await?;

        if height == 0 {
            tx.update_last_handled_height(PROJECTION_ID, height).await?;
            tx.commit().await?;
            return Ok(());
        }

        let (block_hash, block_time) = block_metadata(height, events)?;

        let mut records: Vec<AccountMessageRecord> = Vec::new();
        for event in events {
            let Event::Msg(msg) = event else { continue };
            let Some(accounts) = self.involved_accounts(&msg.payload)? else {
                continue;
            };
            records.push(AccountMessageRecord {
                row: AccountMessageRow {
                    block_height: height,
                    block_hash: block_hash.clone(),
                    block_time,
                    transaction_hash: msg.tx_hash.clone(),
                    success: msg.tx_success,
                    message_index: msg.msg_index,
                    message_type: msg.payload.msg_type().to_string(),
                    data: msg.to_json(),
                },
                accounts,
            });
        }

        for record in &records {
            let mut seen = HashSet::new();
            let mut deduplicated = Vec::with_capacity(record.accounts.len());
            for account in &record.accounts {
                if !seen.insert(account.as_str()) {
                    continue;
                }
                tx.increment_message_count(&format!("{account}:-"), 1).await?;
                tx.increment_message_count(
                    &format!("{account}:{}", record.row.message_type),
                    1,
                )
                .await?;
                deduplicated.push(account.clone());
            }
            tx.insert_message(&record.row, &deduplicated).await?;
        }

        tx.update_last_handled_height(PROJECTION_ID, height).await?;
        tx.commit().await?;

        tracing::debug!(height, rows = records.len(), "account messages applied");
        Ok(())
    }
}

/// Block hash and time from the batch's synthetic block-created event.
fn block_metadata(
    height: u64,
    events: &[Event],
) -> Result<(String, DateTime<Utc>), ProjectionError> {
    events
        .iter()
        .find_map(|event| match event {
            Event::BlockCreated(block) => Some((block.hash.clone(), block.time)),
            _ => None,
        })
        .ok_or(ProjectionError::MissingBlockCreated { height })
}

// ─── Tests ────────────────────────────────────────────────────────────────────
