//! chainview-projection — read models over the event stream.
//!
//! Each projection owns its view tables plus one checkpoint row and applies
//! a height's full event batch in a single storage transaction. The
//! account-message projection is the exemplar of the fan-out pattern
//! (one event → one row + per-account counters); further projections follow
//! the same shape against their own stores.

pub mod account_message;

pub use account_message::memory::MemoryAccountMessageStore;
pub use account_message::view::{
    AccountMessageRecord, AccountMessageRow, AccountMessageStore, AccountMessageStoreTx,
};
pub use account_message::AccountMessage;
