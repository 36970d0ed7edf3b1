//! chainview-core — domain model for the event-sourced indexing pipeline.
//!
//! # Architecture
//!
//! ```text
//! Block + BlockResults ──parser──► Vec<Command> ──exec──► Vec<Event>
//!                                                            │
//!                              dispatcher (external) ────────┤ per-height batch
//!                                                            ▼
//!                                         Projection::handle_events
//!                                         (views + checkpoint, one tx)
//! ```
//!
//! This crate holds the types every stage shares: raw chain data, the closed
//! message catalog, commands, events, and the projection contract. Decoding
//! lives in `chainview-parser`, projections in `chainview-projection`.

pub mod address;
pub mod command;
pub mod error;
pub mod event;
pub mod messages;
pub mod projection;
pub mod registry;
pub mod types;
pub mod wire;

pub use command::{Command, MsgCommand};
pub use error::{AddressError, ProjectionError, StorageError};
pub use event::{BlockCreatedEvent, Event, MsgEvent, BLOCK_CREATED};
pub use messages::MsgPayload;
pub use projection::Projection;
pub use registry::ProjectionRegistry;
pub use types::{Block, BlockResults, Message, Transaction, TxResult};
