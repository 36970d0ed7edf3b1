//! chainview-parser — turns raw blocks into ordered command sequences.
//!
//! The parser owns the message catalog's wire side: protobuf type tags,
//! typed parameter decoding (via the serde hooks in `chainview_core::wire`),
//! governance content dispatch, and validator-address validation. Everything
//! it emits is a `chainview_core::Command` in the exact (transaction,
//! message-index) order the block produced.

pub mod error;
pub mod parser;

pub use error::{DecodeError, ParseError};
pub use parser::{parse_block, type_url, ParserConfig, UnknownMessagePolicy};
