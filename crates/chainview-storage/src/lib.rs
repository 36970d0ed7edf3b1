//! chainview-storage — durable backends for projection stores.
//!
//! PostgreSQL is the production backend; the in-memory store used by tests
//! lives next to its trait in `chainview-projection`.

pub mod postgres;

pub use postgres::PgAccountMessageStore;
