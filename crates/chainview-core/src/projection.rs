//! The projection contract.
//!
//! A projection owns its view tables and one checkpoint row, and nothing
//! else. The external dispatcher calls `handle_events` once per height, in
//! height order, never concurrently for the same projection, and never for a
//! height at or below the projection's checkpoint.

use async_trait::async_trait;

use crate::error::ProjectionError;
use crate::event::Event;

/// A read model fed by the event stream.
#[async_trait]
pub trait Projection: Send + Sync {
    /// Stable projection name; keys the checkpoint row.
    fn id(&self) -> &str;

    /// Event names this projection consumes. The dispatcher uses this to
    /// decide whether to forward a height's batch at all; the projection
    /// still receives the entire batch and filters by type internally.
    fn events_to_listen(&self) -> Vec<String>;

    /// Idempotent one-time setup (table creation). Safe on every start.
    async fn on_init(&self) -> Result<(), ProjectionError>;

    /// Apply the full event batch of `height` and advance the checkpoint,
    /// atomically. On error nothing is visible and the same height must be
    /// retried; a committed height must never be resubmitted.
    async fn handle_events(&self, height: u64, events: &[Event]) -> Result<(), ProjectionError>;
}
