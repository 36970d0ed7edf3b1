//! Projection registry — an explicit, statically built catalog.
//!
//! Built once at startup from the deployment's enabled projections and passed
//! by value into the dispatcher. There is no global mutable registry.

use std::sync::Arc;

use crate::projection::Projection;

pub struct ProjectionRegistry {
    projections: Vec<Arc<dyn Projection>>,
}

impl ProjectionRegistry {
    pub fn new(projections: Vec<Arc<dyn Projection>>) -> Self {
        Self { projections }
    }

    pub fn len(&self) -> usize {
        self.projections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projections.is_empty()
    }

    /// Look up a projection by its id.
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Projection>> {
        self.projections.iter().find(|p| p.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Projection>> {
        self.projections.iter()
    }

    /// Projections subscribed to `event_name`.
    pub fn listeners_of(&self, event_name: &str) -> Vec<&Arc<dyn Projection>> {
        self.projections
            .iter()
            .filter(|p| p.events_to_listen().iter().any(|n| n == event_name))
            .collect()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
