//! In-memory host implementations of the `portal-core` collaborator traits.
//!
//! These back the integration tests and the operator CLI. A real server
//! adapter implements the same traits over its own world and player APIs.
//! [`InMemoryHost`] bundles them so callers can build a [`portal_core::Env`]
//! on demand.
mod actors;
mod messages;
mod worlds;

use portal_core::Env;

pub use actors::ActorOracleImpl;
pub use messages::Outbox;
pub use worlds::{WorldInfo, WorldOracleImpl};

/// Owns one of each collaborator.
#[derive(Debug, Default)]
pub struct InMemoryHost {
    pub worlds: WorldOracleImpl,
    pub actors: ActorOracleImpl,
    pub outbox: Outbox,
}

impl InMemoryHost {
    pub fn new(worlds: WorldOracleImpl) -> Self {
        Self {
            worlds,
            actors: ActorOracleImpl::new(),
            outbox: Outbox::new(),
        }
    }

    /// Borrows the collaborators as an [`Env`].
    pub fn env(&self) -> Env<'_> {
        Env::new(&self.worlds, &self.actors, &self.outbox)
    }
}
