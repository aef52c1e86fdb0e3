//! Host events the guard reacts to.
//!
//! These mirror what a game server reports for portal activity. Handlers
//! answer with an [`EventOutcome`]; cancelling is left to the host.
use portal_core::{ActorId, SpatialPoint};

/// Why the server is about to create a portal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CreateReason {
    /// A player lit an obsidian frame.
    Fire,
    /// The linked portal generated on the far side of a trip.
    NetherPair,
    EndPlatform,
    /// Any reason this crate does not know about.
    Other(String),
}

impl CreateReason {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Fire => "FIRE",
            Self::NetherPair => "NETHER_PAIR",
            Self::EndPlatform => "END_PLATFORM",
            Self::Other(raw) => raw,
        }
    }

    /// Paired portals are generated by the server itself and always pass.
    pub fn is_exempt(&self) -> bool {
        matches!(self, Self::NetherPair)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PortalCreateEvent {
    pub world: String,
    pub reason: CreateReason,
    /// Portal blocks in the order the server lists them.
    pub blocks: Vec<SpatialPoint>,
}

impl PortalCreateEvent {
    pub fn new(world: impl Into<String>, reason: CreateReason, blocks: Vec<SpatialPoint>) -> Self {
        Self {
            world: world.into(),
            reason,
            blocks,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerPortalEvent {
    pub player: ActorId,
    /// World the player is leaving.
    pub world: String,
    pub from: SpatialPoint,
}

impl PlayerPortalEvent {
    pub fn new(player: ActorId, world: impl Into<String>, from: SpatialPoint) -> Self {
        Self {
            player,
            world: world.into(),
            from,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventOutcome {
    Proceed,
    Cancelled,
}

impl EventOutcome {
    pub fn is_cancelled(self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
