//! Traits describing what the host server provides.
//!
//! Oracles expose worlds, online players, and permission checks; the sink
//! delivers rendered text. The [`Env`] aggregate bundles them so event
//! handlers can reach everything without coupling to a concrete server.
//! The decision functions themselves never call these traits: handlers
//! resolve the values first and pass them in.
use std::fmt;

use crate::settings::DimensionKind;
use crate::zone::{Located, SpatialPoint};

/// Stable identifier of a connected actor (player or console).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u64);

impl ActorId {
    /// Reserved identifier for the server console.
    pub const CONSOLE: Self = Self(0);

    #[inline]
    pub const fn is_console(self) -> bool {
        self.0 == Self::CONSOLE.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_console() {
            f.write_str("console")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

/// Named permission nodes the guard queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum Capability {
    /// Lets a player standing next to a portal create it inside the zone.
    #[strum(serialize = "portalblocker.create")]
    CreateBypass,
    /// Required for `reload` and `generateworldconfig`.
    #[strum(serialize = "portalblocker.admin")]
    Admin,
}

/// An online actor and where it stands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorPresence {
    pub actor: ActorId,
    pub location: SpatialPoint,
}

impl ActorPresence {
    pub const fn new(actor: ActorId, location: SpatialPoint) -> Self {
        Self { actor, location }
    }
}

impl Located for ActorPresence {
    fn location(&self) -> SpatialPoint {
        self.location
    }
}

/// World list, kinds, and spawn points.
pub trait WorldOracle: Send + Sync {
    /// Every world currently loaded by the server.
    fn world_names(&self) -> Vec<String>;

    /// Actual kind of a loaded world.
    fn dimension_kind(&self, world: &str) -> DimensionKind;

    fn spawn_point(&self, world: &str) -> SpatialPoint;
}

/// Online players and their permissions.
pub trait ActorOracle: Send + Sync {
    fn online_actors_in_world(&self, world: &str) -> Vec<ActorPresence>;

    fn has_capability(&self, actor: ActorId, capability: Capability) -> bool;
}

/// Fire-and-forget chat delivery.
pub trait MessageSink: Send + Sync {
    fn deliver(&self, recipient: ActorId, text: &str);
}

/// Aggregates the host collaborators an event handler needs.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    worlds: &'a dyn WorldOracle,
    actors: &'a dyn ActorOracle,
    messages: &'a dyn MessageSink,
}

impl<'a> Env<'a> {
    pub fn new(
        worlds: &'a dyn WorldOracle,
        actors: &'a dyn ActorOracle,
        messages: &'a dyn MessageSink,
    ) -> Self {
        Self {
            worlds,
            actors,
            messages,
        }
    }

    pub fn worlds(&self) -> &'a dyn WorldOracle {
        self.worlds
    }

    pub fn actors(&self) -> &'a dyn ActorOracle {
        self.actors
    }

    pub fn messages(&self) -> &'a dyn MessageSink {
        self.messages
    }
}

impl fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Env").finish_non_exhaustive()
    }
}
