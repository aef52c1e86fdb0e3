//! Online players served through [`portal_core::ActorOracle`].
use std::collections::{BTreeMap, HashSet};

use parking_lot::RwLock;
use portal_core::{ActorId, ActorOracle, ActorPresence, Capability, SpatialPoint};

#[derive(Clone, Debug, PartialEq)]
struct ActorRecord {
    world: String,
    location: SpatialPoint,
    capabilities: HashSet<Capability>,
}

/// ActorOracle over a table of connected players.
///
/// The console holds every capability.
#[derive(Debug, Default)]
pub struct ActorOracleImpl {
    actors: RwLock<BTreeMap<ActorId, ActorRecord>>,
}

impl ActorOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects `actor` at `location` in `world`, keeping any capabilities it
    /// already had.
    pub fn join(&self, actor: ActorId, world: impl Into<String>, location: SpatialPoint) {
        let world = world.into();
        let mut actors = self.actors.write();
        match actors.get_mut(&actor) {
            Some(record) => {
                record.world = world;
                record.location = location;
            }
            None => {
                actors.insert(
                    actor,
                    ActorRecord {
                        world,
                        location,
                        capabilities: HashSet::new(),
                    },
                );
            }
        }
    }

    pub fn leave(&self, actor: ActorId) {
        self.actors.write().remove(&actor);
    }

    pub fn grant(&self, actor: ActorId, capability: Capability) {
        if let Some(record) = self.actors.write().get_mut(&actor) {
            record.capabilities.insert(capability);
        }
    }

    pub fn revoke(&self, actor: ActorId, capability: Capability) {
        if let Some(record) = self.actors.write().get_mut(&actor) {
            record.capabilities.remove(&capability);
        }
    }
}

impl ActorOracle for ActorOracleImpl {
    fn online_actors_in_world(&self, world: &str) -> Vec<ActorPresence> {
        self.actors
            .read()
            .iter()
            .filter(|(_, record)| record.world == world)
            .map(|(actor, record)| ActorPresence::new(*actor, record.location))
            .collect()
    }

    fn has_capability(&self, actor: ActorId, capability: Capability) -> bool {
        if actor.is_console() {
            return true;
        }
        self.actors
            .read()
            .get(&actor)
            .is_some_and(|record| record.capabilities.contains(&capability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejoin_keeps_capabilities_until_revoked() {
        let oracle = ActorOracleImpl::new();
        let actor = ActorId(3);
        oracle.join(actor, "world", SpatialPoint::ORIGIN);
        oracle.grant(actor, Capability::CreateBypass);
        oracle.join(actor, "world_nether", SpatialPoint::new(1.0, 1.0));

        assert!(oracle.has_capability(actor, Capability::CreateBypass));
        assert!(!oracle.has_capability(actor, Capability::Admin));

        oracle.revoke(actor, Capability::CreateBypass);
        assert!(!oracle.has_capability(actor, Capability::CreateBypass));
        assert!(oracle.online_actors_in_world("world").is_empty());
        assert_eq!(oracle.online_actors_in_world("world_nether").len(), 1);
    }

    #[test]
    fn leave_forgets_actor() {
        let oracle = ActorOracleImpl::new();
        let actor = ActorId(3);
        oracle.join(actor, "world", SpatialPoint::ORIGIN);
        oracle.grant(actor, Capability::Admin);
        oracle.leave(actor);

        assert!(oracle.online_actors_in_world("world").is_empty());
        assert!(!oracle.has_capability(actor, Capability::Admin));
        assert!(oracle.has_capability(ActorId::CONSOLE, Capability::Admin));
    }
}
