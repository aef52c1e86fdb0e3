//! Loaded worlds served through [`portal_core::WorldOracle`].
use std::collections::BTreeMap;

use parking_lot::RwLock;
use portal_core::{DimensionKind, SpatialPoint, WorldOracle};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldInfo {
    pub kind: DimensionKind,
    pub spawn: SpatialPoint,
}

impl WorldInfo {
    pub const fn new(kind: DimensionKind, spawn: SpatialPoint) -> Self {
        Self { kind, spawn }
    }
}

/// WorldOracle backed by a mutable in-memory table.
///
/// Unknown worlds report as an overworld spawning at the origin.
#[derive(Debug, Default)]
pub struct WorldOracleImpl {
    worlds: RwLock<BTreeMap<String, WorldInfo>>,
}

impl WorldOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three worlds a fresh server starts with, all spawning at the origin.
    pub fn vanilla() -> Self {
        let oracle = Self::new();
        oracle.load_world("world", WorldInfo::new(DimensionKind::Overworld, SpatialPoint::ORIGIN));
        oracle.load_world(
            "world_nether",
            WorldInfo::new(DimensionKind::Nether, SpatialPoint::ORIGIN),
        );
        oracle.load_world(
            "world_the_end",
            WorldInfo::new(DimensionKind::TheEnd, SpatialPoint::ORIGIN),
        );
        oracle
    }

    pub fn load_world(&self, name: impl Into<String>, info: WorldInfo) {
        self.worlds.write().insert(name.into(), info);
    }

    pub fn unload_world(&self, name: &str) -> Option<WorldInfo> {
        self.worlds.write().remove(name)
    }

    pub fn set_spawn(&self, name: &str, spawn: SpatialPoint) {
        if let Some(info) = self.worlds.write().get_mut(name) {
            info.spawn = spawn;
        }
    }

    fn info(&self, name: &str) -> WorldInfo {
        self.worlds
            .read()
            .get(name)
            .copied()
            .unwrap_or(WorldInfo::new(DimensionKind::Overworld, SpatialPoint::ORIGIN))
    }
}

impl WorldOracle for WorldOracleImpl {
    fn world_names(&self) -> Vec<String> {
        self.worlds.read().keys().cloned().collect()
    }

    fn dimension_kind(&self, world: &str) -> DimensionKind {
        self.info(world).kind
    }

    fn spawn_point(&self, world: &str) -> SpatialPoint {
        self.info(world).spawn
    }
}
