//! Effective radius resolution.
//!
//! ```text
//! world override ── type ──► AUTO? ─ yes ─► runtime kind ─┐
//!                               └── no ──► declared kind ─┤
//!                                                         ▼
//!                              NETHER ─► nether-block-distance
//!                       OVERWORLD/END ─► block-distance
//!                                                         │
//!                          "default" / unparseable ─► global value
//! ```

use crate::settings::{DimensionKind, SettingsSnapshot, SettingsStore};

/// Merges global settings and the world's override into one radius.
#[derive(Clone, Copy, Debug)]
pub struct DistanceResolver<'a> {
    store: &'a SettingsStore,
}

impl<'a> DistanceResolver<'a> {
    pub fn new(store: &'a SettingsStore) -> Self {
        Self { store }
    }

    /// Radius of the restricted square for `world`, whose actual kind is
    /// `runtime_kind`. A world seen for the first time gets a default
    /// override inserted before resolution.
    pub fn resolve_radius(&self, world: &str, runtime_kind: DimensionKind) -> i32 {
        self.store.ensure_override(world);
        resolve_in(&self.store.snapshot(), world, runtime_kind)
    }
}

/// Resolves against a fixed snapshot. Worlds without an override resolve as
/// if they had the default one.
pub fn resolve_in(snapshot: &SettingsSnapshot, world: &str, runtime_kind: DimensionKind) -> i32 {
    let global = snapshot.global();
    match snapshot.override_for(world) {
        Some(entry) => {
            let kind = entry.dimension.resolve(runtime_kind);
            entry.field_for(kind).or_global(global.radius_for(kind))
        }
        None => global.radius_for(runtime_kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{DimensionSetting, GlobalSettings, RadiusSetting, WorldOverride};

    fn store(default_radius: i32) -> SettingsStore {
        SettingsStore::new(GlobalSettings::new(default_radius))
    }

    #[test]
    fn missing_override_is_created_and_uses_global() {
        let store = store(100);
        let resolver = DistanceResolver::new(&store);

        assert_eq!(resolver.resolve_radius("world", DimensionKind::Overworld), 100);
        assert!(store.contains("world"));
        assert_eq!(resolver.resolve_radius("world_nether", DimensionKind::Nether), 14);
    }

    #[test]
    fn auto_follows_runtime_kind() {
        let store = store(160);
        store.replace_override(
            "w",
            WorldOverride::default()
                .with_radius(RadiusSetting::Blocks(50))
                .with_nether_radius(RadiusSetting::Blocks(7)),
        );
        let resolver = DistanceResolver::new(&store);

        assert_eq!(resolver.resolve_radius("w", DimensionKind::Overworld), 50);
        assert_eq!(resolver.resolve_radius("w", DimensionKind::Nether), 7);
        assert_eq!(resolver.resolve_radius("w", DimensionKind::TheEnd), 50);
    }

    #[test]
    fn declared_kind_overrides_runtime_kind() {
        let store = store(100);
        store.replace_override("flat_nether", WorldOverride::fixed(DimensionKind::Nether));
        store.replace_override("odd_end", WorldOverride::fixed(DimensionKind::TheEnd));
        let resolver = DistanceResolver::new(&store);

        assert_eq!(resolver.resolve_radius("flat_nether", DimensionKind::Overworld), 14);
        assert_eq!(resolver.resolve_radius("odd_end", DimensionKind::Nether), 100);
    }

    #[test]
    fn unparseable_field_falls_back_to_global() {
        let store = SettingsStore::new(GlobalSettings::new(100).with_nether_radius(30));
        store.replace_override(
            "w",
            WorldOverride::new(
                DimensionSetting::Auto,
                RadiusSetting::parse("ten"),
                RadiusSetting::parse("1e3"),
            ),
        );
        let resolver = DistanceResolver::new(&store);

        assert_eq!(resolver.resolve_radius("w", DimensionKind::Overworld), 100);
        assert_eq!(resolver.resolve_radius("w", DimensionKind::Nether), 30);
    }

    #[test]
    fn negative_radius_passes_through() {
        let store = store(100);
        store.replace_override(
            "w",
            WorldOverride::default().with_radius(RadiusSetting::Blocks(-5)),
        );
        assert_eq!(
            DistanceResolver::new(&store).resolve_radius("w", DimensionKind::Overworld),
            -5
        );
    }

    #[test]
    fn resolve_in_does_not_insert() {
        let store = store(100);
        let snapshot = store.snapshot();
        assert_eq!(resolve_in(&snapshot, "ghost", DimensionKind::Nether), 14);
        assert!(!store.contains("ghost"));
    }
}
