//! Swappable settings snapshot.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{GlobalSettings, WorldOverride};

/// Immutable view of every setting at one point in time.
///
/// A decision holds one snapshot for its whole duration, so a concurrent
/// reload can never show it half-old, half-new values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsSnapshot {
    global: GlobalSettings,
    overrides: BTreeMap<String, WorldOverride>,
}

impl SettingsSnapshot {
    pub fn new(global: GlobalSettings, overrides: BTreeMap<String, WorldOverride>) -> Self {
        Self { global, overrides }
    }

    pub fn global(&self) -> &GlobalSettings {
        &self.global
    }

    pub fn override_for(&self, world: &str) -> Option<&WorldOverride> {
        self.overrides.get(world)
    }

    pub fn overrides(&self) -> &BTreeMap<String, WorldOverride> {
        &self.overrides
    }
}

/// Owner of the global settings and the world override table.
///
/// Readers clone the current `Arc`; writers build a new snapshot and replace
/// the pointer under the write lock. Every mutation is therefore visible all
/// at once, and only to reads that start after it.
#[derive(Debug, Default)]
pub struct SettingsStore {
    current: RwLock<Arc<SettingsSnapshot>>,
}

impl SettingsStore {
    pub fn new(global: GlobalSettings) -> Self {
        Self::from_snapshot(SettingsSnapshot::new(global, BTreeMap::new()))
    }

    pub fn from_snapshot(snapshot: SettingsSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Current snapshot. Cheap: one `Arc` clone under a read lock.
    pub fn snapshot(&self) -> Arc<SettingsSnapshot> {
        Arc::clone(&self.current.read())
    }

    pub fn global_settings(&self) -> GlobalSettings {
        self.current.read().global
    }

    /// Override for `world`, or the value [`ensure_override`](Self::ensure_override)
    /// would insert when none exists yet.
    pub fn get_override(&self, world: &str) -> WorldOverride {
        self.current
            .read()
            .override_for(world)
            .cloned()
            .unwrap_or_default()
    }

    pub fn contains(&self, world: &str) -> bool {
        self.current.read().overrides.contains_key(world)
    }

    /// Inserts an `AUTO`/`default`/`default` override for `world` if it has
    /// none. Returns whether an insertion happened.
    pub fn ensure_override(&self, world: &str) -> bool {
        if self.contains(world) {
            return false;
        }
        let mut current = self.current.write();
        if current.overrides.contains_key(world) {
            return false;
        }
        let mut next = SettingsSnapshot::clone(&current);
        next.overrides
            .insert(world.to_owned(), WorldOverride::default());
        *current = Arc::new(next);
        true
    }

    /// Runs [`ensure_override`](Self::ensure_override) for each world and
    /// returns the names that were added, in input order.
    pub fn ensure_overrides<'a, I>(&self, worlds: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        worlds
            .into_iter()
            .filter(|world| self.ensure_override(world))
            .map(str::to_owned)
            .collect()
    }

    pub fn replace_global_settings(&self, global: GlobalSettings) {
        let mut current = self.current.write();
        let mut next = SettingsSnapshot::clone(&current);
        next.global = global;
        *current = Arc::new(next);
    }

    pub fn replace_override(&self, world: &str, entry: WorldOverride) {
        let mut current = self.current.write();
        let mut next = SettingsSnapshot::clone(&current);
        next.overrides.insert(world.to_owned(), entry);
        *current = Arc::new(next);
    }

    /// Swaps global settings and the whole override table in one step.
    pub fn replace_all(&self, global: GlobalSettings, overrides: BTreeMap<String, WorldOverride>) {
        *self.current.write() = Arc::new(SettingsSnapshot::new(global, overrides));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{DimensionKind, RadiusSetting};

    #[test]
    fn ensure_override_is_idempotent() {
        let store = SettingsStore::new(GlobalSettings::default());
        assert!(store.ensure_override("world"));
        assert!(!store.ensure_override("world"));
        assert_eq!(store.get_override("world"), WorldOverride::default());
    }

    #[test]
    fn ensure_override_keeps_existing_entry() {
        let store = SettingsStore::new(GlobalSettings::default());
        let pinned = WorldOverride::fixed(DimensionKind::Nether);
        store.replace_override("caves", pinned.clone());

        assert!(!store.ensure_override("caves"));
        assert_eq!(store.get_override("caves"), pinned);
    }

    #[test]
    fn ensure_overrides_reports_only_new_worlds() {
        let store = SettingsStore::new(GlobalSettings::default());
        store.ensure_override("world");

        let added = store.ensure_overrides(["world", "world_nether", "world_the_end"]);
        assert_eq!(added, vec!["world_nether", "world_the_end"]);
    }

    #[test]
    fn old_snapshot_is_unaffected_by_swaps() {
        let store = SettingsStore::new(GlobalSettings::new(100));
        store.replace_override(
            "world",
            WorldOverride::default().with_radius(RadiusSetting::Blocks(20)),
        );
        let before = store.snapshot();

        store.replace_global_settings(GlobalSettings::new(300));
        store.replace_override("world", WorldOverride::default());

        assert_eq!(before.global().default_radius, 100);
        assert_eq!(
            before.override_for("world").map(|o| &o.radius),
            Some(&RadiusSetting::Blocks(20))
        );
        assert_eq!(store.global_settings().default_radius, 300);
        assert_eq!(store.get_override("world").radius, RadiusSetting::Default);
    }

    #[test]
    fn replace_all_drops_previous_overrides() {
        let store = SettingsStore::new(GlobalSettings::default());
        store.ensure_override("old");

        let mut table = BTreeMap::new();
        table.insert("new".to_owned(), WorldOverride::fixed(DimensionKind::Overworld));
        store.replace_all(GlobalSettings::new(64), table);

        assert!(!store.contains("old"));
        assert!(store.contains("new"));
        assert_eq!(store.global_settings().default_radius, 64);
    }
}
