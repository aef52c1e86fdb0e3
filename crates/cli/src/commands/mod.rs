//! Command implementations for the operator CLI
//!
//! Each command is a separate module that implements its own CLI args and
//! execution logic. `resolve` and `check` only read the data directory;
//! `generate-world-config` writes it.

mod check;
mod generate;
mod resolve;

pub use check::Check;
pub use generate::GenerateWorldConfig;
pub use resolve::Resolve;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use portal_content::{ConfigLoader, PluginConfig, WorldsLoader};
use portal_core::SettingsSnapshot;
use portal_runtime::DataPaths;

/// Reads the settings without creating missing files. Absent files count as
/// defaults.
pub(crate) fn read_snapshot(data_dir: &Path) -> Result<SettingsSnapshot> {
    let paths = DataPaths::in_dir(data_dir);

    let plugin = if paths.config.exists() {
        ConfigLoader::load(&paths.config)
            .with_context(|| format!("Failed to load {}", paths.config.display()))?
    } else {
        tracing::warn!("{} not found, using defaults", paths.config.display());
        PluginConfig::default()
    };

    let overrides = if paths.worlds.exists() {
        WorldsLoader::load(&paths.worlds)
            .with_context(|| format!("Failed to load {}", paths.worlds.display()))?
    } else {
        BTreeMap::new()
    };

    Ok(SettingsSnapshot::new(plugin.settings, overrides))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_read_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = read_snapshot(dir.path()).unwrap();

        assert_eq!(snapshot.global().default_radius, 100);
        assert!(snapshot.overrides().is_empty());
        assert!(!dir.path().join(DataPaths::CONFIG_FILE).exists());
    }

    #[test]
    fn broken_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DataPaths::CONFIG_FILE), "block-distance = [").unwrap();

        assert!(read_snapshot(dir.path()).is_err());
    }
}
