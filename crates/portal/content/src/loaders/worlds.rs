//! Per-world override table loader.
//!
//! File format:
//! ```toml
//! [worlds.world]
//! type = "AUTO"
//! block-distance = "default"
//! nether-block-distance = 20
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use portal_core::{DimensionSetting, RadiusSetting, WorldOverride};
use serde::{Deserialize, Serialize};
use toml::Value;

use crate::loaders::{LoadResult, init_file, read_file, write_file};

/// Read side. Entries stay loose so one malformed world does not fail the file.
#[derive(Debug, Default, Deserialize)]
struct WorldsFile {
    #[serde(default)]
    worlds: BTreeMap<String, Value>,
}

#[derive(Debug, Default, Serialize)]
struct WorldsToml {
    worlds: BTreeMap<String, WorldEntryToml>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct WorldEntryToml {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    block_distance: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nether_block_distance: Option<Value>,
}

impl WorldEntryToml {
    fn into_override(self) -> WorldOverride {
        let dimension = match self.kind {
            Some(Value::String(raw)) => DimensionSetting::parse(&raw),
            _ => DimensionSetting::Auto,
        };
        WorldOverride::new(
            dimension,
            radius_from_value(self.block_distance),
            radius_from_value(self.nether_block_distance),
        )
    }

    fn from_override(entry: &WorldOverride) -> Self {
        Self {
            kind: Some(Value::String(entry.dimension.as_str().to_owned())),
            block_distance: Some(radius_to_value(&entry.radius)),
            nether_block_distance: Some(radius_to_value(&entry.nether_radius)),
        }
    }
}

fn radius_from_value(value: Option<Value>) -> RadiusSetting {
    match value {
        None => RadiusSetting::Default,
        Some(Value::Integer(n)) => i32::try_from(n)
            .map(RadiusSetting::Blocks)
            .unwrap_or_else(|_| RadiusSetting::Unparsed(n.to_string())),
        Some(Value::String(raw)) => RadiusSetting::parse(&raw),
        Some(other) => RadiusSetting::Unparsed(other.to_string()),
    }
}

fn radius_to_value(setting: &RadiusSetting) -> Value {
    match setting {
        RadiusSetting::Default => Value::String(RadiusSetting::DEFAULT.to_owned()),
        RadiusSetting::Blocks(blocks) => Value::Integer(i64::from(*blocks)),
        RadiusSetting::Unparsed(raw) => Value::String(raw.clone()),
    }
}

/// Non-table entries are dropped so the ensure pass writes them back fresh.
fn entry_from_value(name: &str, value: Value) -> Option<WorldEntryToml> {
    match value {
        table @ Value::Table(_) => match table.try_into::<WorldEntryToml>() {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Ignoring world entry {}: {}", name, e);
                None
            }
        },
        other => {
            tracing::warn!(
                "Ignoring world entry {}: expected a table, found {}",
                name,
                other.type_str()
            );
            None
        }
    }
}

/// Loader and writer for `world.toml`.
pub struct WorldsLoader;

impl WorldsLoader {
    /// Commented default written on first run.
    pub const TEMPLATE: &'static str = include_str!("../../templates/world.toml");

    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, WorldOverride>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
    }

    /// Like [`load`](Self::load), but writes the default template first when
    /// the file does not exist.
    pub fn load_or_init(path: &Path) -> LoadResult<BTreeMap<String, WorldOverride>> {
        init_file(path, Self::TEMPLATE)?;
        Self::load(path)
    }

    pub fn parse(content: &str) -> LoadResult<BTreeMap<String, WorldOverride>> {
        let raw: WorldsFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse world TOML: {}", e))?;

        Ok(raw
            .worlds
            .into_iter()
            .filter_map(|(name, value)| {
                let entry = entry_from_value(&name, value)?;
                Some((name, entry.into_override()))
            })
            .collect())
    }

    pub fn render(overrides: &BTreeMap<String, WorldOverride>) -> LoadResult<String> {
        let raw = WorldsToml {
            worlds: overrides
                .iter()
                .map(|(name, entry)| (name.clone(), WorldEntryToml::from_override(entry)))
                .collect(),
        };
        toml::to_string(&raw).map_err(|e| anyhow::anyhow!("Failed to render world TOML: {}", e))
    }

    /// Writes the table to `path`. The template comments are not preserved.
    pub fn save(path: &Path, overrides: &BTreeMap<String, WorldOverride>) -> LoadResult<()> {
        let content = Self::render(overrides)?;
        write_file(path, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::DimensionKind;

    #[test]
    fn template_has_no_worlds() {
        assert!(WorldsLoader::parse(WorldsLoader::TEMPLATE).unwrap().is_empty());
    }

    #[test]
    fn mixed_value_types_are_coerced() {
        let table = WorldsLoader::parse(
            r#"
            [worlds.world]
            type = "AUTO"
            block-distance = "default"
            nether-block-distance = "default"

            [worlds.mining]
            type = "nether"
            block-distance = 64
            nether-block-distance = "24"

            [worlds.broken]
            type = 3
            block-distance = "far"
            nether-block-distance = 1.5
            "#,
        )
        .unwrap();

        assert_eq!(table["world"], WorldOverride::default());
        assert_eq!(
            table["mining"],
            WorldOverride::new(
                DimensionSetting::Fixed(DimensionKind::Nether),
                RadiusSetting::Blocks(64),
                RadiusSetting::Blocks(24),
            )
        );
        assert_eq!(table["broken"].dimension, DimensionSetting::Auto);
        assert_eq!(table["broken"].radius, RadiusSetting::Unparsed("far".into()));
        assert_eq!(table["broken"].nether_radius, RadiusSetting::Unparsed("1.5".into()));
    }

    #[test]
    fn missing_fields_default() {
        let table = WorldsLoader::parse("[worlds.bare]\n").unwrap();
        assert_eq!(table["bare"], WorldOverride::default());
    }

    #[test]
    fn non_table_entry_is_treated_as_absent() {
        let table = WorldsLoader::parse(
            "[worlds]\nlobby = \"default\"\n\n[worlds.world]\nblock-distance = 20\n",
        )
        .unwrap();

        assert!(!table.contains_key("lobby"));
        assert_eq!(table["world"].radius, RadiusSetting::Blocks(20));
    }

    #[test]
    fn save_then_load_keeps_unparsed_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plugin").join("world.toml");

        let mut table = BTreeMap::new();
        table.insert(
            "world the end".to_owned(),
            WorldOverride::fixed(DimensionKind::TheEnd)
                .with_radius(RadiusSetting::Unparsed("ten".into())),
        );
        table.insert("world".to_owned(), WorldOverride::default());

        WorldsLoader::save(&path, &table).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[worlds.world]"));
        assert!(content.contains("type = \"THE_END\""));

        assert_eq!(WorldsLoader::load(&path).unwrap(), table);
    }

    #[test]
    fn load_or_init_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.toml");

        assert!(WorldsLoader::load_or_init(&path).unwrap().is_empty());
        assert!(path.exists());
    }
}
