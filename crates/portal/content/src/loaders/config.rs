//! Global configuration loader.

use std::path::Path;

use portal_core::{GlobalSettings, GuardConfig};
use serde::Deserialize;
use toml::Value;

use crate::language::Language;
use crate::loaders::{LoadResult, init_file, read_file};

/// Everything `config.toml` carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PluginConfig {
    pub settings: GlobalSettings,
    pub language: Language,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            settings: GlobalSettings::default(),
            language: Language::En,
        }
    }
}

/// Raw file layout. Every field is loosely typed so that a wrong value type
/// falls back to its default instead of failing the whole file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
struct ConfigToml {
    language: Option<Value>,
    block_distance: Option<Value>,
    nether_block_distance: Option<Value>,
    allow_portal_travel_in_restricted_zone: Option<Value>,
}

/// Loader for the global configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Commented default written on first run.
    pub const TEMPLATE: &'static str = include_str!("../../templates/config.toml");

    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to `config.toml`
    pub fn load(path: &Path) -> LoadResult<PluginConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
    }

    /// Like [`load`](Self::load), but writes the default template first when
    /// the file does not exist.
    pub fn load_or_init(path: &Path) -> LoadResult<PluginConfig> {
        init_file(path, Self::TEMPLATE)?;
        Self::load(path)
    }

    pub fn parse(content: &str) -> LoadResult<PluginConfig> {
        let raw: ConfigToml = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let language = match &raw.language {
            Some(Value::String(code)) => Language::from_config(code),
            _ => Language::En,
        };

        let default_radius = raw
            .block_distance
            .as_ref()
            .and_then(number_as_i32)
            .unwrap_or(GuardConfig::DEFAULT_RADIUS);

        let mut settings = GlobalSettings::new(default_radius);

        // Only a whole number counts as an explicit nether radius; anything
        // else, including "default", derives it.
        if let Some(Value::Integer(blocks)) = raw.nether_block_distance
            && let Ok(blocks) = i32::try_from(blocks)
        {
            settings = settings.with_nether_radius(blocks);
        }

        if let Some(Value::Boolean(allowed)) = raw.allow_portal_travel_in_restricted_zone {
            settings = settings.with_travel_allowed(allowed);
        }

        Ok(PluginConfig { settings, language })
    }
}

/// Numeric values truncate to `i32`; strings and other types are ignored.
fn number_as_i32(value: &Value) -> Option<i32> {
    match value {
        Value::Integer(n) => i32::try_from(*n).ok(),
        Value::Float(f) if f.is_finite() => Some(*f as i32),
        _ => None,
    }
}
