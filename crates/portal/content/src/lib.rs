//! Configuration files and language resources.
//!
//! This crate turns the on-disk files of a guard installation into
//! `portal-core` values:
//! - Global settings (`config.toml`)
//! - Per-world overrides (`world.toml`), read and written back
//! - Message catalogs (`lang/<code>.toml`), embedded with optional disk overrides
//!
//! Content never reaches the decision logic directly; the runtime loads it and
//! swaps it into the settings store.

pub mod language;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use language::{Language, format_message};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, MessageCatalog, PluginConfig, WorldsLoader};
