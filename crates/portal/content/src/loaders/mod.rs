//! Content loaders for reading guard data from files.
//!
//! This module provides loaders that convert TOML files into `portal-core`
//! settings and message catalogs. Missing config files are created from the
//! embedded templates on first load.

pub mod config;
pub mod lang;
pub mod worlds;

pub use config::{ConfigLoader, PluginConfig};
pub use lang::MessageCatalog;
pub use worlds::WorldsLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Writes `contents` to `path`, creating parent directories as needed.
pub(crate) fn write_file(path: &Path, contents: &str) -> LoadResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
        })?;
    }
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
}

/// Writes `template` to `path` unless the file already exists. Returns
/// whether the file was created.
pub(crate) fn init_file(path: &Path, template: &str) -> LoadResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    write_file(path, template)?;
    tracing::info!("Created default {}", path.display());
    Ok(true)
}
