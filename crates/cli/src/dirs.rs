//! Data directory discovery.
//!
//! Resolution order: explicit `--data-dir`, then `PORTAL_GUARD_DATA_DIR`
//! (a `.env` file is honored), then the platform data directory.

use std::env;
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "PORTAL_GUARD_DATA_DIR";

/// Picks the data directory for this invocation.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(default_data_dir)
}

/// Get the platform-specific data directory for the guard
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/portal-guard`
/// - Linux: `~/.local/share/portal-guard` (or `$XDG_DATA_HOME/portal-guard`)
/// - Windows: `%APPDATA%\portal-guard`
/// - Fallback: `./portal-guard`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "portal-guard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./portal-guard"))
}
