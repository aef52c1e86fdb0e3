//! Errors surfaced by the guard's file-backed operations.
//!
//! Decisions never fail; only loading and saving the data files can.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GuardError>;

#[derive(Debug, Error)]
pub enum GuardError {
    /// `config.toml` or `world.toml` could not be read or parsed. The
    /// previous settings stay in effect.
    #[error("failed to load guard data: {0:#}")]
    Load(anyhow::Error),

    /// The world table could not be written back.
    #[error("failed to save world table: {0:#}")]
    Persist(anyhow::Error),
}
