//! Host-facing glue for the portal guard.
//!
//! This crate wires `portal-core` decisions to the data files from
//! `portal-content` and to whatever server embeds it. A host creates one
//! [`PortalGuard`] on enable, forwards portal events and the admin command to
//! it, and calls [`PortalGuard::disable`] on shutdown.
//!
//! Modules are organized by responsibility:
//! - [`guard`] owns settings and messages and handles events
//! - [`events`] the portal events a host reports
//! - [`commands`] the `portalblocker` admin command and completion
//! - [`oracle`] in-memory collaborator implementations
//! - [`error`] load and persistence failures
pub mod commands;
pub mod error;
pub mod events;
pub mod guard;
pub mod oracle;

pub use commands::{AdminCommand, COMMAND_NAME, CommandOutcome, complete, dispatch};
pub use error::{GuardError, Result};
pub use events::{CreateReason, EventOutcome, PlayerPortalEvent, PortalCreateEvent};
pub use guard::{DataPaths, PortalGuard};
pub use oracle::{ActorOracleImpl, InMemoryHost, Outbox, WorldInfo, WorldOracleImpl};
