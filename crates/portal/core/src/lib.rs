//! Spawn-area portal restriction rules.
//!
//! `portal-core` decides whether a portal may be created or used near a
//! world's spawn point. It owns the settings snapshot, resolves the effective
//! radius for a world, runs the planar zone test, and turns denials into
//! structured notices. Everything the host server knows (worlds, players,
//! permissions, chat) reaches the core through the traits in [`env`] or as
//! already-resolved request values; nothing here performs I/O.
//!
//! Modules are organized leaves first:
//! - [`settings`] global defaults, per-world overrides, and the swappable store
//! - [`resolver`] merges both into one radius per world
//! - [`zone`] the square spawn-zone predicate and proximity filters
//! - [`admission`] creation and travel decisions
//! - [`notify`] who hears about a denial, and with which message keys
pub mod admission;
pub mod config;
pub mod env;
pub mod notify;
pub mod resolver;
pub mod settings;
pub mod zone;

pub use admission::{
    AdmissionEngine, CreationRequest, Decision, Denial, DenialReason, NearbyPlayer, TravelRequest,
};
pub use config::GuardConfig;
pub use env::{ActorId, ActorOracle, ActorPresence, Capability, Env, MessageSink, WorldOracle};
pub use notify::{MessageArg, MessageKey, Notice, NotificationPolicy};
pub use resolver::DistanceResolver;
pub use settings::{
    DimensionKind, DimensionSetting, GlobalSettings, NetherRadius, RadiusSetting, SettingsSnapshot,
    SettingsStore, WorldOverride,
};
pub use zone::{Located, SpatialPoint, ZoneQuery, is_restricted, within_proximity};
