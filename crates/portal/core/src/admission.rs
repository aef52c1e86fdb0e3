//! Admission decisions for portal creation and portal travel.
//!
//! Both entry points are request → decision with no retained state. Callers
//! are responsible for skipping End worlds before calling in.

use crate::config::GuardConfig;
use crate::resolver::DistanceResolver;
use crate::settings::{DimensionKind, SettingsStore};
use crate::zone::{Located, SpatialPoint, is_restricted, within_proximity};

/// A player near an attempted portal, with its bypass permission already
/// checked by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearbyPlayer {
    pub location: SpatialPoint,
    pub can_bypass: bool,
}

impl NearbyPlayer {
    pub const fn new(location: SpatialPoint, can_bypass: bool) -> Self {
        Self {
            location,
            can_bypass,
        }
    }
}

impl Located for NearbyPlayer {
    fn location(&self) -> SpatialPoint {
        self.location
    }
}

/// A portal frame about to be lit.
#[derive(Clone, Copy, Debug)]
pub struct CreationRequest<'a> {
    pub world: &'a str,
    pub dimension: DimensionKind,
    pub spawn: SpatialPoint,
    /// Portal blocks in the order the server reported them.
    pub blocks: &'a [SpatialPoint],
    pub nearby_players: &'a [NearbyPlayer],
}

/// A player stepping through a portal.
#[derive(Clone, Copy, Debug)]
pub struct TravelRequest<'a> {
    pub world: &'a str,
    pub dimension: DimensionKind,
    pub spawn: SpatialPoint,
    pub from: SpatialPoint,
    pub allow_travel_override: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DenialReason {
    /// Portal creation inside the spawn zone with no bypass holder nearby.
    CreationInZone,
    /// Portal travel starting inside the spawn zone.
    TravelInZone,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Denial {
    pub reason: DenialReason,
    /// Effective radius that was applied.
    pub radius: i32,
    pub world: String,
    /// The offending block, or the traveler's departure point.
    pub at: SpatialPoint,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "decision", rename_all = "snake_case"))]
pub enum Decision {
    Allowed,
    Denied(Denial),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied(_))
    }

    pub fn denial(&self) -> Option<&Denial> {
        match self {
            Self::Allowed => None,
            Self::Denied(denial) => Some(denial),
        }
    }
}

/// Combines radius resolution, the zone test, and the bypass rule.
#[derive(Clone, Copy, Debug)]
pub struct AdmissionEngine<'a> {
    resolver: DistanceResolver<'a>,
    config: GuardConfig,
}

impl<'a> AdmissionEngine<'a> {
    pub fn new(store: &'a SettingsStore, config: GuardConfig) -> Self {
        Self {
            resolver: DistanceResolver::new(store),
            config,
        }
    }

    /// Decides a portal creation.
    ///
    /// Only the first restricted block is considered: a bypass holder within
    /// reach of it admits the whole portal, otherwise the portal is denied at
    /// that block. Later blocks are never inspected.
    pub fn evaluate_creation(&self, request: &CreationRequest<'_>) -> Decision {
        let radius = self
            .resolver
            .resolve_radius(request.world, request.dimension);

        let Some(block) = request
            .blocks
            .iter()
            .copied()
            .find(|block| is_restricted(request.spawn, *block, radius))
        else {
            return Decision::Allowed;
        };

        if self.has_bypass_nearby(request.nearby_players, block) {
            return Decision::Allowed;
        }

        Decision::Denied(Denial {
            reason: DenialReason::CreationInZone,
            radius,
            world: request.world.to_owned(),
            at: block,
        })
    }

    /// Decides a portal trip. The global travel switch admits unconditionally.
    pub fn evaluate_travel(&self, request: &TravelRequest<'_>) -> Decision {
        if request.allow_travel_override {
            return Decision::Allowed;
        }

        let radius = self
            .resolver
            .resolve_radius(request.world, request.dimension);

        if is_restricted(request.spawn, request.from, radius) {
            Decision::Denied(Denial {
                reason: DenialReason::TravelInZone,
                radius,
                world: request.world.to_owned(),
                at: request.from,
            })
        } else {
            Decision::Allowed
        }
    }

    fn has_bypass_nearby(&self, players: &[NearbyPlayer], block: SpatialPoint) -> bool {
        within_proximity(players, block, self.config.bypass_proximity).any(|p| p.can_bypass)
    }
}
