//! Global defaults and per-world overrides.
//!
//! Values here are plain data. [`SettingsStore`] owns the current snapshot and
//! swaps it wholesale; the resolver reads it.
mod store;

pub use store::{SettingsSnapshot, SettingsStore};

use crate::config::GuardConfig;

/// Runtime classification of a world.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum DimensionKind {
    Overworld,
    Nether,
    TheEnd,
}

impl DimensionKind {
    /// End worlds are never subject to admission checks.
    pub const fn is_exempt(self) -> bool {
        matches!(self, Self::TheEnd)
    }
}

/// The `type` field of a world override.
///
/// `Auto` defers to the world's runtime kind at query time; the stored value
/// is never rewritten with the resolved kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DimensionSetting {
    #[default]
    Auto,
    Fixed(DimensionKind),
}

impl DimensionSetting {
    pub const AUTO: &'static str = "AUTO";

    /// Reads a stored `type` value. Anything that is not a dimension name,
    /// case-insensitively, is treated as `AUTO`.
    pub fn parse(raw: &str) -> Self {
        raw.parse::<DimensionKind>()
            .map(Self::Fixed)
            .unwrap_or(Self::Auto)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => Self::AUTO,
            Self::Fixed(DimensionKind::Overworld) => "OVERWORLD",
            Self::Fixed(DimensionKind::Nether) => "NETHER",
            Self::Fixed(DimensionKind::TheEnd) => "THE_END",
        }
    }

    pub fn resolve(self, runtime: DimensionKind) -> DimensionKind {
        match self {
            Self::Auto => runtime,
            Self::Fixed(kind) => kind,
        }
    }
}

/// A radius field of a world override.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RadiusSetting {
    /// The literal `default`: use the global value.
    #[default]
    Default,
    Blocks(i32),
    /// Text that is neither `default` nor an integer. Kept verbatim so the
    /// world table round-trips, and resolved like `Default`.
    Unparsed(String),
}

impl RadiusSetting {
    pub const DEFAULT: &'static str = "default";

    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(Self::DEFAULT) {
            return Self::Default;
        }
        match raw.parse::<i32>() {
            Ok(blocks) => Self::Blocks(blocks),
            Err(_) => Self::Unparsed(raw.to_owned()),
        }
    }

    /// Returns the configured block count, or `global` when this field defers.
    pub fn or_global(&self, global: i32) -> i32 {
        match self {
            Self::Blocks(blocks) => *blocks,
            Self::Default | Self::Unparsed(_) => global,
        }
    }
}

/// Global nether radius: explicit, or derived from the overworld radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NetherRadius {
    #[default]
    Derived,
    Blocks(i32),
}

/// Server-wide settings. Replaced as a whole on reload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlobalSettings {
    pub default_radius: i32,
    pub nether: NetherRadius,
    /// When set, travel through portals is never blocked, whatever the zone.
    pub allow_travel_in_zone: bool,
}

impl GlobalSettings {
    pub fn new(default_radius: i32) -> Self {
        Self {
            default_radius,
            nether: NetherRadius::Derived,
            allow_travel_in_zone: false,
        }
    }

    pub fn with_nether_radius(mut self, nether_radius: i32) -> Self {
        self.nether = NetherRadius::Blocks(nether_radius);
        self
    }

    pub fn with_travel_allowed(mut self, allowed: bool) -> Self {
        self.allow_travel_in_zone = allowed;
        self
    }

    pub fn nether_radius(&self) -> i32 {
        match self.nether {
            NetherRadius::Blocks(blocks) => blocks,
            NetherRadius::Derived => GuardConfig::derived_nether_radius(self.default_radius),
        }
    }

    /// Global radius for an effective dimension. End worlds use the
    /// overworld value.
    pub fn radius_for(&self, kind: DimensionKind) -> i32 {
        match kind {
            DimensionKind::Nether => self.nether_radius(),
            DimensionKind::Overworld | DimensionKind::TheEnd => self.default_radius,
        }
    }
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self::new(GuardConfig::DEFAULT_RADIUS)
    }
}

/// Per-world entry of the world table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WorldOverride {
    pub dimension: DimensionSetting,
    pub radius: RadiusSetting,
    pub nether_radius: RadiusSetting,
}

impl WorldOverride {
    pub fn new(
        dimension: DimensionSetting,
        radius: RadiusSetting,
        nether_radius: RadiusSetting,
    ) -> Self {
        Self {
            dimension,
            radius,
            nether_radius,
        }
    }

    /// Override that pins the world to a fixed kind and keeps global radii.
    pub fn fixed(kind: DimensionKind) -> Self {
        Self {
            dimension: DimensionSetting::Fixed(kind),
            ..Self::default()
        }
    }

    pub fn with_radius(mut self, radius: RadiusSetting) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_nether_radius(mut self, nether_radius: RadiusSetting) -> Self {
        self.nether_radius = nether_radius;
        self
    }

    /// Field that applies to an effective dimension.
    pub fn field_for(&self, kind: DimensionKind) -> &RadiusSetting {
        match kind {
            DimensionKind::Nether => &self.nether_radius,
            DimensionKind::Overworld | DimensionKind::TheEnd => &self.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_nether_radius_follows_default() {
        assert_eq!(GlobalSettings::new(100).nether_radius(), 14);
        assert_eq!(GlobalSettings::new(0).nether_radius(), 2);
        assert_eq!(GlobalSettings::new(7).nether_radius(), 2);
        assert_eq!(GlobalSettings::new(-8).nether_radius(), 1);
    }

    #[test]
    fn explicit_nether_radius_wins() {
        let settings = GlobalSettings::new(100).with_nether_radius(40);
        assert_eq!(settings.nether_radius(), 40);
        assert_eq!(settings.radius_for(DimensionKind::Nether), 40);
        assert_eq!(settings.radius_for(DimensionKind::TheEnd), 100);
    }

    #[test]
    fn dimension_setting_parses_case_insensitively() {
        assert_eq!(
            DimensionSetting::parse("nether"),
            DimensionSetting::Fixed(DimensionKind::Nether)
        );
        assert_eq!(
            DimensionSetting::parse("The_End"),
            DimensionSetting::Fixed(DimensionKind::TheEnd)
        );
        assert_eq!(DimensionSetting::parse("AUTO"), DimensionSetting::Auto);
        assert_eq!(DimensionSetting::parse("sky"), DimensionSetting::Auto);
        assert_eq!(DimensionSetting::parse(""), DimensionSetting::Auto);
    }

    #[test]
    fn dimension_setting_is_not_trimmed() {
        assert_eq!(DimensionSetting::parse(" NETHER"), DimensionSetting::Auto);
        assert_eq!(DimensionSetting::parse("nether\n"), DimensionSetting::Auto);
    }

    #[test]
    fn dimension_setting_round_trips_as_text() {
        for raw in ["AUTO", "OVERWORLD", "NETHER", "THE_END"] {
            assert_eq!(DimensionSetting::parse(raw).as_str(), raw);
        }
    }

    #[test]
    fn radius_setting_coerces_without_failing() {
        assert_eq!(RadiusSetting::parse("default"), RadiusSetting::Default);
        assert_eq!(RadiusSetting::parse("DEFAULT"), RadiusSetting::Default);
        assert_eq!(RadiusSetting::parse("250"), RadiusSetting::Blocks(250));
        assert_eq!(RadiusSetting::parse("-3"), RadiusSetting::Blocks(-3));
        assert_eq!(
            RadiusSetting::parse("lots"),
            RadiusSetting::Unparsed("lots".into())
        );
        assert_eq!(RadiusSetting::parse("lots").or_global(90), 90);
        assert_eq!(RadiusSetting::parse("12.5").or_global(90), 90);
    }

    #[test]
    fn override_field_selection() {
        let o = WorldOverride::default()
            .with_radius(RadiusSetting::Blocks(10))
            .with_nether_radius(RadiusSetting::Blocks(3));
        assert_eq!(o.field_for(DimensionKind::Overworld), &RadiusSetting::Blocks(10));
        assert_eq!(o.field_for(DimensionKind::TheEnd), &RadiusSetting::Blocks(10));
        assert_eq!(o.field_for(DimensionKind::Nether), &RadiusSetting::Blocks(3));
    }
}
