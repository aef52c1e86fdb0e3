/// Rule constants and tunable proximities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuardConfig {
    /// Square distance from the attempted block within which a player holding
    /// the bypass capability lets a restricted creation through.
    pub bypass_proximity: i32,
    /// Square distance from the offending block within which players are
    /// told about a denied creation.
    pub notify_proximity: i32,
}

impl GuardConfig {
    // ===== global defaults =====
    /// Radius used when `block-distance` is absent from the config.
    pub const DEFAULT_RADIUS: i32 = 100;
    /// Nether coordinates are scaled by 8 relative to the overworld.
    pub const NETHER_DIVISOR: i32 = 8;
    /// Added on top of the scaled radius when the nether radius is derived.
    pub const NETHER_OFFSET: i32 = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BYPASS_PROXIMITY: i32 = 5;
    pub const DEFAULT_NOTIFY_PROXIMITY: i32 = 10;

    pub fn new() -> Self {
        Self {
            bypass_proximity: Self::DEFAULT_BYPASS_PROXIMITY,
            notify_proximity: Self::DEFAULT_NOTIFY_PROXIMITY,
        }
    }

    pub fn with_proximities(bypass_proximity: i32, notify_proximity: i32) -> Self {
        Self {
            bypass_proximity,
            notify_proximity,
        }
    }

    /// Nether radius implied by an overworld radius: `floor(radius / 8) + 2`.
    pub const fn derived_nether_radius(default_radius: i32) -> i32 {
        default_radius.div_euclid(Self::NETHER_DIVISOR) + Self::NETHER_OFFSET
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_proximities_replace_defaults() {
        let config = GuardConfig::with_proximities(0, 3);
        assert_eq!(config.bypass_proximity, 0);
        assert_eq!(config.notify_proximity, 3);
        assert_ne!(config, GuardConfig::default());
        assert_eq!(
            GuardConfig::default(),
            GuardConfig::with_proximities(
                GuardConfig::DEFAULT_BYPASS_PROXIMITY,
                GuardConfig::DEFAULT_NOTIFY_PROXIMITY,
            )
        );
    }

    #[test]
    fn nether_radius_floors_negative_radii() {
        assert_eq!(GuardConfig::derived_nether_radius(100), 14);
        assert_eq!(GuardConfig::derived_nether_radius(7), 2);
        assert_eq!(GuardConfig::derived_nether_radius(-1), 1);
    }
}
