use crate::furniture::HitPoints;

/// Furniture configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FurnitureConfig {
    /// Hit points given to furniture whose template does not declare any.
    pub default_hit_points: HitPoints,
}

impl FurnitureConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of furniture pieces stacked on a single tile.
    pub const MAX_OCCUPANTS_PER_TILE: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HIT_POINTS: HitPoints = 1;

    pub fn new() -> Self {
        Self {
            default_hit_points: Self::DEFAULT_HIT_POINTS,
        }
    }

    pub fn with_default_hit_points(default_hit_points: HitPoints) -> Self {
        Self { default_hit_points }
    }
}

impl Default for FurnitureConfig {
    fn default() -> Self {
        Self::new()
    }
}
