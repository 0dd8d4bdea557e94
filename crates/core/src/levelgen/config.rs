//! Generation parameters, built-in presets, and the validation boundary.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::random::entropy_seed;

pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 1000;
/// Upper bound for every cell-valued field.
pub const MAX_LEVEL_DIMENSION: i32 = 4096;
pub const MAX_WEAPON_SPAWNS: usize = 1024;
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSetting {
    Fixed(u64),
    Random,
}

impl SeedSetting {
    /// Resolves the seed for one run. `Random` consults the environment once.
    pub fn resolve(self) -> u64 {
        match self {
            Self::Fixed(seed) => seed,
            Self::Random => entropy_seed(),
        }
    }
}

/// Immutable parameter bundle for one generation run. Distances are in grid
/// cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub level_width: i32,
    pub level_height: i32,
    pub jump_height: i32,
    pub jump_distance: i32,
    pub min_platform_spacing: i32,
    pub min_platform_length: i32,
    pub max_platform_length: i32,
    /// Percentage of the grid the placement pass tries to cover.
    pub platform_density: u32,
    pub enforce_connectivity: bool,
    pub min_height_variation: i32,
    pub max_height_variation: i32,
    pub weapon_spawn_count: usize,
    pub min_weapon_distance: f32,
    pub allow_air_spawns: bool,
    pub air_spawn_max_height: i32,
    pub boundary_walls: bool,
    pub boundary_wall_height: i32,
    pub central_platform: bool,
    pub central_platform_size: i32,
    pub max_placement_attempts: usize,
    pub seed: SeedSetting,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            level_width: 100,
            level_height: 50,
            jump_height: 4,
            jump_distance: 6,
            min_platform_spacing: 3,
            min_platform_length: 3,
            max_platform_length: 8,
            platform_density: 15,
            enforce_connectivity: true,
            min_height_variation: 0,
            max_height_variation: 3,
            weapon_spawn_count: 6,
            min_weapon_distance: 8.0,
            allow_air_spawns: true,
            air_spawn_max_height: 4,
            boundary_walls: true,
            boundary_wall_height: 20,
            central_platform: true,
            central_platform_size: 12,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            seed: SeedSetting::Random,
        }
    }
}

impl GenerationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = SeedSetting::Fixed(seed);
        self
    }

    /// Small arena for two to four players.
    pub fn duel() -> Self {
        Self {
            level_width: 48,
            level_height: 28,
            jump_height: 4,
            jump_distance: 5,
            max_platform_length: 6,
            platform_density: 12,
            weapon_spawn_count: 3,
            min_weapon_distance: 10.0,
            air_spawn_max_height: 3,
            boundary_wall_height: 14,
            central_platform_size: 8,
            ..Self::default()
        }
    }

    /// Wide arena for large lobbies.
    pub fn skirmish() -> Self {
        Self {
            level_width: 140,
            level_height: 60,
            jump_distance: 7,
            max_platform_length: 10,
            platform_density: 18,
            max_height_variation: 4,
            weapon_spawn_count: 10,
            min_weapon_distance: 12.0,
            boundary_wall_height: 26,
            central_platform_size: 16,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("level_width", self.level_width),
            ("level_height", self.level_height),
            ("jump_height", self.jump_height),
            ("jump_distance", self.jump_distance),
            ("min_platform_spacing", self.min_platform_spacing),
            ("min_platform_length", self.min_platform_length),
            ("central_platform_size", self.central_platform_size),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::NotPositive { field, value: i64::from(value) });
            }
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::NotPositive { field: "max_placement_attempts", value: 0 });
        }

        let non_negative = [
            ("min_height_variation", self.min_height_variation),
            ("max_height_variation", self.max_height_variation),
            ("air_spawn_max_height", self.air_spawn_max_height),
            ("boundary_wall_height", self.boundary_wall_height),
        ];
        for (field, value) in non_negative {
            if value < 0 {
                return Err(ConfigError::Negative { field, value: i64::from(value) });
            }
        }

        let bounded = [
            ("level_width", self.level_width),
            ("level_height", self.level_height),
            ("jump_height", self.jump_height),
            ("jump_distance", self.jump_distance),
            ("min_platform_spacing", self.min_platform_spacing),
            ("min_platform_length", self.min_platform_length),
            ("max_platform_length", self.max_platform_length),
            ("min_height_variation", self.min_height_variation),
            ("max_height_variation", self.max_height_variation),
            ("air_spawn_max_height", self.air_spawn_max_height),
            ("boundary_wall_height", self.boundary_wall_height),
            ("central_platform_size", self.central_platform_size),
        ];
        for (field, value) in bounded {
            if value > MAX_LEVEL_DIMENSION {
                return Err(ConfigError::TooLarge {
                    field,
                    value: i64::from(value),
                    limit: i64::from(MAX_LEVEL_DIMENSION),
                });
            }
        }
        let counts = [
            ("weapon_spawn_count", self.weapon_spawn_count, MAX_WEAPON_SPAWNS),
            ("max_placement_attempts", self.max_placement_attempts, MAX_PLACEMENT_ATTEMPTS),
        ];
        for (field, value, limit) in counts {
            if value > limit {
                return Err(ConfigError::TooLarge {
                    field,
                    value: i64::try_from(value).unwrap_or(i64::MAX),
                    limit: i64::try_from(limit).unwrap_or(i64::MAX),
                });
            }
        }

        if self.min_platform_length > self.max_platform_length {
            return Err(ConfigError::InvertedRange {
                min_field: "min_platform_length",
                max_field: "max_platform_length",
                min: self.min_platform_length,
                max: self.max_platform_length,
            });
        }
        if self.min_height_variation > self.max_height_variation {
            return Err(ConfigError::InvertedRange {
                min_field: "min_height_variation",
                max_field: "max_height_variation",
                min: self.min_height_variation,
                max: self.max_height_variation,
            });
        }
        if self.max_platform_length > self.level_width {
            return Err(ConfigError::InvertedRange {
                min_field: "max_platform_length",
                max_field: "level_width",
                min: self.max_platform_length,
                max: self.level_width,
            });
        }
        if self.max_height_variation > self.level_height {
            return Err(ConfigError::InvertedRange {
                min_field: "max_height_variation",
                max_field: "level_height",
                min: self.max_height_variation,
                max: self.level_height,
            });
        }
        if self.platform_density > 100 {
            return Err(ConfigError::DensityOutOfRange(self.platform_density));
        }
        if !self.min_weapon_distance.is_finite() || self.min_weapon_distance < 0.0 {
            return Err(ConfigError::InvalidWeaponDistance(self.min_weapon_distance));
        }
        Ok(())
    }

    /// Tile budget the density pass aims for.
    pub fn target_tiles(&self) -> i64 {
        i64::from(self.level_width) * i64::from(self.level_height) * i64::from(self.platform_density)
            / 100
    }
}

pub const BUILTIN_PRESET_NAMES: [&str; 3] = ["default", "duel", "skirmish"];

pub fn builtin_preset(name: &str) -> Option<GenerationConfig> {
    match name {
        "default" => Some(GenerationConfig::default()),
        "duel" => Some(GenerationConfig::duel()),
        "skirmish" => Some(GenerationConfig::skirmish()),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NotPositive { field: &'static str, value: i64 },
    Negative { field: &'static str, value: i64 },
    TooLarge { field: &'static str, value: i64, limit: i64 },
    InvertedRange { min_field: &'static str, max_field: &'static str, min: i32, max: i32 },
    DensityOutOfRange(u32),
    InvalidWeaponDistance(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            Self::TooLarge { field, value, limit } => {
                write!(f, "{field} must be at most {limit}, got {value}")
            }
            Self::InvertedRange { min_field, max_field, min, max } => {
                write!(f, "{min_field} ({min}) must not exceed {max_field} ({max})")
            }
            Self::DensityOutOfRange(density) => {
                write!(f, "platform_density is a percentage, got {density}")
            }
            Self::InvalidWeaponDistance(distance) => {
                write!(f, "min_weapon_distance must be finite and non-negative, got {distance}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_presets_validate() {
        for name in BUILTIN_PRESET_NAMES {
            let config = builtin_preset(name).expect("builtin preset should exist");
            assert_eq!(config.validate(), Ok(()), "preset {name} should validate");
        }
        assert!(builtin_preset("nope").is_none());
    }

    #[test]
    fn rejects_inverted_platform_lengths() {
        let config =
            GenerationConfig { min_platform_length: 9, max_platform_length: 4, ..Default::default() };
        let err = config.validate().expect_err("inverted lengths should be rejected");
        assert!(matches!(err, ConfigError::InvertedRange { min_field: "min_platform_length", .. }));
        assert!(err.to_string().contains("must not exceed"));
    }

    #[test]
    fn rejects_inverted_height_variation() {
        let config =
            GenerationConfig { min_height_variation: 5, max_height_variation: 1, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { min_field: "min_height_variation", .. })
        ));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let config = GenerationConfig { level_width: 0, ..Default::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "level_width", value: 0 })
        );
    }

    #[test]
    fn rejects_density_above_one_hundred_and_bad_weapon_distance() {
        let dense = GenerationConfig { platform_density: 101, ..Default::default() };
        assert_eq!(dense.validate(), Err(ConfigError::DensityOutOfRange(101)));

        let nan = GenerationConfig { min_weapon_distance: f32::NAN, ..Default::default() };
        assert!(matches!(nan.validate(), Err(ConfigError::InvalidWeaponDistance(_))));
    }

    #[test]
    fn rejects_values_past_the_arithmetic_limits() {
        let long = GenerationConfig { max_platform_length: i32::MAX, ..GenerationConfig::duel() };
        assert!(matches!(
            long.validate(),
            Err(ConfigError::TooLarge { field: "max_platform_length", .. })
        ));

        let swing = GenerationConfig { max_height_variation: i32::MAX, ..GenerationConfig::duel() };
        assert!(matches!(
            swing.validate(),
            Err(ConfigError::TooLarge { field: "max_height_variation", .. })
        ));

        let armoury =
            GenerationConfig { weapon_spawn_count: usize::MAX / 10, ..GenerationConfig::duel() };
        let err = armoury.validate().expect_err("huge weapon count should be rejected");
        assert!(matches!(err, ConfigError::TooLarge { field: "weapon_spawn_count", .. }));
        assert!(err.to_string().contains("must be at most 1024"));
    }

    #[test]
    fn platforms_and_height_swings_must_fit_the_level() {
        let wide = GenerationConfig {
            level_width: 20,
            max_platform_length: 21,
            ..GenerationConfig::default()
        };
        assert!(matches!(
            wide.validate(),
            Err(ConfigError::InvertedRange { min_field: "max_platform_length", .. })
        ));

        let tall = GenerationConfig {
            level_height: 10,
            max_height_variation: 11,
            ..GenerationConfig::default()
        };
        assert!(matches!(
            tall.validate(),
            Err(ConfigError::InvertedRange { max_field: "level_height", .. })
        ));
    }

    #[test]
    fn zero_density_and_zero_weapons_are_legal() {
        let config =
            GenerationConfig { platform_density: 0, weapon_spawn_count: 0, ..Default::default() };
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.target_tiles(), 0);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: GenerationConfig =
            serde_json::from_str(r#"{ "level_width": 64, "seed": { "fixed": 42 } }"#)
                .expect("partial config should deserialize");
        assert_eq!(config.level_width, 64);
        assert_eq!(config.level_height, GenerationConfig::default().level_height);
        assert_eq!(config.seed, SeedSetting::Fixed(42));

        let random: GenerationConfig =
            serde_json::from_str(r#"{ "seed": "random" }"#).expect("random seed should parse");
        assert_eq!(random.seed, SeedSetting::Random);
    }

    #[test]
    fn target_tiles_uses_integer_percentage() {
        let config = GenerationConfig {
            level_width: 30,
            level_height: 10,
            platform_density: 15,
            ..Default::default()
        };
        assert_eq!(config.target_tiles(), 45);
    }
}
