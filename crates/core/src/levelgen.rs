//! Procedural arena generation split into coherent submodules.

pub mod config;
pub mod model;
pub mod random;

mod generator;
mod geometry;
mod platforms;
mod spawn_points;
mod weapons;

pub use config::{
    BUILTIN_PRESET_NAMES, ConfigError, GenerationConfig, SeedSetting, builtin_preset,
};
pub use generator::LayoutGenerator;
pub use model::{GenerationStats, LevelLayout, Platform, PlatformKind, WeaponSpawn};
pub use platforms::PlatformSet;
pub use random::RandomSource;
pub use spawn_points::{SpawnCriteria, SpawnPointFilter, filter_spawn_points};
pub use weapons::WeaponSpawnSampler;

/// Validates `config` and runs one generation with its seed setting.
pub fn generate(config: &GenerationConfig) -> Result<LevelLayout, ConfigError> {
    Ok(LayoutGenerator::new(config.clone())?.generate())
}
