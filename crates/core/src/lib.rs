pub mod levelgen;
pub mod preset;
pub mod types;
pub mod world;

pub use levelgen::{
    ConfigError, GenerationConfig, LayoutGenerator, LevelLayout, Platform, PlatformKind,
    RandomSource, SeedSetting, SpawnCriteria, SpawnPointFilter, WeaponSpawn, filter_spawn_points,
    generate,
};
pub use preset::{MemoryPresetStore, PresetStore};
pub use types::*;
pub use world::{GridToWorld, TileSink, UniformGrid, paint_layout};
