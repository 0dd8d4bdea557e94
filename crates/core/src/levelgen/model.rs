//! Public data models for generated arenas, platforms, and weapon markers.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{GridPos, WorldPos};
use crate::world::GridToWorld;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlatformKind {
    Normal,
    Central,
    Bridge,
    /// Floor or wall cell. Never takes part in overlap checks.
    Boundary,
}

/// Horizontal run of `length` cells starting at `(origin_x, origin_y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    origin_x: i32,
    origin_y: i32,
    length: i32,
    kind: PlatformKind,
}

impl Platform {
    pub fn new(origin_x: i32, origin_y: i32, length: i32, kind: PlatformKind) -> Self {
        debug_assert!(length > 0, "platform length must be positive");
        Self { origin_x, origin_y, length, kind }
    }

    pub fn origin_x(&self) -> i32 {
        self.origin_x
    }

    pub fn origin_y(&self) -> i32 {
        self.origin_y
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn kind(&self) -> PlatformKind {
        self.kind
    }

    /// First column past the platform.
    pub fn end_x(&self) -> i32 {
        self.origin_x + self.length
    }

    pub fn is_boundary(&self) -> bool {
        self.kind == PlatformKind::Boundary
    }

    pub fn cells(&self) -> impl Iterator<Item = GridPos> + use<> {
        let y = self.origin_y;
        (self.origin_x..self.end_x()).map(move |x| GridPos::new(x, y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeaponSpawn {
    pub x: i32,
    pub y: i32,
}

impl WeaponSpawn {
    pub fn cell(self) -> GridPos {
        GridPos::new(self.x, self.y)
    }
}

/// Tallies callers use to decide whether a layout came out sparse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub target_tiles: i64,
    pub placed_tiles: i64,
    pub placement_attempts: usize,
    pub platforms_placed: usize,
    pub bridges_inserted: usize,
    pub weapons_requested: usize,
}

impl GenerationStats {
    pub fn reached_density_target(&self) -> bool {
        self.placed_tiles >= self.target_tiles
    }
}

/// Result of one generation run. Read-only to every consumer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    seed: u64,
    width: i32,
    height: i32,
    platforms: Vec<Platform>,
    weapon_spawns: Vec<WeaponSpawn>,
    stats: GenerationStats,
}

impl LevelLayout {
    pub(crate) fn new(
        seed: u64,
        width: i32,
        height: i32,
        platforms: Vec<Platform>,
        weapon_spawns: Vec<WeaponSpawn>,
        stats: GenerationStats,
    ) -> Self {
        Self { seed, width, height, platforms, weapon_spawns, stats }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn weapon_spawns(&self) -> &[WeaponSpawn] {
        &self.weapon_spawns
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    pub fn weapon_spawns_world(&self, grid: &impl GridToWorld) -> Vec<WorldPos> {
        self.weapon_spawns.iter().map(|spawn| grid.cell_to_world(spawn.cell())).collect()
    }

    pub fn count_of(&self, kind: PlatformKind) -> usize {
        self.platforms.iter().filter(|platform| platform.kind == kind).count()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.seed.to_le_bytes());
        bytes.extend(self.width.to_le_bytes());
        bytes.extend(self.height.to_le_bytes());

        bytes.extend((self.platforms.len() as u32).to_le_bytes());
        for platform in &self.platforms {
            bytes.extend(platform.origin_x.to_le_bytes());
            bytes.extend(platform.origin_y.to_le_bytes());
            bytes.extend(platform.length.to_le_bytes());
            bytes.push(match platform.kind {
                PlatformKind::Normal => 0,
                PlatformKind::Central => 1,
                PlatformKind::Bridge => 2,
                PlatformKind::Boundary => 3,
            });
        }

        bytes.extend((self.weapon_spawns.len() as u32).to_le_bytes());
        for spawn in &self.weapon_spawns {
            bytes.extend(spawn.x.to_le_bytes());
            bytes.extend(spawn.y.to_le_bytes());
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
