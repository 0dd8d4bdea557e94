//! Rejection sampling of weapon-spawn markers over a finished platform list.

use log::debug;

use crate::types::GridPos;

use super::config::GenerationConfig;
use super::geometry::is_far_from_all;
use super::model::{Platform, WeaponSpawn};
use super::random::RandomSource;

const ATTEMPTS_PER_WEAPON: usize = 50;
const MIN_AIR_OFFSET: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeaponSpawnSampler {
    count: usize,
    min_distance: f32,
    air_spawn_max_height: Option<i32>,
}

impl WeaponSpawnSampler {
    pub fn new(count: usize, min_distance: f32) -> Self {
        Self { count, min_distance, air_spawn_max_height: None }
    }

    /// Lets half of the draws float `2..=max_height` cells above the surface.
    pub fn with_air_spawns(mut self, max_height: i32) -> Self {
        self.air_spawn_max_height = Some(max_height);
        self
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        let sampler = Self::new(config.weapon_spawn_count, config.min_weapon_distance);
        if config.allow_air_spawns {
            sampler.with_air_spawns(config.air_spawn_max_height)
        } else {
            sampler
        }
    }

    /// Up to `count` markers, pairwise at least `min_distance` apart. Gives
    /// up after `count * 50` draws.
    pub fn sample(&self, platforms: &[Platform], rng: &mut RandomSource) -> Vec<WeaponSpawn> {
        let eligible: Vec<&Platform> = platforms
            .iter()
            .filter(|platform| !platform.is_boundary() && platform.length() > 2)
            .collect();
        if eligible.is_empty() || self.count == 0 {
            return Vec::new();
        }

        let max_attempts = self.count.saturating_mul(ATTEMPTS_PER_WEAPON);
        let mut accepted: Vec<GridPos> = Vec::new();
        let mut attempts = 0;
        while accepted.len() < self.count && attempts < max_attempts {
            attempts += 1;
            let platform = eligible[rng.next_index(eligible.len())];
            let candidate = self.candidate_on(platform, rng);
            if is_far_from_all(candidate, &accepted, self.min_distance) {
                accepted.push(candidate);
            }
        }

        debug!("weapons: {}/{} placed after {attempts} attempts", accepted.len(), self.count);
        accepted.into_iter().map(|cell| WeaponSpawn { x: cell.x, y: cell.y }).collect()
    }

    fn candidate_on(&self, platform: &Platform, rng: &mut RandomSource) -> GridPos {
        let in_air = match self.air_spawn_max_height {
            Some(_) => rng.coin_flip(),
            None => false,
        };
        let x = platform.origin_x() + rng.next_int(1, platform.length() - 1);
        let y = match self.air_spawn_max_height {
            Some(max_height) if in_air => {
                platform.origin_y() + rng.next_int(MIN_AIR_OFFSET, max_height.max(MIN_AIR_OFFSET) + 1)
            }
            _ => platform.origin_y() + 1,
        };
        GridPos::new(x, y)
    }
}
