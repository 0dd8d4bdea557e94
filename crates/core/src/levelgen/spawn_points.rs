//! Player spawn-point selection over a finished layout.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::types::{GridPos, WorldPos};
use crate::world::GridToWorld;

use super::geometry::{is_far_from_all, span_within};
use super::model::{LevelLayout, Platform};
use super::random::RandomSource;

const ATTEMPTS_PER_SPAWN: usize = 50;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnCriteria {
    pub count: usize,
    pub min_spacing: f32,
    /// Platforms shorter than this are skipped.
    pub minimum_platform_size: Option<i32>,
    /// Cells every accepted platform keeps from each level edge.
    pub boundary_buffer: Option<i32>,
}

impl Default for SpawnCriteria {
    fn default() -> Self {
        Self { count: 4, min_spacing: 10.0, minimum_platform_size: Some(3), boundary_buffer: Some(2) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpawnPointFilter {
    criteria: SpawnCriteria,
}

impl SpawnPointFilter {
    pub fn new(criteria: SpawnCriteria) -> Self {
        Self { criteria }
    }

    pub fn eligible_platforms<'a>(&self, layout: &'a LevelLayout) -> Vec<&'a Platform> {
        layout.platforms().iter().filter(|platform| self.accepts(layout, platform)).collect()
    }

    fn accepts(&self, layout: &LevelLayout, platform: &Platform) -> bool {
        if platform.is_boundary() {
            return false;
        }
        if let Some(minimum) = self.criteria.minimum_platform_size
            && platform.length() < minimum
        {
            return false;
        }
        if let Some(buffer) = self.criteria.boundary_buffer {
            let horizontal = span_within(
                platform.origin_x(),
                platform.length(),
                buffer,
                layout.width() - buffer,
            );
            let vertical = platform.origin_y() >= buffer
                && platform.origin_y() <= layout.height() - 1 - buffer;
            if !(horizontal && vertical) {
                return false;
            }
        }
        true
    }

    /// Grid cells one row above eligible platforms, pairwise at least
    /// `min_spacing` apart. Returns fewer than requested when the
    /// `count * 50` attempt budget runs out.
    pub fn select(&self, layout: &LevelLayout, rng: &mut RandomSource) -> Vec<GridPos> {
        let eligible = self.eligible_platforms(layout);
        if eligible.is_empty() {
            debug!("spawn points: no platform passes the filter");
            return Vec::new();
        }

        let max_attempts = self.criteria.count.saturating_mul(ATTEMPTS_PER_SPAWN);
        let mut accepted = Vec::new();
        let mut attempts = 0;
        while accepted.len() < self.criteria.count && attempts < max_attempts {
            attempts += 1;
            let platform = eligible[rng.next_index(eligible.len())];
            let candidate = GridPos::new(
                platform.origin_x() + interior_offset(platform, rng),
                platform.origin_y() + 1,
            );
            if is_far_from_all(candidate, &accepted, self.criteria.min_spacing) {
                accepted.push(candidate);
            }
        }

        debug!(
            "spawn points: {}/{} from {} platforms after {attempts} attempts",
            accepted.len(),
            self.criteria.count,
            eligible.len()
        );
        accepted
    }
}

/// Random column strictly inside the platform; short platforms use the middle.
fn interior_offset(platform: &Platform, rng: &mut RandomSource) -> i32 {
    if platform.length() > 2 {
        rng.next_int(1, platform.length() - 1)
    } else {
        platform.length() / 2
    }
}

pub fn filter_spawn_points(
    layout: &LevelLayout,
    criteria: &SpawnCriteria,
    rng: &mut RandomSource,
    grid: &impl GridToWorld,
) -> Vec<WorldPos> {
    SpawnPointFilter::new(criteria.clone())
        .select(layout, rng)
        .into_iter()
        .map(|cell| grid.cell_to_world(cell))
        .collect()
}
