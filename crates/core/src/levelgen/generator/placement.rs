//! Density-driven random placement of normal platforms.

use log::{debug, trace};

use super::super::config::GenerationConfig;
use super::super::model::{Platform, PlatformKind};
use super::super::platforms::PlatformSet;
use super::super::random::RandomSource;

/// Columns kept free next to each side wall.
const WALL_MARGIN: i32 = 5;
/// Rows kept free under the ceiling.
const CEILING_MARGIN: i32 = 5;
/// Headroom above the floor, on top of the jump height.
const FLOOR_CLEARANCE: i32 = 2;
const HEIGHT_REROLL_PERCENT: u32 = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct PlacementTally {
    pub(super) target_tiles: i64,
    pub(super) placed_tiles: i64,
    pub(super) attempts: usize,
    pub(super) placed: usize,
}

/// Inclusive band the height cursor lives in.
fn height_band(config: &GenerationConfig) -> (i32, i32) {
    let low = config.jump_height + FLOOR_CLEARANCE;
    let high = (config.level_height - CEILING_MARGIN).max(low);
    (low, high)
}

/// Places platforms until the tile budget is met or the attempt cap runs
/// out. Failed attempts only count against the cap.
pub(super) fn place_platforms(
    platforms: &mut PlatformSet,
    config: &GenerationConfig,
    rng: &mut RandomSource,
) -> PlacementTally {
    let mut tally = PlacementTally { target_tiles: config.target_tiles(), ..Default::default() };
    let (low, high) = height_band(config);
    let reroll_high = (config.level_height / 2).max(low);
    let mut height_cursor = low;

    while tally.placed_tiles < tally.target_tiles && tally.attempts < config.max_placement_attempts
    {
        tally.attempts += 1;

        let length = rng.next_int(config.min_platform_length, config.max_platform_length + 1);
        let x_limit = config.level_width - length - WALL_MARGIN;
        if x_limit <= WALL_MARGIN {
            trace!("attempt {}: no room for length {length}", tally.attempts);
            continue;
        }
        let x = rng.next_int(WALL_MARGIN, x_limit);

        let delta = rng.next_int(-config.max_height_variation, config.max_height_variation + 1);
        height_cursor = (height_cursor + delta).clamp(low, high);
        let y = height_cursor;

        if !platforms.is_valid_placement(x, y, length, config.min_platform_spacing) {
            trace!("attempt {}: ({x}, {y}) length {length} too close", tally.attempts);
            continue;
        }

        platforms.push(Platform::new(x, y, length, PlatformKind::Normal));
        tally.placed += 1;
        tally.placed_tiles += i64::from(length);

        if rng.chance(HEIGHT_REROLL_PERCENT) {
            height_cursor = rng.next_int(low, reroll_high + 1);
        }
    }

    debug!(
        "placement: {} platforms, {}/{} tiles after {} attempts",
        tally.placed, tally.placed_tiles, tally.target_tiles, tally.attempts
    );
    tally
}
