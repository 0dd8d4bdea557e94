//! Single-pass bridge insertion between neighbouring platforms.
//!
//! Only the adjacent pairs of the initial x-sorted order are examined. A
//! bridge that would collide is skipped, and reachability is not re-checked
//! after insertion, so isolated platforms can survive pathological configs.

use log::{debug, trace};

use super::super::config::GenerationConfig;
use super::super::geometry::{horizontal_gap, vertical_gap};
use super::super::model::{Platform, PlatformKind};
use super::super::platforms::PlatformSet;
use super::super::random::RandomSource;

/// Extra cells a bridge may have over the minimum platform length (exclusive).
const BRIDGE_EXTRA_LENGTH: i32 = 3;

/// Returns the number of bridges inserted. Leaves `platforms` sorted by
/// origin column.
pub(super) fn repair_connectivity(
    platforms: &mut PlatformSet,
    config: &GenerationConfig,
    rng: &mut RandomSource,
) -> usize {
    platforms.sort_by_origin();
    let sorted: Vec<Platform> = platforms.as_slice().to_vec();

    let mut inserted = 0;
    for pair in sorted.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if current.is_boundary() || next.is_boundary() {
            continue;
        }

        let gap_x = horizontal_gap(current, next);
        let gap_y = vertical_gap(current, next);
        if gap_x <= config.jump_distance && gap_y <= config.jump_height {
            continue;
        }

        let length = rng.next_int(
            config.min_platform_length,
            config.min_platform_length + BRIDGE_EXTRA_LENGTH,
        );
        let mid_x = current.end_x() + gap_x / 2;
        let x = (mid_x - length / 2).clamp(0, (config.level_width - length).max(0));
        let y = (current.origin_y() + next.origin_y()) / 2;

        if platforms.is_valid_placement(x, y, length, config.min_platform_spacing) {
            platforms.push(Platform::new(x, y, length, PlatformKind::Bridge));
            inserted += 1;
        } else {
            trace!("bridge at ({x}, {y}) length {length} collides, skipped");
        }
    }

    platforms.sort_by_origin();
    debug!("connectivity: {inserted} bridges inserted");
    inserted
}
