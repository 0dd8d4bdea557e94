//! Arena edges and the central hotspot platform.

use log::debug;

use super::super::config::GenerationConfig;
use super::super::model::{Platform, PlatformKind};
use super::super::platforms::PlatformSet;

/// Floor across the full width plus a unit-cell wall stack on each side,
/// `y = 0..=boundary_wall_height`.
pub(super) fn add_boundaries(platforms: &mut PlatformSet, config: &GenerationConfig) {
    let width = config.level_width;
    platforms.push(Platform::new(0, 0, width, PlatformKind::Boundary));
    for x in [0, width - 1] {
        for y in 0..=config.boundary_wall_height {
            platforms.push(Platform::new(x, y, 1, PlatformKind::Boundary));
        }
    }
    debug!(
        "boundaries: floor width {width}, walls {} cells high",
        config.boundary_wall_height + 1
    );
}

pub(super) fn add_central_platform(platforms: &mut PlatformSet, config: &GenerationConfig) {
    let size = config.central_platform_size.min(config.level_width);
    let x = (config.level_width / 2 - size / 2).max(0);
    let y = config.level_height / 3;
    platforms.push(Platform::new(x, y, size, PlatformKind::Central));
    debug!("central platform at ({x}, {y}) length {size}");
}
