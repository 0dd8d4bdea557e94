//! Mutable platform collection for a single generation run.

use super::geometry::conflicts_with;
use super::model::{Platform, PlatformKind};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlatformSet {
    platforms: Vec<Platform>,
}

impl PlatformSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, platform: Platform) {
        self.platforms.push(platform);
    }

    pub fn as_slice(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn into_vec(self) -> Vec<Platform> {
        self.platforms
    }

    /// A run is valid unless it shares a column with a non-boundary platform
    /// less than `min_spacing` rows away.
    pub fn is_valid_placement(&self, x: i32, y: i32, length: i32, min_spacing: i32) -> bool {
        !self
            .platforms
            .iter()
            .filter(|platform| !platform.is_boundary())
            .any(|platform| conflicts_with(platform, x, y, length, min_spacing))
    }

    /// Stable sort by origin column.
    pub fn sort_by_origin(&mut self) {
        self.platforms.sort_by_key(Platform::origin_x);
    }

    pub fn tiles_of(&self, kind: PlatformKind) -> i64 {
        self.platforms
            .iter()
            .filter(|platform| platform.kind() == kind)
            .map(|platform| i64::from(platform.length()))
            .sum()
    }
}
