//! Seams to the rendering side: grid-to-world mapping and the tile sink a
//! generated layout is painted into.

use crate::levelgen::{LevelLayout, PlatformKind};
use crate::types::{GridPos, WorldPos};

/// Grid-to-world conversion owned by the rendering collaborator.
pub trait GridToWorld {
    fn cell_to_world(&self, cell: GridPos) -> WorldPos;
}

/// Square cells of `cell_size` world units laid out from `origin`; maps a
/// cell to its centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformGrid {
    pub cell_size: f32,
    pub origin: WorldPos,
}

impl UniformGrid {
    pub fn new(cell_size: f32, origin: WorldPos) -> Self {
        Self { cell_size, origin }
    }
}

impl Default for UniformGrid {
    fn default() -> Self {
        Self::new(1.0, WorldPos::default())
    }
}

impl GridToWorld for UniformGrid {
    fn cell_to_world(&self, cell: GridPos) -> WorldPos {
        WorldPos::new(
            self.origin.x + (cell.x as f32 + 0.5) * self.cell_size,
            self.origin.y + (cell.y as f32 + 0.5) * self.cell_size,
        )
    }
}

/// Write-only surface a layout is painted onto.
pub trait TileSink {
    fn clear(&mut self, width: i32, height: i32);
    fn set_tile(&mut self, cell: GridPos, kind: PlatformKind);
    fn mark_weapon(&mut self, _cell: GridPos) {}
}

/// Clears the sink once, then paints every platform cell and weapon marker.
pub fn paint_layout(layout: &LevelLayout, sink: &mut impl TileSink) {
    sink.clear(layout.width(), layout.height());
    for platform in layout.platforms() {
        for cell in platform.cells() {
            sink.set_tile(cell, platform.kind());
        }
    }
    for spawn in layout.weapon_spawns() {
        sink.mark_weapon(spawn.cell());
    }
}
