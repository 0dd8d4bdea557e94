//! Text tile surface for terminals and logs.

use arena_core::{GridPos, PlatformKind, TileSink};

const EMPTY: char = '.';
const WEAPON: char = 'w';
const PLAYER_SPAWN: char = 'P';

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsciiCanvas {
    width: i32,
    height: i32,
    cells: Vec<char>,
}

impl AsciiCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn glyph_at(&self, cell: GridPos) -> Option<char> {
        self.index(cell).map(|index| self.cells[index])
    }

    pub fn mark_player_spawn(&mut self, cell: GridPos) {
        self.put(cell, PLAYER_SPAWN);
    }

    /// Rows from the top of the arena down, so `y = 0` is the last line.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height.max(0) as usize);
        for y in (0..self.height).rev() {
            let start = (y * self.width) as usize;
            out.extend(&self.cells[start..start + self.width as usize]);
            out.push('\n');
        }
        out
    }

    fn index(&self, cell: GridPos) -> Option<usize> {
        let inside = cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height;
        inside.then(|| (cell.y * self.width + cell.x) as usize)
    }

    /// Out-of-bounds cells are dropped.
    fn put(&mut self, cell: GridPos, glyph: char) {
        if let Some(index) = self.index(cell) {
            self.cells[index] = glyph;
        }
    }
}

fn glyph_for(kind: PlatformKind) -> char {
    match kind {
        PlatformKind::Boundary => '#',
        PlatformKind::Normal => '=',
        PlatformKind::Central => 'C',
        PlatformKind::Bridge => 'b',
    }
}

impl TileSink for AsciiCanvas {
    fn clear(&mut self, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
        self.cells = vec![EMPTY; (self.width * self.height) as usize];
    }

    fn set_tile(&mut self, cell: GridPos, kind: PlatformKind) {
        self.put(cell, glyph_for(kind));
    }

    fn mark_weapon(&mut self, cell: GridPos) {
        self.put(cell, WEAPON);
    }
}
