//! Runtime bootstrap: builds the arena for a match and hands world-space
//! positions to gameplay.

use arena_core::{
    ConfigError, GenerationConfig, GridPos, GridToWorld, LayoutGenerator, LevelLayout,
    RandomSource, SpawnCriteria, SpawnPointFilter, WorldPos, paint_layout,
};
use log::{info, warn};

use crate::ascii_canvas::AsciiCanvas;

/// Keeps player-spawn draws off the layout's own stream.
const SPAWN_POINT_STREAM: u64 = 0x5350_4157_4e53;

#[derive(Clone, Debug, PartialEq)]
pub struct MatchSetup {
    pub layout: LevelLayout,
    pub weapon_positions: Vec<WorldPos>,
    pub spawn_cells: Vec<GridPos>,
    pub spawn_positions: Vec<WorldPos>,
}

impl MatchSetup {
    /// Layout plus player spawns as text, top row first.
    pub fn render_ascii(&self) -> String {
        let mut canvas = AsciiCanvas::new();
        paint_layout(&self.layout, &mut canvas);
        for &cell in &self.spawn_cells {
            canvas.mark_player_spawn(cell);
        }
        canvas.render()
    }
}

pub fn bootstrap_match(
    config: GenerationConfig,
    criteria: &SpawnCriteria,
    grid: &impl GridToWorld,
) -> Result<MatchSetup, ConfigError> {
    let generator = LayoutGenerator::new(config)?;
    let layout = generator.generate();
    report_layout_shortfalls(&layout);

    let weapon_positions = layout.weapon_spawns_world(grid);
    let mut spawn_rng = RandomSource::from_stream(layout.seed(), SPAWN_POINT_STREAM);
    let spawn_cells = SpawnPointFilter::new(criteria.clone()).select(&layout, &mut spawn_rng);
    if spawn_cells.len() < criteria.count {
        warn!("only {}/{} player spawn points found", spawn_cells.len(), criteria.count);
    }
    let spawn_positions = spawn_cells.iter().map(|&cell| grid.cell_to_world(cell)).collect();

    info!(
        "arena ready: seed {} fingerprint {:016x}, {} platforms, {} weapons, {} player spawns",
        layout.seed(),
        layout.fingerprint(),
        layout.platforms().len(),
        layout.weapon_spawns().len(),
        spawn_cells.len()
    );

    Ok(MatchSetup { layout, weapon_positions, spawn_cells, spawn_positions })
}

fn report_layout_shortfalls(layout: &LevelLayout) {
    let stats = layout.stats();
    if !stats.reached_density_target() {
        warn!(
            "layout sparser than configured: {}/{} tiles after {} attempts",
            stats.placed_tiles, stats.target_tiles, stats.placement_attempts
        );
    }
    if layout.weapon_spawns().len() < stats.weapons_requested {
        warn!(
            "only {}/{} weapon spawns fit the spacing rule",
            layout.weapon_spawns().len(),
            stats.weapons_requested
        );
    }
}
