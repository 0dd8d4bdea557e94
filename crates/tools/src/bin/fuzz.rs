use anyhow::{Result, anyhow, ensure};
use arena_core::{GenerationConfig, LayoutGenerator, LevelLayout, Platform};
use clap::Parser;
use log::{debug, info};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    iterations: u32,
}

/// Uniform draw from `low..=high`.
fn pick(rng: &mut ChaCha8Rng, low: i32, high: i32) -> i32 {
    let span = (high - low + 1) as u64;
    low + (rng.next_u64() % span) as i32
}

fn flip(rng: &mut ChaCha8Rng) -> bool {
    rng.next_u64() % 2 == 0
}

fn random_config(rng: &mut ChaCha8Rng) -> GenerationConfig {
    let level_width = pick(rng, 8, 160);
    let min_platform_length = pick(rng, 1, 6);
    let max_height_variation = pick(rng, 0, 6);
    GenerationConfig {
        level_width,
        level_height: pick(rng, 8, 80),
        jump_height: pick(rng, 1, 8),
        jump_distance: pick(rng, 1, 10),
        min_platform_spacing: pick(rng, 1, 6),
        min_platform_length,
        max_platform_length: (min_platform_length + pick(rng, 0, 8)).min(level_width),
        platform_density: pick(rng, 0, 100) as u32,
        enforce_connectivity: flip(rng),
        min_height_variation: pick(rng, 0, max_height_variation),
        max_height_variation,
        weapon_spawn_count: pick(rng, 0, 16) as usize,
        min_weapon_distance: pick(rng, 0, 30) as f32,
        allow_air_spawns: flip(rng),
        air_spawn_max_height: pick(rng, 0, 6),
        boundary_walls: flip(rng),
        boundary_wall_height: pick(rng, 0, 30),
        central_platform: flip(rng),
        central_platform_size: pick(rng, 1, 24),
        max_placement_attempts: pick(rng, 1, 2000) as usize,
        ..GenerationConfig::default()
    }
    .with_seed(rng.next_u64())
}

fn spans_collide(a: &Platform, b: &Platform, spacing: i32) -> bool {
    let overlap = a.origin_x() < b.end_x() && b.origin_x() < a.end_x();
    overlap && a.origin_y().abs_diff(b.origin_y()) < spacing.unsigned_abs()
}

fn check_layout(config: &GenerationConfig, layout: &LevelLayout) -> Result<()> {
    let solid: Vec<&Platform> = layout.platforms().iter().filter(|p| !p.is_boundary()).collect();
    for (index, a) in solid.iter().enumerate() {
        for b in &solid[index + 1..] {
            ensure!(
                !spans_collide(a, b, config.min_platform_spacing),
                "Invariant failed: {a:?} and {b:?} violate spacing {}",
                config.min_platform_spacing
            );
        }
    }

    for platform in layout.platforms() {
        ensure!(
            platform.origin_x() >= 0 && platform.end_x() <= config.level_width,
            "Invariant failed: {platform:?} outside width {}",
            config.level_width
        );
    }

    let spawns = layout.weapon_spawns();
    ensure!(
        spawns.len() <= config.weapon_spawn_count,
        "Invariant failed: {} weapon spawns for {} requested",
        spawns.len(),
        config.weapon_spawn_count
    );
    for (index, a) in spawns.iter().enumerate() {
        for b in &spawns[index + 1..] {
            let distance = ((a.x - b.x) as f32).hypot((a.y - b.y) as f32);
            ensure!(
                distance >= config.min_weapon_distance,
                "Invariant failed: weapons {a:?} and {b:?} only {distance} apart"
            );
        }
    }

    let stats = layout.stats();
    let boundaries = layout.platforms().iter().filter(|p| p.is_boundary()).count();
    let ceiling = boundaries + usize::from(config.central_platform) + config.max_placement_attempts
        + stats.bridges_inserted;
    ensure!(
        layout.platforms().len() <= ceiling,
        "Invariant failed: {} platforms exceed bound {ceiling}",
        layout.platforms().len()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("fuzzing arena generation on seed {} for {} iterations", args.seed, args.iterations);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for iteration in 0..args.iterations {
        let config = random_config(&mut rng);
        let generator = LayoutGenerator::new(config.clone())
            .map_err(|e| anyhow!("iteration {iteration}: drew invalid config: {e}"))?;
        let layout = generator.generate();
        check_layout(&config, &layout)
            .map_err(|e| e.context(format!("iteration {iteration}, config {config:?}")))?;

        let replay = generator.generate_with_seed(layout.seed());
        ensure!(
            replay.fingerprint() == layout.fingerprint(),
            "Invariant failed: seed {} is not deterministic",
            layout.seed()
        );
        debug!(
            "iteration {iteration}: {} platforms, {} weapons",
            layout.platforms().len(),
            layout.weapon_spawns().len()
        );
    }

    info!("Fuzzing completed successfully.");
    Ok(())
}
