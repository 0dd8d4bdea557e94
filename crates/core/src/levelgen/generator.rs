//! Arena generation orchestration: boundaries, central platform, density
//! placement, connectivity repair, then weapon sampling.

mod boundaries;
mod connectivity;
mod placement;

use log::debug;

use super::config::{ConfigError, GenerationConfig};
use super::model::{GenerationStats, LevelLayout, PlatformKind};
use super::platforms::PlatformSet;
use super::random::RandomSource;
use super::weapons::WeaponSpawnSampler;

use boundaries::{add_boundaries, add_central_platform};
use connectivity::repair_connectivity;
use placement::place_platforms;

/// Owns a validated config. Each `generate` call builds a fresh layout with
/// its own `RandomSource`, so one generator can serve many independent runs.
#[derive(Clone, Debug)]
pub struct LayoutGenerator {
    config: GenerationConfig,
}

impl LayoutGenerator {
    pub fn new(config: GenerationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Resolves the configured seed (drawing one if it is `Random`) and runs
    /// the pipeline.
    pub fn generate(&self) -> LevelLayout {
        self.generate_with_seed(self.config.seed.resolve())
    }

    pub fn generate_with_seed(&self, seed: u64) -> LevelLayout {
        let config = &self.config;
        let mut rng = RandomSource::from_seed(seed);
        let mut platforms = PlatformSet::new();

        if config.boundary_walls {
            add_boundaries(&mut platforms, config);
        }
        if config.central_platform {
            add_central_platform(&mut platforms, config);
        }

        let tally = place_platforms(&mut platforms, config, &mut rng);
        let bridges_inserted = if config.enforce_connectivity {
            repair_connectivity(&mut platforms, config, &mut rng)
        } else {
            0
        };

        let weapon_spawns =
            WeaponSpawnSampler::from_config(config).sample(platforms.as_slice(), &mut rng);

        let stats = GenerationStats {
            target_tiles: tally.target_tiles,
            placed_tiles: tally.placed_tiles,
            placement_attempts: tally.attempts,
            platforms_placed: tally.placed,
            bridges_inserted,
            weapons_requested: config.weapon_spawn_count,
        };
        debug!(
            "seed {seed}: {} platforms ({} bridge tiles), {} weapon spawns",
            platforms.len(),
            platforms.tiles_of(PlatformKind::Bridge),
            weapon_spawns.len()
        );

        LevelLayout::new(
            seed,
            config.level_width,
            config.level_height,
            platforms.into_vec(),
            weapon_spawns,
            stats,
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::levelgen::config::{MAX_WEAPON_SPAWNS, SeedSetting};
    use crate::levelgen::model::Platform;

    fn generator(config: GenerationConfig) -> LayoutGenerator {
        LayoutGenerator::new(config).expect("test config should validate")
    }

    #[test]
    fn rejects_invalid_config_at_construction() {
        let config =
            GenerationConfig { min_platform_length: 9, max_platform_length: 2, ..Default::default() };
        assert!(LayoutGenerator::new(config).is_err());
    }

    #[test]
    fn rejects_configs_whose_arithmetic_would_overflow() {
        let configs = [
            GenerationConfig { weapon_spawn_count: usize::MAX / 10, ..GenerationConfig::duel() },
            GenerationConfig { max_platform_length: i32::MAX, ..GenerationConfig::duel() },
            GenerationConfig { max_height_variation: i32::MAX, ..GenerationConfig::duel() },
        ];
        for config in configs {
            assert!(LayoutGenerator::new(config.clone()).is_err(), "{config:?} should be rejected");
        }
    }

    #[test]
    fn largest_accepted_values_still_generate() {
        let config = GenerationConfig {
            max_platform_length: GenerationConfig::duel().level_width,
            max_height_variation: GenerationConfig::duel().level_height,
            weapon_spawn_count: MAX_WEAPON_SPAWNS,
            ..GenerationConfig::duel()
        };
        let layout = generator(config).generate_with_seed(1);
        assert!(layout.weapon_spawns().len() <= MAX_WEAPON_SPAWNS);
    }

    #[test]
    fn same_seed_produces_byte_identical_layouts() {
        let generator = generator(GenerationConfig::default());
        let a = generator.generate_with_seed(123_456);
        let b = generator.generate_with_seed(123_456);
        assert_eq!(a.canonical_bytes(), b.canonical_bytes());
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_seed_setting_is_honoured() {
        let layout = generator(GenerationConfig::default().with_seed(42)).generate();
        assert_eq!(layout.seed(), 42);
    }

    #[test]
    fn random_seed_setting_varies_between_runs() {
        let generator =
            generator(GenerationConfig { seed: SeedSetting::Random, ..Default::default() });
        let a = generator.generate();
        let b = generator.generate();
        assert_ne!(a.seed(), b.seed());
        assert_eq!(generator.generate_with_seed(a.seed()), a);
    }

    #[test]
    fn different_seeds_change_the_layout() {
        let generator = generator(GenerationConfig::default());
        assert_ne!(
            generator.generate_with_seed(1).fingerprint(),
            generator.generate_with_seed(2).fingerprint()
        );
    }

    #[test]
    fn empty_arena_has_only_boundaries() {
        let config = GenerationConfig {
            level_width: 20,
            level_height: 20,
            platform_density: 0,
            boundary_walls: true,
            boundary_wall_height: 6,
            central_platform: false,
            enforce_connectivity: false,
            weapon_spawn_count: 0,
            ..Default::default()
        };
        let layout = generator(config).generate_with_seed(9);

        assert_eq!(layout.platforms().len(), 1 + 2 * 7);
        assert_eq!(layout.count_of(PlatformKind::Boundary), layout.platforms().len());
        let floor = layout.platforms()[0];
        assert_eq!((floor.origin_y(), floor.length()), (0, 20));
        assert!(layout.weapon_spawns().is_empty());
        assert_eq!(layout.stats().placement_attempts, 0);
    }

    #[test]
    fn connectivity_pass_leaves_platforms_sorted() {
        let layout = generator(GenerationConfig::skirmish()).generate_with_seed(77);
        let origins: Vec<i32> = layout.platforms().iter().map(Platform::origin_x).collect();
        assert!(origins.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn stats_track_placement() {
        let layout = generator(GenerationConfig::default()).generate_with_seed(5);
        let stats = layout.stats();
        assert_eq!(stats.platforms_placed, layout.count_of(PlatformKind::Normal));
        assert_eq!(stats.bridges_inserted, layout.count_of(PlatformKind::Bridge));
        assert!(stats.placement_attempts <= GenerationConfig::default().max_placement_attempts);
        assert_eq!(stats.weapons_requested, 6);
    }

    #[test]
    fn central_platform_is_present_when_enabled() {
        let layout = generator(GenerationConfig::duel()).generate_with_seed(8);
        assert_eq!(layout.count_of(PlatformKind::Central), 1);
    }

    fn no_invalid_overlap(platforms: &[Platform], spacing: i32) -> bool {
        let solid: Vec<&Platform> = platforms.iter().filter(|p| !p.is_boundary()).collect();
        solid.iter().enumerate().all(|(index, a)| {
            solid[index + 1..].iter().all(|b| {
                let overlap = a.origin_x() < b.end_x() && b.origin_x() < a.end_x();
                !overlap || a.origin_y().abs_diff(b.origin_y()) >= spacing.unsigned_abs()
            })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn generated_layouts_keep_spacing_and_containment(
            seed in any::<u64>(),
            density in 0_u32..=60,
            spacing in 1_i32..=5,
            connectivity in any::<bool>(),
            walls in any::<bool>(),
        ) {
            let config = GenerationConfig {
                platform_density: density,
                min_platform_spacing: spacing,
                enforce_connectivity: connectivity,
                boundary_walls: walls,
                ..GenerationConfig::default()
            };
            let layout = generator(config.clone()).generate_with_seed(seed);

            prop_assert!(no_invalid_overlap(layout.platforms(), spacing));
            for platform in layout.platforms() {
                prop_assert!(platform.origin_x() >= 0);
                prop_assert!(platform.end_x() <= config.level_width);
            }
            prop_assert!(layout.weapon_spawns().len() <= config.weapon_spawn_count);
        }
    }
}
