use arena_core::{
    GenerationConfig, LayoutGenerator, PlatformKind, RandomSource, SpawnCriteria,
    SpawnPointFilter, UniformGrid, filter_spawn_points,
};

fn generator(config: GenerationConfig) -> LayoutGenerator {
    LayoutGenerator::new(config).expect("scenario config should validate")
}

#[test]
fn test_scenario_empty_twenty_by_twenty_arena_contains_only_boundaries() {
    let wall_height = 8;
    let config = GenerationConfig {
        level_width: 20,
        level_height: 20,
        platform_density: 0,
        boundary_walls: true,
        boundary_wall_height: wall_height,
        central_platform: false,
        enforce_connectivity: false,
        weapon_spawn_count: 0,
        ..GenerationConfig::default()
    };
    let layout = generator(config).generate_with_seed(1);

    let floors: Vec<_> = layout
        .platforms()
        .iter()
        .filter(|platform| platform.length() == 20 && platform.origin_y() == 0)
        .collect();
    assert_eq!(floors.len(), 1);
    assert_eq!(floors[0].kind(), PlatformKind::Boundary);

    let wall_cells = layout
        .platforms()
        .iter()
        .filter(|platform| platform.is_boundary() && platform.length() == 1)
        .count();
    assert_eq!(wall_cells, 2 * (wall_height as usize + 1));
    assert_eq!(layout.platforms().len(), 1 + wall_cells);

    for kind in [PlatformKind::Normal, PlatformKind::Bridge, PlatformKind::Central] {
        assert_eq!(layout.count_of(kind), 0, "{kind:?} should not appear");
    }
    assert!(layout.weapon_spawns().is_empty());
}

#[test]
fn test_scenario_disabled_walls_emit_no_boundaries() {
    let config = GenerationConfig { boundary_walls: false, ..GenerationConfig::duel() };
    let layout = generator(config).generate_with_seed(3);
    assert_eq!(layout.count_of(PlatformKind::Boundary), 0);
}

#[test]
fn test_scenario_weapon_distance_beyond_the_diagonal_yields_one_spawn() {
    let config = GenerationConfig {
        weapon_spawn_count: 8,
        min_weapon_distance: 1_000.0,
        ..GenerationConfig::default()
    };
    let layout = generator(config).generate_with_seed(42);
    assert_eq!(layout.weapon_spawns().len(), 1);
}

#[test]
fn test_scenario_air_spawns_disabled_keep_weapons_on_surfaces() {
    let config = GenerationConfig {
        allow_air_spawns: false,
        weapon_spawn_count: 12,
        min_weapon_distance: 2.0,
        ..GenerationConfig::default()
    };
    let layout = generator(config).generate_with_seed(64);
    assert!(!layout.weapon_spawns().is_empty());
    for spawn in layout.weapon_spawns() {
        assert!(
            layout.platforms().iter().any(|platform| {
                !platform.is_boundary()
                    && platform.origin_y() + 1 == spawn.y
                    && spawn.x > platform.origin_x()
                    && spawn.x < platform.end_x() - 1
            }),
            "{spawn:?} should stand on a platform"
        );
    }
}

#[test]
fn test_scenario_dense_config_terminates_with_a_sparser_layout() {
    let config = GenerationConfig {
        platform_density: 100,
        min_platform_spacing: 6,
        ..GenerationConfig::default()
    };
    let layout = generator(config.clone()).generate_with_seed(5);
    let stats = layout.stats();
    assert!(!stats.reached_density_target());
    assert_eq!(stats.placement_attempts, config.max_placement_attempts);
    assert!(stats.platforms_placed <= config.max_placement_attempts);
}

#[test]
fn test_scenario_spawn_points_are_selected_independently_of_generation() {
    let layout = generator(GenerationConfig::default()).generate_with_seed(77);
    let criteria = SpawnCriteria {
        count: 4,
        min_spacing: 6.0,
        minimum_platform_size: Some(4),
        boundary_buffer: Some(3),
    };

    let cells = SpawnPointFilter::new(criteria.clone()).select(&layout, &mut RandomSource::from_seed(1));
    assert!(cells.len() <= 4);
    for cell in &cells {
        assert!(cell.x >= 3 && cell.x < layout.width() - 3);
    }

    let world = filter_spawn_points(&layout, &criteria, &mut RandomSource::from_seed(1), &UniformGrid::default());
    assert_eq!(world.len(), cells.len());
    for (cell, point) in cells.iter().zip(&world) {
        assert_eq!(point.x, cell.x as f32 + 0.5);
        assert_eq!(point.y, cell.y as f32 + 0.5);
    }
}
