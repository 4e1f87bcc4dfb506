use falling_sand_engine::simulation::{fit_resolution, RenderLog};
use falling_sand_engine::{Material, SimConfig, WorldCore};

const SANDBOX_CONFIG: &str = r##"{
    "width": 64,
    "height": 48,
    "seed": 2024,
    "tickRate": 60,
    "brush": { "radius": 5, "probability": 0.5 },
    "materials": {
        "empty": { "color": "#000000" },
        "sand": { "color": "#dcb159", "maxSpeed": 8, "acceleration": 0.4 }
    }
}"##;

#[test]
fn sandbox_config_loads_and_runs() {
    let mut world = WorldCore::from_config_json(SANDBOX_CONFIG).expect("config should parse");
    assert_eq!((world.width(), world.height()), (64, 48));
    assert_eq!(world.config().seed, Some(2024));

    world.paint(32, 8);
    let painted = world.particle_count();
    assert!(painted > 0);

    for _ in 0..600 {
        world.step();
    }

    assert_eq!(world.particle_count(), painted);

    // Everything has landed: the bottom row holds sand and the top rows are empty
    let grid = world.grid();
    assert!((0..64).any(|x| grid.get(x, 47).is_some_and(|p| p.material == Material::Sand)));
    assert!((0..64).all(|x| grid.get(x, 0).is_some_and(|p| p.is_empty())));
}

#[test]
fn pile_is_rendered_incrementally() {
    let mut world = WorldCore::from_config_json(SANDBOX_CONFIG).expect("config should parse");
    world.paint_with(10, 10, 3, 1.0, Material::Sand);
    world.step();

    let mut log = RenderLog::new();
    world.grid().render(&mut log);
    assert_eq!(log.pixels().count(), world.grid().dirty_indices().len());
    assert!(log.pixels().count() < world.grid().size());
}

#[test]
fn default_sandbox_fits_common_viewports() {
    let config = SimConfig::default();

    let r = fit_resolution(1920, 1080, config.width, config.height);
    assert_eq!((r.width(), r.height()), (1920, 1080));

    let r = fit_resolution(1280, 1024, config.width, config.height);
    assert_eq!((r.width(), r.height(), r.factor()), (1280, 720, 5.0));
}
