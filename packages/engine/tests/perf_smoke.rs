use falling_sand_engine::{el_sand, World};

#[test]
fn perf_smoke_step() {
    let mut world = World::new(128, 64).expect("valid size");
    world.enable_perf_metrics(true);
    for x in 0..128 {
        for y in 0..32 {
            world.add_particle(x, y, el_sand());
        }
    }
    world.step();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.render_ms() >= 0.0);
    assert_eq!(stats.particle_count(), 128 * 32);
    assert_eq!(stats.grid_size(), 128 * 64);
}

#[test]
fn perf_smoke_sandbox_with_pointer() {
    // Ten simulated seconds of the default sandbox with a busy pointer
    let mut world = World::new(256, 144).expect("valid size");
    world.enable_perf_metrics(true);

    let mut ticks = 0;
    for frame in 0..600 {
        if frame % 4 == 0 {
            world.paint((frame % 256) as i32, 10, None, None);
        }
        ticks += world.advance(1.0 / 60.0);
    }

    assert!(ticks > 550, "only {} ticks ran", ticks);
    assert!(world.particle_count() > 0);
    assert_eq!(world.pixels_len(), 256 * 144);
    assert_eq!(world.pixels_len_bytes(), 256 * 144 * 4);
}
