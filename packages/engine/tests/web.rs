//! Facade tests that need a real JS host (`wasm-pack test --node`)
#![cfg(target_arch = "wasm32")]

use falling_sand_engine::{el_empty, el_sand, init, World};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn world_rejects_zero_size() {
    assert!(World::new(0, 10).is_err());
}

#[wasm_bindgen_test]
fn from_config_reports_bad_documents() {
    init();
    let err = World::from_config(r#"{ "tickRate": 0 }"#.to_string()).err();
    let message = err.and_then(|e| e.as_string()).unwrap_or_default();
    assert!(message.contains("tick rate"), "got {:?}", message);
}

#[wasm_bindgen_test]
fn facade_paints_steps_and_exposes_buffers() {
    let mut world = World::from_config(r#"{ "width": 32, "height": 32, "seed": 1 }"#.to_string())
        .expect("valid config");

    world.paint(16, 4, Some(2), Some(1.0));
    assert_eq!(world.particle_count(), 13);
    assert!(world.add_particle(0, 0, el_sand()));
    assert!(!world.add_particle(0, 0, 200));
    assert!(world.add_particle(0, 0, el_empty()));

    assert_eq!(world.advance(0.04), 2);
    assert_eq!(world.frame(), 2);

    let layout = world.frame_layout();
    assert_eq!(layout.pixels_len_elements(), 32 * 32);
    assert_eq!(layout.pixels_len_bytes(), 32 * 32 * 4);
    assert_eq!(layout.pixels_ptr(), world.pixels_ptr() as usize as u32);
}
