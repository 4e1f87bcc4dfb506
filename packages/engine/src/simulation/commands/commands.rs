use crate::domain::Material;

use super::WorldCore;

pub(super) fn paint(world: &mut WorldCore, x: i32, y: i32, radius: u32, probability: f32, material: Material) {
    // clamp passes NaN through; treat it as "never"
    let probability = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
    world
        .grid
        .set_within_circle_with(x, y, radius, probability, material);
    world.sync_frame_buffer();
}

pub(super) fn place(world: &mut WorldCore, x: i32, y: i32, material: Material) -> bool {
    if !world.grid.in_bounds(x, y) {
        return false;
    }

    let particle = world.grid.spawn(material);
    world.grid.set(x, y, particle);
    world.sync_frame_buffer();
    true
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.clock.reset();
    world.frame = 0;
    world.sync_frame_buffer();
}
