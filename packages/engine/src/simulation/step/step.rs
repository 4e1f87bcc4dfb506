use crate::grid::StepReport;

use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) -> StepReport {
    let step_timer = PerfTimer::start_if(world.perf_enabled);
    let report = world.grid.step();
    let step_ms = step_timer.map(|t| t.elapsed_ms());

    let render_timer = PerfTimer::start_if(world.perf_enabled);
    world.sync_frame_buffer();
    let render_ms = render_timer.map(|t| t.elapsed_ms());

    if let (Some(step_ms), Some(render_ms)) = (step_ms, render_ms) {
        let stats = &mut world.perf_stats;
        stats.reset();
        stats.record_step(&report);
        stats.step_ms = step_ms;
        stats.render_ms = render_ms;
        stats.dirty_cells = world.grid.dirty_indices().len() as u32;
        stats.particle_count = world.grid.particle_count() as u32;
        stats.grid_size = world.grid.size() as u32;
    }

    log::trace!(
        "frame {}: {} moved, {} sub-steps, {} came to rest",
        world.frame,
        report.moved,
        report.sub_steps,
        report.rested
    );

    world.frame += 1;
    report
}

pub(super) fn advance(world: &mut WorldCore, dt_seconds: f64) -> u32 {
    let ticks = world.clock.advance(dt_seconds);
    for _ in 0..ticks {
        step(world);
    }
    ticks
}
