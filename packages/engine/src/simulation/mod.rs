//! World - sandbox session orchestration
//!
//! `WorldCore` owns one grid for the lifetime of a session and keeps a pixel
//! buffer in sync with it. The grid does the physics; this layer adds the
//! fixed-step clock, the pointer brush, perf metrics and the JS facade.
//!
//! Every mutation is followed by a dirty-only render into the buffer, so the
//! buffer is never stale even when several ticks run between two frames.

use crate::domain::{Material, SimConfig};
use crate::grid::{Grid, StepReport};
use crate::core::ConfigError;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "clock/fixed_step.rs"]
mod fixed_step;
#[path = "screen/resolution.rs"]
mod resolution;
#[path = "render/surface.rs"]
mod surface;
#[path = "render/pixel_buffer.rs"]
mod pixel_buffer;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{FrameLayout, World};
pub use fixed_step::{FixedStep, DEFAULT_MAX_STEPS_PER_FRAME};
pub use perf_stats::PerfStats;
pub use pixel_buffer::PixelBuffer;
pub use resolution::{fit_resolution, Resolution};
pub use surface::{RenderEvent, RenderLog, Surface};

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    config: SimConfig,
    grid: Grid,
    clock: FixedStep,
    frame_buffer: PixelBuffer,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Default sandbox of the given size.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(SimConfig::with_size(width, height))
    }

    pub fn from_config(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(init::create_world_core(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_config(SimConfig::from_json(json)?)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn particle_count(&self) -> usize { self.grid.particle_count() }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn frame_buffer(&self) -> &PixelBuffer { &self.frame_buffer }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Run exactly one tick
    pub fn step(&mut self) -> StepReport {
        step::step(self)
    }

    /// Feed real elapsed time to the fixed-step clock and run the ticks due.
    /// Returns how many ticks ran.
    pub fn advance(&mut self, dt_seconds: f64) -> u32 {
        step::advance(self, dt_seconds)
    }

    /// Paint with the configured pointer brush
    pub fn paint(&mut self, x: i32, y: i32) {
        let brush = self.config.brush;
        commands::paint(self, x, y, brush.radius, brush.probability, Material::Sand);
    }

    pub fn paint_with(&mut self, x: i32, y: i32, radius: u32, probability: f32, material: Material) {
        commands::paint(self, x, y, radius, probability, material);
    }

    /// Empty every cell within `radius` of (x, y)
    pub fn erase(&mut self, x: i32, y: i32, radius: u32) {
        commands::paint(self, x, y, radius, 1.0, Material::Empty);
    }

    /// Place a single particle; false if (x, y) is off the grid
    pub fn place(&mut self, x: i32, y: i32, material: Material) -> bool {
        commands::place(self, x, y, material)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Repaint the whole frame buffer from the grid, e.g. after the host
    /// lost its canvas
    pub fn render_to_buffer(&mut self) {
        self.grid.render_full(&mut self.frame_buffer);
    }

    /// Bring the frame buffer up to date with the grid's dirty cells
    fn sync_frame_buffer(&mut self) {
        self.grid.render(&mut self.frame_buffer);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
