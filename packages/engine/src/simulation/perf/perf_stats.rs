use wasm_bindgen::prelude::*;

use crate::grid::StepReport;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) render_ms: f64,
    pub(super) particles_moved: u32,
    pub(super) sub_steps: u32,
    pub(super) particles_rested: u32,
    pub(super) dirty_cells: u32,
    pub(super) particle_count: u32,
    pub(super) grid_size: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_step(&mut self, report: &StepReport) {
        self.particles_moved = report.moved;
        self.sub_steps = report.sub_steps;
        self.particles_rested = report.rested;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_moved(&self) -> u32 { self.particles_moved }
    #[wasm_bindgen(getter)]
    pub fn sub_steps(&self) -> u32 { self.sub_steps }
    #[wasm_bindgen(getter)]
    pub fn particles_rested(&self) -> u32 { self.particles_rested }
    #[wasm_bindgen(getter)]
    pub fn dirty_cells(&self) -> u32 { self.dirty_cells }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}
