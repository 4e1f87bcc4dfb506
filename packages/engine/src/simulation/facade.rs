use wasm_bindgen::prelude::*;

use crate::domain::{Material, SimConfig};

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Where the pixel buffer lives in wasm memory, read once per frame.
///
/// The buffer is already up to date after every `step`/`advance`, however
/// many ticks ran, so hosts blit it whole.
#[wasm_bindgen]
pub struct FrameLayout {
    pixels_ptr: u32,
    pixels_len_elements: u32,
    pixels_len_bytes: u32,
}

#[wasm_bindgen]
impl FrameLayout {
    #[wasm_bindgen(getter)]
    pub fn pixels_ptr(&self) -> u32 { self.pixels_ptr }
    #[wasm_bindgen(getter)]
    pub fn pixels_len_elements(&self) -> u32 { self.pixels_len_elements }
    #[wasm_bindgen(getter)]
    pub fn pixels_len_bytes(&self) -> u32 { self.pixels_len_bytes }
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        let core = WorldCore::from_config(SimConfig::with_size(width, height))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    /// Create a world from a JSON settings document
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(&json).map_err(|e| {
            log::warn!("rejected world config: {}", e);
            JsValue::from_str(&e.to_string())
        })?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Paint sand under the pointer; radius and probability fall back to the
    /// configured brush
    pub fn paint(&mut self, x: i32, y: i32, radius: Option<u32>, probability: Option<f32>) {
        let brush = self.core.config().brush;
        self.core.paint_with(
            x,
            y,
            radius.unwrap_or(brush.radius),
            probability.unwrap_or(brush.probability),
            Material::Sand,
        );
    }

    /// Empty every cell in radius
    pub fn erase(&mut self, x: i32, y: i32, radius: u32) {
        self.core.erase(x, y, radius);
    }

    /// Add a particle at position; unknown material ids and off-grid
    /// positions are rejected
    pub fn add_particle(&mut self, x: i32, y: i32, material: u8) -> bool {
        match Material::from_id(material) {
            Some(material) => self.core.place(x, y, material),
            None => false,
        }
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Run one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Feed elapsed seconds to the fixed-step clock; returns ticks run
    pub fn advance(&mut self, dt_seconds: f64) -> u32 {
        self.core.advance(dt_seconds)
    }

    /// Redraw every cell into the pixel buffer
    pub fn render(&mut self) {
        self.core.render_to_buffer();
    }

    /// Settings the world was created with, as JSON
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Get pointer to the RGBA pixel buffer (for putImageData)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.frame_buffer().as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.frame_buffer().len()
    }

    pub fn pixels_len_bytes(&self) -> usize {
        self.core.frame_buffer().byte_len()
    }

    /// Cells touched since the last tick began (the last tick only when
    /// `advance` ran several)
    pub fn dirty_count(&self) -> usize {
        self.core.grid().dirty_indices().len()
    }

    pub fn frame_layout(&self) -> FrameLayout {
        let buffer = self.core.frame_buffer();
        FrameLayout {
            pixels_ptr: buffer.as_ptr() as usize as u32,
            pixels_len_elements: buffer.len() as u32,
            pixels_len_bytes: buffer.byte_len() as u32,
        }
    }
}
