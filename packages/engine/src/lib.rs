//! Falling Sand Engine - granular grid simulation in WASM
//!
//! Architecture:
//! - core/       - Errors shared by every layer
//! - domain/     - Colors, materials, particles, settings
//! - spatial/    - The cell grid, its physics pass and dirty tracking
//! - simulation/ - Orchestration, clock, rendering, JS facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod simulation;

// Short paths for the common entry points
pub use spatial::grid;
pub use domain::{color, content, material, particle};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        // A second init() keeps the first logger
        let _ = console_log::init_with_level(log::Level::Info);
        web_sys::console::log_1(&"Falling sand engine initialized".into());
    }

    log::info!("engine v{} ready", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::ConfigError;
pub use domain::{BrushConfig, Material, Particle, Rgba, SimConfig};
pub use simulation::{PerfStats, PixelBuffer, World, WorldCore};
pub use spatial::{Grid, StepReport};

// Export material ids for JS
#[wasm_bindgen]
pub fn el_empty() -> u8 { Material::Empty.id() }
#[wasm_bindgen]
pub fn el_sand() -> u8 { Material::Sand.id() }
