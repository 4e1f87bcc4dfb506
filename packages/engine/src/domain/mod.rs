//! Domain - what a cell can hold and how the sandbox is configured

pub mod color;
pub mod content;
pub mod material;
pub mod particle;

pub use color::{vary_color, Hsl, Rgba};
pub use content::{BrushConfig, SimConfig};
pub use material::{Material, MaterialProps, MaterialTable};
pub use particle::Particle;
