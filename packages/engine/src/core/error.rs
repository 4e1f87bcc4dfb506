//! Error taxonomy
//!
//! The simulation itself never fails: out-of-range writes are dropped and
//! checked reads return `Option`. Only loading a configuration can go wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("grid of {width}x{height} cells is empty or too large")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("tick rate must be a positive finite number, got {0}")]
    InvalidTickRate(f64),

    #[error("brush probability must lie in [0, 1], got {0}")]
    InvalidProbability(f32),

    #[error("invalid colour {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("invalid material {material}: {reason}")]
    InvalidMaterial {
        material: &'static str,
        reason: String,
    },
}
