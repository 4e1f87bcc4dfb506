//! Simulation configuration, loaded from a JSON document
//!
//! Every field is optional in the document; missing values fall back to the
//! defaults the sandbox ships with. Material entries are partial overrides
//! keyed by material name:
//!
//! ```json
//! {
//!   "width": 256,
//!   "height": 144,
//!   "seed": 42,
//!   "tickRate": 60,
//!   "brush": { "radius": 5, "probability": 0.5 },
//!   "materials": { "sand": { "color": "#dcb159", "maxSpeed": 8, "acceleration": 0.4 } }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;
use crate::grid::cell_count;

use super::color::Rgba;
use super::material::{Material, MaterialTable};

pub const DEFAULT_WIDTH: u32 = 256;
pub const DEFAULT_HEIGHT: u32 = 144;
pub const DEFAULT_TICK_RATE: f64 = 60.0;

/// Largest grid whose RGBA byte length still fits the u32 lengths handed to JS
pub const MAX_CELLS: usize = (u32::MAX / 4) as usize;

/// Circular placement brush
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrushConfig {
    pub radius: u32,
    /// Independent chance for each covered cell to receive a particle
    pub probability: f32,
}

impl BrushConfig {
    /// The pointer brush the sandbox paints with
    pub const POINTER: BrushConfig = BrushConfig {
        radius: 5,
        probability: 0.5,
    };
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            radius: 2,
            probability: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    /// Fixed seed for reproducible runs; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Simulation ticks per second
    pub tick_rate: f64,
    pub brush: BrushConfig,
    pub materials: MaterialTable,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            tick_rate: DEFAULT_TICK_RATE,
            brush: BrushConfig::POINTER,
            materials: MaterialTable::default(),
        }
    }
}

impl SimConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json)?;
        let config = Self::from_file(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        let materials = self
            .materials
            .iter()
            .map(|(material, props)| {
                (
                    material.name(),
                    MaterialEntry {
                        color: Some(props.base_color.to_hex()),
                        max_speed: Some(props.max_speed),
                        acceleration: Some(props.acceleration),
                    },
                )
            })
            .collect();

        let out = ConfigManifest {
            width: self.width,
            height: self.height,
            seed: self.seed,
            tick_rate: self.tick_rate,
            brush: self.brush,
            materials,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let cells = cell_count(self.width, self.height).unwrap_or(usize::MAX);
        if cells == 0 || cells > MAX_CELLS {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(ConfigError::InvalidTickRate(self.tick_rate));
        }

        if !(0.0..=1.0).contains(&self.brush.probability) {
            return Err(ConfigError::InvalidProbability(self.brush.probability));
        }

        for (material, props) in self.materials.iter() {
            let invalid = |reason: String| ConfigError::InvalidMaterial {
                material: material.name(),
                reason,
            };

            if !(props.max_speed.is_finite() && props.max_speed >= 0.0) {
                return Err(invalid(format!("maxSpeed must be >= 0, got {}", props.max_speed)));
            }
            if !props.acceleration.is_finite() {
                return Err(invalid(format!("acceleration must be finite, got {}", props.acceleration)));
            }
            if material.is_empty() && (props.is_mobile() || props.acceleration != 0.0) {
                return Err(invalid("empty cells cannot move".to_string()));
            }
        }

        Ok(())
    }

    fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut materials = defaults.materials;

        for (material, entry) in file.materials.into_iter() {
            let props = materials.get_mut(material);
            if let Some(hex) = entry.color.as_deref() {
                props.base_color = Rgba::from_hex(hex)?;
            }
            if let Some(max_speed) = entry.max_speed {
                props.max_speed = max_speed;
            }
            if let Some(acceleration) = entry.acceleration {
                props.acceleration = acceleration;
            }
        }

        Ok(Self {
            width: file.width.unwrap_or(defaults.width),
            height: file.height.unwrap_or(defaults.height),
            seed: file.seed,
            tick_rate: file.tick_rate.unwrap_or(defaults.tick_rate),
            brush: file.brush.unwrap_or(defaults.brush),
            materials,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    tick_rate: Option<f64>,
    #[serde(default)]
    brush: Option<BrushConfig>,
    #[serde(default)]
    materials: HashMap<Material, MaterialEntry>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct MaterialEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_speed: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    acceleration: Option<f32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigManifest {
    width: u32,
    height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    tick_rate: f64,
    brush: BrushConfig,
    materials: BTreeMap<&'static str, MaterialEntry>,
}
