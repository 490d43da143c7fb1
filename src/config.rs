// src/config.rs - Tunables read by every tick of the simulation

use crate::constants::{DEFAULT_HEAT_SCALE, DEFAULT_SUPERCONDUCTION_TILE_LOSS};
use crate::error::{AtmosError, AtmosResult};
use crate::gas::SpecificHeats;
use crate::gas_mixture::GasMixture;
use crate::reactions::ReactionKind;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Snapshot of the atmospherics settings. Operators read it once per tick;
/// changes go through `Simulation::reload_config`.
///
/// Every field has a default, so `{}` is a valid config:
///
/// ```
/// use atmos_reactions::config::AtmosConfig;
///
/// let config = AtmosConfig::from_json_str(r#"{ "heat_scale": 4.0 }"#).unwrap();
/// assert_eq!(config.heat_scale, 4.0);
/// assert!(!config.parallel_reactions);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosConfig {
    /// Divides specific heats and reaction enthalpies.
    pub heat_scale: f32,
    /// Heat lost per tile during superconduction. Exposed for hosts; the heat
    /// exchanger does not read it.
    pub superconduction_tile_loss: f32,
    pub specific_heats: SpecificHeats,
    pub disabled_reactions: Vec<ReactionKind>,
    /// Run the catalog over separate mixtures on the rayon pool.
    pub parallel_reactions: bool,
}

impl Default for AtmosConfig {
    fn default() -> Self {
        Self {
            heat_scale: DEFAULT_HEAT_SCALE,
            superconduction_tile_loss: DEFAULT_SUPERCONDUCTION_TILE_LOSS,
            specific_heats: SpecificHeats::default(),
            disabled_reactions: Vec::new(),
            parallel_reactions: false,
        }
    }
}

impl AtmosConfig {
    pub fn from_json_str(json: &str) -> AtmosResult<Self> {
        let config: AtmosConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> AtmosResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| AtmosError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> AtmosResult<()> {
        if !(self.heat_scale.is_finite() && self.heat_scale > 0.0) {
            return Err(reject(format!("heat_scale must be positive, got {}", self.heat_scale)));
        }
        if !self.superconduction_tile_loss.is_finite() || self.superconduction_tile_loss < 0.0 {
            return Err(reject(format!(
                "superconduction_tile_loss must be non-negative, got {}",
                self.superconduction_tile_loss
            )));
        }
        for (gas, heat) in self.specific_heats.iter() {
            if !heat.is_finite() || heat < 0.0 {
                return Err(reject(format!(
                    "specific heat of {} must be non-negative, got {}",
                    gas.as_str(),
                    heat
                )));
            }
        }
        Ok(())
    }

    pub fn is_enabled(&self, kind: ReactionKind) -> bool {
        !self.disabled_reactions.contains(&kind)
    }

    /// Heat capacity of `mixture` under this config. Unscaled values are what
    /// a host compares against real-world figures.
    pub fn heat_capacity(&self, mixture: &GasMixture, apply_scaling: bool) -> f32 {
        let scale = if apply_scaling { self.heat_scale } else { 1.0 };
        mixture.heat_capacity(&self.specific_heats, scale)
    }
}

fn reject(message: String) -> AtmosError {
    warn!("rejected atmos config: {message}");
    AtmosError::InvalidConfig(message)
}
