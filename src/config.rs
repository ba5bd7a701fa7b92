//! Simulation tuning
//!
//! Field bounds and difficulty knobs, loadable from JSON so hosts can ship
//! balance changes without a rebuild. Missing or malformed files fall back
//! to the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Play-field bounds and spawn/score tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Play-field size in pixels
    pub field_width: f32,
    pub field_height: f32,
    /// Spawn interval at zero score
    pub spawn_base_interval_ms: f64,
    /// Spawn interval floor; the ramp never goes below this
    pub spawn_min_interval_ms: f64,
    /// Interval reduction per point of total score
    pub spawn_score_factor: f64,
    /// Points per slice
    pub slice_reward: u64,
    /// Fruits are removed this far past the bottom edge
    pub cull_margin: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            spawn_base_interval_ms: SPAWN_BASE_INTERVAL_MS,
            spawn_min_interval_ms: SPAWN_MIN_INTERVAL_MS,
            spawn_score_factor: SPAWN_SCORE_FACTOR,
            slice_reward: SLICE_REWARD,
            cull_margin: FRUIT_CULL_MARGIN,
        }
    }
}

impl SimConfig {
    /// Load tuning from a JSON file, falling back to defaults on any error
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("loaded tuning from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("invalid tuning file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("could not read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
