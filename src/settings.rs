//! Generation budgets and tuning
//!
//! Persisted as JSON: LocalStorage on the web, a file named by `PUZZLE_KERNEL_SETTINGS`
//! natively. Missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Retry budgets for every generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelSettings {
    /// Obstacle layouts tried before the open-board fallback
    pub maze_max_attempts: u32,
    /// Mirror layouts tried before the straight-beam fallback
    pub laser_max_attempts: u32,
    /// Distractor draws before deterministic padding
    pub option_max_attempts: u32,
    /// Random walks tried before the serpentine fallback
    pub trail_max_attempts: u32,
    /// Ray step budget factor (budget = factor × size²)
    pub ray_step_factor: usize,
    /// Numeric distractors lie within correct ± spread
    pub numeric_spread: i64,
}

impl Default for KernelSettings {
    fn default() -> Self {
        Self {
            maze_max_attempts: MAZE_MAX_ATTEMPTS,
            laser_max_attempts: LASER_MAX_ATTEMPTS,
            option_max_attempts: OPTION_MAX_ATTEMPTS,
            trail_max_attempts: TRAIL_MAX_ATTEMPTS,
            ray_step_factor: RAY_STEP_FACTOR,
            numeric_spread: NUMERIC_SPREAD,
        }
    }
}

impl KernelSettings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "puzzle_kernel_settings";

    /// Environment variable naming a settings file (native only)
    pub const ENV_VAR: &'static str = "PUZZLE_KERNEL_SETTINGS";

    /// Parse settings JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = Self::from_json(&json) {
                    log::info!("Loaded kernel settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default kernel settings");
        Self::default()
    }

    /// Load settings from the file named by `PUZZLE_KERNEL_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded kernel settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}
