use eframe::Storage;
use serde::{Deserialize, Serialize};

use crate::store::DEFAULT_SLOT;
use crate::stroke::Surface;

/// Storage key for the settings themselves
pub const CONFIG_KEY: &str = "knob_sketch.config";

/// Settings read at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields keep their defaults
pub struct SketchConfig {
    /// Storage key holding the sketch collection
    pub storage_key: String,
    /// Canvas size assumed until the real canvas has been laid out
    pub default_surface: [f32; 2],
    /// Cursor travel per pixel of knob drag
    pub knob_sensitivity: f32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_SLOT.to_owned(),
            default_surface: [720.0, 400.0],
            knob_sensitivity: 0.1,
        }
    }
}

impl SketchConfig {
    /// Read the settings from `storage`, falling back to defaults
    pub fn load(storage: Option<&dyn Storage>) -> Self {
        let Some(json) = storage.and_then(|s| s.get_string(CONFIG_KEY)) else {
            return Self::default();
        };
        match serde_json::from_str::<Self>(&json) {
            Ok(config) => config.sanitized(),
            Err(err) => {
                log::warn!("Ignoring unreadable settings: {}", err);
                Self::default()
            }
        }
    }

    pub fn default_surface(&self) -> Surface {
        Surface::new(self.default_surface[0], self.default_surface[1])
    }

    /// Replace unusable values with their defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.storage_key.trim().is_empty() {
            self.storage_key = defaults.storage_key;
        }
        if !self.default_surface.iter().all(|v| v.is_finite() && *v > 0.0) {
            self.default_surface = defaults.default_surface;
        }
        if !(self.knob_sensitivity.is_finite() && self.knob_sensitivity > 0.0) {
            self.knob_sensitivity = defaults.knob_sensitivity;
        }
        self
    }
}
