//! Capture tunables and profile persistence.
//!
//! The three constants that shape pointer translation live in
//! [`CaptureSettings`]: the device-independent prescale, the grabbed-mode
//! speed multiplier, and the gesture scroll threshold. Profiles load from
//! TOML files and round-trip through JSON strings for launcher-side storage.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default per-axis gesture motion required for one scroll tick.
pub const DEFAULT_SCROLL_THRESHOLD: f32 = 1.0;

/// Tunable constants for pointer translation.
///
/// Missing fields take their defaults, so partial profiles stay loadable as
/// new tunables appear.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureSettings {
    /// Device-independent prescale applied to every motion delta, exactly
    /// once per event. Launchers derive this from display density (one dp
    /// in pixels).
    pub mouse_prescale: f32,

    /// Additional multiplier applied in grabbed mode (in-game mouse speed).
    pub scale_factor: f32,

    /// Per-axis gesture motion, in pre-scaled units, required for one
    /// scroll tick.
    pub scroll_threshold: f32,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            mouse_prescale: 1.0,
            scale_factor: 1.0,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

/// Errors from loading or storing capture settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON profile: {0}")]
    Json(#[from] serde_json::Error),
}

impl CaptureSettings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    /// Parse settings from a JSON profile string.
    pub fn from_json_str(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize settings to a JSON profile string.
    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }
}
