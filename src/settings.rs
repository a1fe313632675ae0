use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controls::WaveControls;
use crate::graph::GraphStyle;
use crate::wave::WaveFunction;

/// Errors reading a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Returns the path to the settings file: `~/.config/wave-viz/settings.json`
pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("wave-viz");
    path.push("settings.json");
    path
}

/// Startup settings.
///
/// Read once as JSON from the platform config directory; never written back.
/// Fields use `#[serde(default)]` so a file only needs the keys it changes.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Wave
    pub function: WaveFunction,
    pub frequency: f64,
    pub amplitude: f64,

    // Canvas
    pub graph_width: f64,
    pub graph_height: f64,

    // Display
    pub style: GraphStyle,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            function: WaveFunction::Sine,
            frequency: 1.0,
            amplitude: 1.0,

            graph_width: 600.0,
            graph_height: 400.0,

            style: GraphStyle::default(),
        }
    }
}

impl AppSettings {
    /// Parse settings from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a specific file.
    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load settings from the config directory, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match Self::read(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Initial control panel values, clamped to the panel's ranges.
    pub fn controls(&self) -> WaveControls {
        WaveControls::new(self.function, self.frequency, self.amplitude)
    }
}
