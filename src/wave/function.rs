//! Waveform kinds
//!
//! The kind selects which trig function drives the sweep. Tags match the
//! short names used in settings files: `"sin"` and `"cos"`.

use serde::{Deserialize, Serialize};

/// Which function to plot
///
/// `Unknown` is what any unrecognized tag turns into. It is never offered in
/// the UI but still has to sample to something, and that something is a flat
/// line at zero.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum WaveFunction {
    #[default]
    #[serde(rename = "sin")]
    Sine,
    #[serde(rename = "cos")]
    Cosine,
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl WaveFunction {
    /// Kinds a user can pick
    pub fn selectable() -> &'static [WaveFunction] {
        &[WaveFunction::Sine, WaveFunction::Cosine]
    }

    /// Short label for the selector
    pub fn label(&self) -> &'static str {
        match self {
            WaveFunction::Sine => "Sin",
            WaveFunction::Cosine => "Cos",
            WaveFunction::Unknown => "?",
        }
    }

    /// Long name for summaries
    pub fn name(&self) -> &'static str {
        match self {
            WaveFunction::Sine => "Sine",
            WaveFunction::Cosine => "Cosine",
            WaveFunction::Unknown => "Unknown",
        }
    }

    /// Raw (unscaled) value at `radian * frequency`
    pub fn evaluate(&self, radian: f64, frequency: f64) -> f64 {
        match self {
            WaveFunction::Sine => (radian * frequency).sin(),
            WaveFunction::Cosine => (radian * frequency).cos(),
            WaveFunction::Unknown => 0.0,
        }
    }
}
