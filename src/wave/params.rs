//! Input and output records for the sampler

use super::function::WaveFunction;

/// Everything needed to plot one waveform
///
/// Nothing is validated here. Values come straight from the UI and may be
/// zero, negative or huge; the sampler decides what each of those means.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WaveParams {
    pub function: WaveFunction,
    pub amplitude: f64,
    /// Cycles across the 0-360° sweep
    pub frequency: f64,
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
}

impl WaveParams {
    pub fn new(function: WaveFunction, amplitude: f64, frequency: f64, width: f64, height: f64) -> Self {
        Self {
            function,
            amplitude,
            frequency,
            width,
            height,
        }
    }
}

/// One sample of the sweep
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SamplePoint {
    /// Degrees, 0 to 360 inclusive
    pub angle: u32,
    /// `raw * amplitude`, rounded to 3 decimals, never `-0`
    pub value: f64,
}
