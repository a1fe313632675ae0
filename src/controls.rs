//! Control panel state
//!
//! Holds the values the user edits (wave type, frequency, amplitude) and
//! keeps them inside the ranges the panel offers. The sampler itself accepts
//! any number; clamping happens only here, at the input edge.

use std::fmt;
use std::ops::RangeInclusive;

use thiserror::Error;

use crate::wave::{WaveFunction, WaveParams};

/// Frequency range offered by the panel
pub const FREQUENCY_RANGE: RangeInclusive<f64> = 0.0..=10.0;

/// Amplitude range offered by the panel
pub const AMPLITUDE_RANGE: RangeInclusive<f64> = 0.0..=5.0;

/// Increment for both numeric inputs
pub const INPUT_STEP: f64 = 0.1;

/// Errors from parsing text typed into a numeric field
#[derive(Error, Debug, PartialEq)]
pub enum ControlError {
    #[error("{field}: {input:?} is not a number")]
    InvalidNumber { field: Field, input: String },
}

/// Numeric fields of the panel
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Frequency,
    Amplitude,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Frequency => "Frequency",
            Field::Amplitude => "Amplitude",
        }
    }

    pub fn range(&self) -> RangeInclusive<f64> {
        match self {
            Field::Frequency => FREQUENCY_RANGE,
            Field::Amplitude => AMPLITUDE_RANGE,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse the text of a numeric field
///
/// Surrounding whitespace is ignored. Empty text is an error rather than 0.
pub fn parse_input(field: Field, text: &str) -> Result<f64, ControlError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ControlError::InvalidNumber {
            field,
            input: text.to_string(),
        })
}

/// Current control panel values
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WaveControls {
    function: WaveFunction,
    frequency: f64,
    amplitude: f64,
}

impl Default for WaveControls {
    fn default() -> Self {
        Self {
            function: WaveFunction::Sine,
            frequency: 1.0,
            amplitude: 1.0,
        }
    }
}

impl WaveControls {
    /// Build from raw values, clamping each one
    pub fn new(function: WaveFunction, frequency: f64, amplitude: f64) -> Self {
        let mut controls = Self {
            function,
            ..Self::default()
        };
        controls.set_frequency(frequency);
        controls.set_amplitude(amplitude);
        controls
    }

    pub fn function(&self) -> WaveFunction {
        self.function
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn set_function(&mut self, function: WaveFunction) {
        if function != self.function {
            log::debug!("Wave type: {} -> {}", self.function.name(), function.name());
        }
        self.function = function;
    }

    /// Set the frequency, clamped to [`FREQUENCY_RANGE`]
    ///
    /// Returns the value actually stored.
    pub fn set_frequency(&mut self, frequency: f64) -> f64 {
        self.frequency = clamp_input(Field::Frequency, frequency, self.frequency);
        self.frequency
    }

    /// Set the amplitude, clamped to [`AMPLITUDE_RANGE`]
    ///
    /// Returns the value actually stored.
    pub fn set_amplitude(&mut self, amplitude: f64) -> f64 {
        self.amplitude = clamp_input(Field::Amplitude, amplitude, self.amplitude);
        self.amplitude
    }

    /// Parse and apply text typed into a numeric field
    pub fn set_from_text(&mut self, field: Field, text: &str) -> Result<f64, ControlError> {
        let value = parse_input(field, text)?;
        Ok(match field {
            Field::Frequency => self.set_frequency(value),
            Field::Amplitude => self.set_amplitude(value),
        })
    }

    /// Parameters for a canvas of the given size
    pub fn to_params(&self, width: f64, height: f64) -> WaveParams {
        WaveParams::new(self.function, self.amplitude, self.frequency, width, height)
    }
}

/// "Current Parameters" summary line
impl fmt::Display for WaveControls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wave Type: {} | Frequency: {} | Amplitude: {}",
            self.function.name(),
            self.frequency,
            self.amplitude
        )
    }
}

fn clamp_input(field: Field, value: f64, previous: f64) -> f64 {
    if !value.is_finite() {
        log::warn!("Ignoring non-finite {} {}", field, value);
        return previous;
    }
    let range = field.range();
    let clamped = value.clamp(*range.start(), *range.end());
    if clamped != value {
        log::debug!("{} {} clamped to {}", field, value, clamped);
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let controls = WaveControls::default();
        assert_eq!(controls.function(), WaveFunction::Sine);
        assert_eq!(controls.frequency(), 1.0);
        assert_eq!(controls.amplitude(), 1.0);
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input(Field::Frequency, "2.5"), Ok(2.5));
        assert_eq!(parse_input(Field::Amplitude, "3.0"), Ok(3.0));
        assert_eq!(parse_input(Field::Amplitude, " 1.5 "), Ok(1.5));
        assert!(parse_input(Field::Frequency, "").is_err());
        assert!(parse_input(Field::Frequency, "abc").is_err());
        assert!(parse_input(Field::Frequency, "inf").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = parse_input(Field::Amplitude, "x").unwrap_err();
        assert_eq!(err.to_string(), "Amplitude: \"x\" is not a number");
    }

    #[test]
    fn test_setters_clamp() {
        let mut controls = WaveControls::default();
        assert_eq!(controls.set_frequency(12.0), 10.0);
        assert_eq!(controls.set_frequency(-1.0), 0.0);
        assert_eq!(controls.set_amplitude(7.5), 5.0);
        assert_eq!(controls.set_amplitude(-0.5), 0.0);
        assert_eq!(controls.set_amplitude(2.3), 2.3);
    }

    #[test]
    fn test_non_finite_keeps_previous() {
        let mut controls = WaveControls::default();
        controls.set_frequency(4.0);
        assert_eq!(controls.set_frequency(f64::NAN), 4.0);
        assert_eq!(controls.set_amplitude(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_set_from_text() {
        let mut controls = WaveControls::default();
        assert_eq!(controls.set_from_text(Field::Frequency, "2.5"), Ok(2.5));
        assert_eq!(controls.set_from_text(Field::Amplitude, "9"), Ok(5.0));
        assert!(controls.set_from_text(Field::Amplitude, "?").is_err());
        // Failed parse leaves the value alone
        assert_eq!(controls.amplitude(), 5.0);
    }

    #[test]
    fn test_new_clamps() {
        let controls = WaveControls::new(WaveFunction::Cosine, 20.0, -3.0);
        assert_eq!(controls.function(), WaveFunction::Cosine);
        assert_eq!(controls.frequency(), 10.0);
        assert_eq!(controls.amplitude(), 0.0);
    }

    #[test]
    fn test_to_params() {
        let mut controls = WaveControls::default();
        controls.set_function(WaveFunction::Cosine);
        controls.set_amplitude(1.5);
        let params = controls.to_params(600.0, 400.0);
        assert_eq!(params, WaveParams::new(WaveFunction::Cosine, 1.5, 1.0, 600.0, 400.0));
    }

    #[test]
    fn test_summary() {
        let controls = WaveControls::new(WaveFunction::Cosine, 2.0, 1.5);
        assert_eq!(controls.to_string(), "Wave Type: Cosine | Frequency: 2 | Amplitude: 1.5");
    }
}
