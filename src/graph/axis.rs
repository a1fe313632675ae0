//! Axis ticks for the wave graph
//!
//! X ticks are fixed quarter turns of the sweep. Y ticks span
//! `[-amplitude, amplitude]` with a step count that grows with the amplitude.

use crate::wave::{SWEEP_DEGREES, VERTICAL_SCALE};

/// Angles labelled on the X axis
pub const X_TICK_ANGLES: [u32; 5] = [0, 90, 180, 270, 360];

/// A labelled position along one axis
#[derive(Clone, PartialEq, Debug)]
pub struct Tick {
    /// Canvas coordinate (x for the X axis, y for the Y axis)
    pub position: f64,
    pub label: String,
}

/// Y tick values, top to bottom
///
/// Five ticks up to amplitude 1, then `ceil(2a) + 1` capped at nine. Values
/// are rounded to one decimal, halves toward positive infinity.
pub fn y_tick_values(amplitude: f64) -> Vec<f64> {
    let steps: usize = if amplitude <= 1.0 {
        5
    } else {
        // NaN and infinity fall through to the cap
        ((amplitude * 2.0).ceil() + 1.0).min(9.0) as usize
    };
    let steps = steps.clamp(2, 9);

    (0..steps)
        .map(|i| {
            let value = amplitude - (i as f64 * (2.0 * amplitude)) / (steps - 1) as f64;
            // Halves round up, so -0.25 becomes -0.2
            (value * 10.0 + 0.5).floor() / 10.0 + 0.0
        })
        .collect()
}

/// X axis ticks for a canvas `width` pixels wide
pub fn x_ticks(width: f64) -> Vec<Tick> {
    X_TICK_ANGLES
        .iter()
        .map(|&angle| Tick {
            position: angle as f64 / SWEEP_DEGREES as f64 * width,
            label: format!("{}°", angle),
        })
        .collect()
}

/// Y axis ticks for a canvas `height` pixels high
///
/// A tick value `v` lands where a unit-amplitude wave reaching `v` would.
pub fn y_ticks(amplitude: f64, height: f64) -> Vec<Tick> {
    let y_center = height / 2.0;
    y_tick_values(amplitude)
        .into_iter()
        .map(|value| Tick {
            position: y_center - value * y_center * VERTICAL_SCALE,
            label: format_tick(value),
        })
        .collect()
}

/// Shortest decimal form: `2`, `0.5`, `-1`
fn format_tick(value: f64) -> String {
    format!("{}", value)
}
