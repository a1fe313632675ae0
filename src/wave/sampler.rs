//! Wave sampler - the 0..=360° sweep
//!
//! Turns [`WaveParams`] into either raw samples (angle, value) or canvas
//! coordinates ready to be drawn. Both forms walk the same fixed sweep of
//! 361 one-degree steps.
//!
//! ## Canvas coordinates
//!
//! SVG style: origin top-left, Y grows downward.
//!
//! ```text
//! x = angle / 360 * width
//! y = height / 2 - raw * amplitude * (height / 2 * 0.8)
//! ```
//!
//! The 0.8 factor leaves 20% headroom above and below the peak at
//! amplitude 1. Larger amplitudes run off the canvas; nothing is clamped.

use std::f64::consts::PI;

use super::params::{SamplePoint, WaveParams};

/// Last angle of the sweep (inclusive)
pub const SWEEP_DEGREES: u32 = 360;

/// Share of the half-height a unit amplitude occupies
pub const VERTICAL_SCALE: f64 = 0.8;

/// Round to 3 decimals and drop the sign of zero
fn round3(value: f64) -> f64 {
    // -0.0 + 0.0 == +0.0
    (value * 1000.0).round() / 1000.0 + 0.0
}

/// `true` when the sweep produces no output at all
fn is_degenerate(width: f64) -> bool {
    // Also catches NaN
    !(width > 0.0)
}

/// Iterate the sweep as (angle, raw) pairs
fn sweep(params: &WaveParams) -> impl Iterator<Item = (u32, f64)> + '_ {
    (0..=SWEEP_DEGREES).map(move |angle| {
        let radian = angle as f64 * (PI / 180.0);
        (angle, params.function.evaluate(radian, params.frequency))
    })
}

/// Sample the waveform at every degree
///
/// Returns an empty vector when `width <= 0`, otherwise exactly 361 points.
pub fn wave_samples(params: &WaveParams) -> Vec<SamplePoint> {
    if is_degenerate(params.width) {
        log::trace!("width {} <= 0, no samples", params.width);
        return Vec::new();
    }

    sweep(params)
        .map(|(angle, raw)| SamplePoint {
            angle,
            value: round3(raw * params.amplitude),
        })
        .collect()
}

/// Canvas coordinates for every degree, unrounded
///
/// Shared by the SVG path writer and the egui plot widget.
pub fn wave_coords(params: &WaveParams) -> Vec<(f64, f64)> {
    if is_degenerate(params.width) {
        return Vec::new();
    }

    let y_center = params.height / 2.0;
    let y_scale = y_center * VERTICAL_SCALE;

    sweep(params)
        .map(|(angle, raw)| {
            let x = angle as f64 / SWEEP_DEGREES as f64 * params.width;
            let y = y_center - raw * params.amplitude * y_scale;
            (x, y)
        })
        .collect()
}

/// Build the SVG `d` attribute for the waveform
///
/// Format: `M x0,y0 L x1,y1 L ... L xN,yN`, every coordinate with 3
/// decimals. Empty string when `width <= 0`.
pub fn wave_path(params: &WaveParams) -> String {
    let coords = wave_coords(params);
    let mut points = coords.iter().map(|&(x, y)| format_pair(x, y));

    let Some(first) = points.next() else {
        return String::new();
    };

    let mut path = String::with_capacity(coords.len() * 18);
    path.push_str("M ");
    path.push_str(&first);
    for point in points {
        path.push_str(" L ");
        path.push_str(&point);
    }
    path
}

/// `x,y` with 3 decimals each
fn format_pair(x: f64, y: f64) -> String {
    format!("{},{}", fixed3(x), fixed3(y))
}

/// Format with 3 decimals, rounding exact ties away from zero
///
/// `{:.3}` rounds an exact tie such as 0.0625 to even (`0.062`); canvas
/// coordinates round it up (`0.063`). A double can only sit exactly on a
/// third-decimal tie when it is an odd multiple of 1/16.
fn fixed3(value: f64) -> String {
    let sixteenths = value * 16.0;
    let is_tie = sixteenths.fract() == 0.0
        && sixteenths.abs() < (1u64 << 46) as f64
        && (sixteenths % 2.0).abs() == 1.0;

    if is_tie {
        let thousandths = ((sixteenths.abs() * 125.0 + 1.0) / 2.0).copysign(value);
        return format!("{:.3}", thousandths / 1000.0);
    }

    // Adding 0.0 keeps an exact -0.0 from printing as "-0.000"
    format!("{:.3}", value + 0.0)
}
