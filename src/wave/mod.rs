//! Wave module - sampling sine/cosine waves onto a canvas
//!
//! This module provides:
//! - `WaveFunction` for choosing what to plot
//! - `WaveParams` and `SamplePoint` records
//! - The sampler: raw samples, canvas coordinates and SVG path data

mod function;
mod params;
mod sampler;

pub use function::WaveFunction;
pub use params::{SamplePoint, WaveParams};
pub use sampler::{wave_coords, wave_path, wave_samples, SWEEP_DEGREES, VERTICAL_SCALE};
