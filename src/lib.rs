//! wave-viz - sine/cosine waveform visualizer
//!
//! Samples a waveform over a fixed 0..=360° sweep and turns it into canvas
//! coordinates, an SVG path, or a complete SVG graph with grid and labels.
//!
//! ```
//! use wave_viz::wave::{wave_path, WaveFunction, WaveParams};
//!
//! let params = WaveParams::new(WaveFunction::Sine, 1.0, 1.0, 360.0, 200.0);
//! let path = wave_path(&params);
//! assert!(path.starts_with("M 0.000,100.000"));
//! ```

pub mod app;
pub mod controls;
pub mod graph;
pub mod render;
pub mod settings;
pub mod wave;
