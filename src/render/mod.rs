//! Render module - UI components for visualization
//!
//! This module provides:
//! - Wave plot widget (grid, axis labels, waveform)

mod wave_plot;

pub use wave_plot::{css_color, PlotColors, WavePlot};
