//! Graph module - everything drawn around the waveform
//!
//! This module provides:
//! - Axis ticks (angles along X, values along Y)
//! - `GraphStyle` for grid, labels and stroke options
//! - SVG export of a complete graph

mod axis;
mod style;
mod svg;

pub use axis::{x_ticks, y_tick_values, y_ticks, Tick, X_TICK_ANGLES};
pub use style::GraphStyle;
pub use svg::{render_wave_graph, MARGIN_X, MARGIN_Y};
