//! Presentation options for the wave graph

use serde::{Deserialize, Serialize};

/// How the graph is drawn around the waveform
///
/// Fields use `#[serde(default)]` so a settings file can override any
/// subset of them.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphStyle {
    /// Dashed grid lines plus the center line
    pub show_grid: bool,

    /// Angle labels under the X axis and value labels left of the Y axis
    pub show_axis_labels: bool,

    /// Any SVG color (`royalblue`, `#ff0000`, ...)
    ///
    /// The SVG export writes it as given. The on-screen plot understands
    /// `#rgb`, `#rrggbb` and a short list of names (see
    /// [`css_color`](crate::render::css_color)); anything else is drawn in
    /// royalblue.
    pub stroke_color: String,

    /// Waveform line width in pixels
    pub stroke_width: f64,

    /// Extra CSS class on the root `<svg>` element
    pub class_name: String,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_axis_labels: true,
            stroke_color: "royalblue".to_string(),
            stroke_width: 2.0,
            class_name: String::new(),
        }
    }
}
