//! SVG export - write a complete wave graph as an SVG document
//!
//! The document wraps the sampler's path data with:
//! - a margin for axis labels (30px left/right, 20px top/bottom)
//! - optional dashed grid lines and a center line
//! - optional X (angle) and Y (value) labels
//!
//! All plot content lives in a group translated by the margins, so its
//! coordinates are the same canvas coordinates the sampler produces.

use std::fmt::Write as _;

use super::axis::{x_ticks, y_ticks};
use super::style::GraphStyle;
use crate::wave::{wave_path, WaveParams};

/// Horizontal margin on each side
pub const MARGIN_X: f64 = 30.0;
/// Vertical margin on each side
pub const MARGIN_Y: f64 = 20.0;

const GRID_COLOR: &str = "#ddd";
const GRID_DASH: &str = "4 2";
const AXIS_COLOR: &str = "#666";
const LABEL_FONT_SIZE: u32 = 12;

/// Render the waveform and its decorations as a standalone SVG document
///
/// A non-positive or NaN width or height still yields a valid document: the
/// frame, grid and labels are laid out on an empty canvas and the waveform
/// path is whatever the sampler produces (empty when width <= 0).
pub fn render_wave_graph(params: &WaveParams, style: &GraphStyle) -> String {
    // Layout never goes below an empty canvas; max() also maps NaN to 0
    let width = params.width.max(0.0);
    let height = params.height.max(0.0);
    let outer_width = width + MARGIN_X * 2.0;
    let outer_height = height + MARGIN_Y * 2.0;
    let y_center = height / 2.0;

    let mut svg = String::with_capacity(16 * 1024);

    // Writing into a String cannot fail
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}""#,
        w = outer_width,
        h = outer_height,
    );
    if !style.class_name.is_empty() {
        let _ = write!(svg, r#" class="{}""#, escape_attr(&style.class_name));
    }
    svg.push('>');

    let _ = write!(svg, r#"<g transform="translate({},{})">"#, MARGIN_X, MARGIN_Y);

    if style.show_grid {
        svg.push_str(r#"<g class="grid">"#);
        for tick in x_ticks(width) {
            write_line(&mut svg, tick.position, 0.0, tick.position, height, GRID_COLOR, true);
        }
        for tick in y_ticks(params.amplitude, height) {
            write_line(&mut svg, 0.0, tick.position, width, tick.position, GRID_COLOR, true);
        }
        // Center line
        write_line(&mut svg, 0.0, y_center, width, y_center, AXIS_COLOR, false);
        svg.push_str("</g>");
    }

    if style.show_axis_labels {
        svg.push_str(r#"<g class="axis-labels">"#);
        for tick in x_ticks(width) {
            let _ = write!(
                svg,
                r#"<text class="x-label" x="{}" y="{}" text-anchor="middle" font-size="{}" fill="{}">{}</text>"#,
                tick.position,
                height + 16.0,
                LABEL_FONT_SIZE,
                AXIS_COLOR,
                escape_text(&tick.label),
            );
        }
        for tick in y_ticks(params.amplitude, height) {
            let _ = write!(
                svg,
                r#"<text class="y-label" x="-6" y="{}" text-anchor="end" dominant-baseline="middle" font-size="{}" fill="{}">{}</text>"#,
                tick.position,
                LABEL_FONT_SIZE,
                AXIS_COLOR,
                escape_text(&tick.label),
            );
        }
        svg.push_str("</g>");
    }

    let _ = write!(
        svg,
        r#"<path class="wave" d="{}" stroke="{}" stroke-width="{}" fill="none"/>"#,
        wave_path(params),
        escape_attr(&style.stroke_color),
        style.stroke_width,
    );

    svg.push_str("</g></svg>");

    log::debug!(
        "Rendered {} wave graph ({}x{}, {} bytes)",
        params.function.name(),
        outer_width,
        outer_height,
        svg.len()
    );

    svg
}

fn write_line(svg: &mut String, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, dashed: bool) {
    let _ = write!(
        svg,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}""#,
        x1, y1, x2, y2, color
    );
    if dashed {
        let _ = write!(svg, r#" stroke-dasharray="{}""#, GRID_DASH);
    }
    svg.push_str("/>");
}

/// Escape a value for use inside a double-quoted attribute
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape character data
fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::WaveFunction;

    fn sine(amplitude: f64, width: f64, height: f64) -> WaveParams {
        WaveParams::new(WaveFunction::Sine, amplitude, 1.0, width, height)
    }

    /// Text content of every `<text class="{class}">` element
    fn labels(svg: &str, class: &str) -> Vec<String> {
        let open = format!(r#"<text class="{}""#, class);
        svg.split(&open)
            .skip(1)
            .filter_map(|rest| {
                let start = rest.find('>')? + 1;
                let end = rest.find("</text>")?;
                Some(rest[start..end].to_string())
            })
            .collect()
    }

    /// The `d` attribute of the waveform path
    fn path_data(svg: &str) -> &str {
        let start = svg.find(r#"<path class="wave" d=""#).unwrap() + r#"<path class="wave" d=""#.len();
        let len = svg[start..].find('"').unwrap();
        &svg[start..start + len]
    }

    #[test]
    fn test_document_size_includes_margins() {
        let svg = render_wave_graph(&sine(1.0, 400.0, 200.0), &GraphStyle::default());
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="460""#));
        assert!(svg.contains(r#"height="240""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_path_uses_sampler_output() {
        let params = sine(1.0, 400.0, 200.0);
        let svg = render_wave_graph(&params, &GraphStyle::default());
        assert_eq!(path_data(&svg), wave_path(&params));
        assert!(path_data(&svg).starts_with("M 0.000,100.000"));

        let cosine = WaveParams::new(WaveFunction::Cosine, 1.0, 1.0, 400.0, 200.0);
        let svg = render_wave_graph(&cosine, &GraphStyle::default());
        assert!(path_data(&svg).starts_with("M 0.000,20.000"));
    }

    #[test]
    fn test_grid_has_center_line() {
        let svg = render_wave_graph(&sine(1.0, 400.0, 200.0), &GraphStyle::default());
        assert!(svg.contains(r#"y1="100" x2="400" y2="100""#));
        assert!(svg.contains(r#"stroke-dasharray="4 2""#));
    }

    #[test]
    fn test_grid_can_be_hidden() {
        let style = GraphStyle {
            show_grid: false,
            ..GraphStyle::default()
        };
        let svg = render_wave_graph(&sine(1.0, 400.0, 200.0), &style);
        assert!(!svg.contains("<line"));
    }

    #[test]
    fn test_stroke_styling() {
        let style = GraphStyle {
            stroke_color: "#ff0000".to_string(),
            stroke_width: 3.0,
            ..GraphStyle::default()
        };
        let svg = render_wave_graph(&sine(1.0, 400.0, 200.0), &style);
        assert!(svg.contains(r##"stroke="#ff0000" stroke-width="3" fill="none""##));
    }

    #[test]
    fn test_class_name() {
        let style = GraphStyle {
            class_name: "custom-wave-graph".to_string(),
            ..GraphStyle::default()
        };
        let svg = render_wave_graph(&sine(1.0, 400.0, 200.0), &style);
        assert!(svg.contains(r#"class="custom-wave-graph""#));

        let svg = render_wave_graph(&sine(1.0, 400.0, 200.0), &GraphStyle::default());
        let root = &svg[..svg.find('>').unwrap()];
        assert!(!root.contains("class="));
    }

    #[test]
    fn test_zero_width_renders_empty_path() {
        let svg = render_wave_graph(&sine(1.0, 0.0, 200.0), &GraphStyle::default());
        assert!(svg.starts_with("<svg "));
        assert_eq!(path_data(&svg), "");
    }

    #[test]
    fn test_axis_labels() {
        let svg = render_wave_graph(&sine(1.0, 400.0, 200.0), &GraphStyle::default());
        assert_eq!(labels(&svg, "x-label"), ["0°", "90°", "180°", "270°", "360°"]);
        assert_eq!(labels(&svg, "y-label").len(), 5);

        let svg = render_wave_graph(&sine(2.0, 400.0, 200.0), &GraphStyle::default());
        assert_eq!(labels(&svg, "y-label"), ["2", "1", "0", "-1", "-2"]);
    }

    #[test]
    fn test_axis_labels_can_be_hidden() {
        let style = GraphStyle {
            show_axis_labels: false,
            ..GraphStyle::default()
        };
        let svg = render_wave_graph(&sine(1.0, 400.0, 200.0), &style);
        assert!(labels(&svg, "x-label").is_empty());
        assert!(labels(&svg, "y-label").is_empty());
    }

    #[test]
    fn test_attribute_escaping() {
        let style = GraphStyle {
            stroke_color: r#"red" onload="x"#.to_string(),
            class_name: "a<b>&c".to_string(),
            ..GraphStyle::default()
        };
        let svg = render_wave_graph(&sine(1.0, 400.0, 200.0), &style);
        assert!(svg.contains(r#"stroke="red&quot; onload=&quot;x""#));
        assert!(svg.contains(r#"class="a&lt;b&gt;&amp;c""#));
    }

    #[test]
    fn test_output_parses_as_svg() {
        for params in [
            sine(1.0, 400.0, 200.0),
            sine(2.0, 600.0, 400.0),
            WaveParams::new(WaveFunction::Cosine, 0.5, 1.5, 360.5, 200.5),
            sine(1.0, 0.0, 200.0),
            sine(1.0, -100.0, 200.0),
            sine(1.0, 400.0, -100.0),
            sine(1.0, f64::NAN, 200.0),
        ] {
            let svg = render_wave_graph(&params, &GraphStyle::default());
            let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default())
                .expect("rendered graph should be valid SVG");
            assert!((tree.size().width() as f64 - (params.width.max(0.0) + 60.0)).abs() < 0.01);
            assert!((tree.size().height() as f64 - (params.height.max(0.0) + 40.0)).abs() < 0.01);
        }
    }

    #[test]
    fn test_negative_canvas_is_clamped() {
        let svg = render_wave_graph(&sine(1.0, -100.0, 200.0), &GraphStyle::default());
        assert!(svg.contains(r#"width="60" height="240" viewBox="0 0 60 240""#));
        assert_eq!(path_data(&svg), "");

        let svg = render_wave_graph(&sine(1.0, 400.0, -100.0), &GraphStyle::default());
        assert!(svg.contains(r#"width="460" height="40""#));

        let svg = render_wave_graph(&sine(1.0, f64::NAN, 200.0), &GraphStyle::default());
        assert!(!svg.contains("NaN"));
    }
}
