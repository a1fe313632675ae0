//! Wave plot widget
//!
//! Draws the same graph as the SVG export, but straight into an egui
//! painter:
//!
//! - Canvas coordinates come from [`wave_coords`], so the on-screen curve
//!   and the exported path agree point for point
//! - The canvas sits inside the same 30/20 px margins as the SVG
//! - Nothing is clipped: amplitudes above 1 run past the canvas edge

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};

use crate::graph::{x_ticks, y_ticks, GraphStyle, MARGIN_X, MARGIN_Y};
use crate::wave::{wave_coords, WaveParams};

/// Colors for the parts the style does not cover
#[derive(Clone)]
pub struct PlotColors {
    pub background: Color32,
    pub grid: Color32,
    pub axis: Color32,
    /// Used when the style's stroke color can't be parsed
    pub fallback_stroke: Color32,
}

impl Default for PlotColors {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            grid: Color32::from_rgb(0xdd, 0xdd, 0xdd),
            axis: Color32::from_rgb(0x66, 0x66, 0x66),
            fallback_stroke: Color32::from_rgb(65, 105, 225), // royalblue
        }
    }
}

/// Wave graph widget
#[derive(Default)]
pub struct WavePlot {
    pub colors: PlotColors,
}

impl WavePlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map canvas coordinates to screen space
    fn to_screen(canvas: Rect, x: f64, y: f64) -> Pos2 {
        Pos2::new(canvas.left() + x as f32, canvas.top() + y as f32)
    }

    /// Draw the graph
    ///
    /// # Arguments
    /// * `ui` - The egui UI context
    /// * `params` - Wave and canvas size
    /// * `style` - Grid, labels and stroke options
    ///
    /// # Returns
    /// The response from the widget
    pub fn show(&self, ui: &mut egui::Ui, params: &WaveParams, style: &GraphStyle) -> egui::Response {
        let width = params.width.max(0.0) as f32;
        let height = params.height.max(0.0) as f32;
        let outer = Vec2::new(width + MARGIN_X as f32 * 2.0, height + MARGIN_Y as f32 * 2.0);

        let (response, painter) = ui.allocate_painter(outer, egui::Sense::hover());
        let rect = response.rect;
        let canvas = Rect::from_min_size(
            rect.min + Vec2::new(MARGIN_X as f32, MARGIN_Y as f32),
            Vec2::new(width, height),
        );

        painter.rect_filled(rect, 4.0, self.colors.background);

        if style.show_grid {
            self.draw_grid(&painter, canvas, params);
        }

        if style.show_axis_labels {
            self.draw_labels(&painter, canvas, params);
        }

        self.draw_wave(&painter, canvas, params, style);

        response
    }

    /// Dashed lines at every tick plus a solid center line
    fn draw_grid(&self, painter: &egui::Painter, canvas: Rect, params: &WaveParams) {
        let grid = Stroke::new(1.0, self.colors.grid);

        for tick in x_ticks(params.width) {
            let top = Self::to_screen(canvas, tick.position, 0.0);
            let bottom = Self::to_screen(canvas, tick.position, params.height);
            painter.extend(egui::Shape::dashed_line(&[top, bottom], grid, 4.0, 2.0));
        }

        for tick in y_ticks(params.amplitude, params.height) {
            let left = Self::to_screen(canvas, 0.0, tick.position);
            let right = Self::to_screen(canvas, params.width, tick.position);
            painter.extend(egui::Shape::dashed_line(&[left, right], grid, 4.0, 2.0));
        }

        let center = params.height / 2.0;
        painter.line_segment(
            [
                Self::to_screen(canvas, 0.0, center),
                Self::to_screen(canvas, params.width, center),
            ],
            Stroke::new(1.0, self.colors.axis),
        );
    }

    fn draw_labels(&self, painter: &egui::Painter, canvas: Rect, params: &WaveParams) {
        let font = FontId::proportional(12.0);

        for tick in x_ticks(params.width) {
            let pos = Self::to_screen(canvas, tick.position, params.height) + Vec2::new(0.0, 4.0);
            painter.text(pos, Align2::CENTER_TOP, &tick.label, font.clone(), self.colors.axis);
        }

        for tick in y_ticks(params.amplitude, params.height) {
            let pos = Self::to_screen(canvas, 0.0, tick.position) - Vec2::new(6.0, 0.0);
            painter.text(pos, Align2::RIGHT_CENTER, &tick.label, font.clone(), self.colors.axis);
        }
    }

    fn draw_wave(&self, painter: &egui::Painter, canvas: Rect, params: &WaveParams, style: &GraphStyle) {
        let points: Vec<Pos2> = wave_coords(params)
            .into_iter()
            .map(|(x, y)| Self::to_screen(canvas, x, y))
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .collect();

        if points.len() < 2 {
            return;
        }

        let color = css_color(&style.stroke_color).unwrap_or_else(|| {
            log::debug!("Unsupported stroke color {:?}", style.stroke_color);
            self.colors.fallback_stroke
        });
        let stroke = Stroke::new(style.stroke_width as f32, color);

        painter.add(egui::Shape::line(points, stroke));
    }
}

/// Parse `#rgb`, `#rrggbb` or one of a few CSS color names
///
/// Only the names in the table below are known; other CSS names return
/// `None` and the plot falls back to [`PlotColors::fallback_stroke`].
pub fn css_color(value: &str) -> Option<Color32> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        return match hex.len() {
            6 => Some(Color32::from_rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Some(Color32::from_rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => None,
        };
    }

    let rgb = match value.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "royalblue" => (65, 105, 225),
        "steelblue" => (70, 130, 180),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "gray" | "grey" => (128, 128, 128),
        "crimson" => (220, 20, 60),
        "teal" => (0, 128, 128),
        _ => return None,
    };
    Some(Color32::from_rgb(rgb.0, rgb.1, rgb.2))
}
