//! Desktop front end
//!
//! Left panel edits the wave, the central panel plots it and shows the
//! current parameters.

use eframe::egui;

use crate::controls::{Field, WaveControls, INPUT_STEP};
use crate::graph::{render_wave_graph, GraphStyle};
use crate::render::{css_color, WavePlot};
use crate::settings::AppSettings;
use crate::wave::WaveFunction;

/// Main application state
pub struct WaveVizApp {
    controls: WaveControls,
    style: GraphStyle,
    graph_width: f64,
    graph_height: f64,
    plot: WavePlot,
    show_settings: bool,
}

impl WaveVizApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        Self::from_settings(settings)
    }

    pub fn from_settings(settings: AppSettings) -> Self {
        if css_color(&settings.style.stroke_color).is_none() {
            log::warn!(
                "Stroke color {:?} can't be shown on screen, plotting in royalblue (SVG export keeps it)",
                settings.style.stroke_color
            );
        }

        Self {
            controls: settings.controls(),
            style: settings.style.clone(),
            graph_width: settings.graph_width,
            graph_height: settings.graph_height,
            plot: WavePlot::new(),
            show_settings: true,
        }
    }

    pub fn controls(&self) -> &WaveControls {
        &self.controls
    }

    /// Current graph as an SVG document
    pub fn export_svg(&self) -> String {
        let params = self.controls.to_params(self.graph_width, self.graph_height);
        render_wave_graph(&params, &self.style)
    }

    /// "Wave Parameters" panel
    fn control_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Wave Parameters");
        ui.separator();

        let mut function = self.controls.function();
        egui::ComboBox::from_label("Wave Type")
            .selected_text(function.label())
            .show_ui(ui, |ui| {
                for kind in WaveFunction::selectable() {
                    ui.selectable_value(&mut function, *kind, kind.label());
                }
            });
        self.controls.set_function(function);

        ui.separator();

        for field in [Field::Frequency, Field::Amplitude] {
            let mut value = match field {
                Field::Frequency => self.controls.frequency(),
                Field::Amplitude => self.controls.amplitude(),
            };
            let changed = ui
                .horizontal(|ui| {
                    ui.label(field.name());
                    ui.add(
                        egui::DragValue::new(&mut value)
                            .range(field.range())
                            .speed(INPUT_STEP)
                            .max_decimals(3),
                    )
                    .changed()
                })
                .inner;
            if changed {
                match field {
                    Field::Frequency => self.controls.set_frequency(value),
                    Field::Amplitude => self.controls.set_amplitude(value),
                };
            }
        }

        ui.separator();

        ui.collapsing("Display", |ui| {
            ui.checkbox(&mut self.style.show_grid, "Show grid");
            ui.checkbox(&mut self.style.show_axis_labels, "Show axis labels");
            ui.add(egui::Slider::new(&mut self.style.stroke_width, 0.5..=8.0).text("Line width"));
        });
    }
}

impl eframe::App for WaveVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Wave Visualization");
                ui.separator();
                ui.toggle_value(&mut self.show_settings, "⚙ Parameters");
                ui.separator();
                if ui.button("Copy SVG").clicked() {
                    let svg = self.export_svg();
                    log::info!("Copied {} bytes of SVG to the clipboard", svg.len());
                    ui.output_mut(|o| o.copied_text = svg);
                }
            });
        });

        if self.show_settings {
            egui::SidePanel::left("settings_panel")
                .min_width(220.0)
                .show(ctx, |ui| self.control_panel(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let params = self.controls.to_params(self.graph_width, self.graph_height);

            egui::ScrollArea::both().show(ui, |ui| {
                self.plot.show(ui, &params, &self.style);
            });

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.small(self.controls.to_string());
                ui.strong("Current Parameters");
            });
        });
    }
}
