//! wave-viz - interactive sine/cosine plotter
//!
//! Loads startup settings, then opens a window with the parameter panel
//! and a live plot.

use eframe::egui;

use wave_viz::app::WaveVizApp;
use wave_viz::settings::AppSettings;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting wave-viz");

    let settings = AppSettings::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 620.0])
            .with_title("wave-viz"),
        ..Default::default()
    };

    eframe::run_native(
        "wave-viz",
        options,
        Box::new(|cc| Ok(Box::new(WaveVizApp::new(cc, settings)))),
    )
}
