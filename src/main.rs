mod app;
mod data;
mod processing;
mod state;
mod ui;

use app::CurveCheckApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CurveCheck")
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([720.0, 540.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "CurveCheck",
        options,
        Box::new(|cc| Ok(Box::new(CurveCheckApp::new(cc)))),
    )
}
