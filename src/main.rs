mod analytic;
mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::SolverCompareApp;
use config::{ViewerConfig, CONFIG_FILE};
use data::compare::Comparison;
use data::loader;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ViewerConfig::load_or_default(Path::new(CONFIG_FILE));

    // Any unreadable input aborts before a window is opened.
    let run = loader::load_run(&config.input_dir).with_context(|| {
        format!(
            "loading trajectories from {}",
            config.input_dir.display()
        )
    })?;
    let comparison = Comparison::from_run(&run);
    log::info!("comparing {} aligned samples", comparison.len());

    let state = AppState::new(comparison, config.line_width);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Solver Compare – Damped Spring",
        options,
        Box::new(|_cc| Ok(Box::new(SolverCompareApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer window failed: {e}"))
}
