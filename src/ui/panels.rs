use eframe::egui::{self, Color32, Grid, RichText, ScrollArea, Ui};

use crate::data::model::Series;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – series toggles and error table
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Series");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.show_all();
                }
                if ui.small_button("None").clicked() {
                    state.hide_all();
                }
            });

            for series in Series::ALL {
                let color = state.colors.color_for(series, ui.visuals());
                let text = RichText::new(series.label()).color(color);
                let mut checked = state.is_visible(series);
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_series(series);
                }
            }

            ui.separator();
            ui.strong("Error vs. analytic");

            Grid::new("error_summary")
                .num_columns(3)
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    ui.label("");
                    ui.label("max |e|");
                    ui.label("rms");
                    ui.end_row();

                    for s in &state.summary {
                        let series = Series::Solver(s.scheme);
                        let color = state.colors.color_for(series, ui.visuals());
                        ui.label(RichText::new(s.scheme.label()).color(color));
                        ui.monospace(format!("{:.3e}", s.max_abs));
                        ui.monospace(format!("{:.3e}", s.rms));
                        ui.end_row();
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} samples from {}",
            state.comparison.len(),
            state.comparison.source.display()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open folder with solver output")
        .set_directory(&state.comparison.source)
        .pick_folder();

    if let Some(dir) = folder {
        state.reload_from(&dir);
    }
}
