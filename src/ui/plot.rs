use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, PlotUi};

use crate::data::model::{Scheme, Series};
use crate::state::AppState;

const TRAJECTORY_TITLE: &str = "Different solvers for masspoint hanging from spring";
const ERROR_TITLE: &str = "Error for the different solvers";
const X_LABEL: &str = "Time in seconds";
const Y_LABEL: &str = "Y coordinate";

/// Both panels pan and zoom together along the time axis.
const TIME_LINK_GROUP: &str = "time_axis";

const MIN_PANEL_HEIGHT: f32 = 60.0;

// ---------------------------------------------------------------------------
// Central panel: trajectories on top, errors below
// ---------------------------------------------------------------------------

/// Render the two stacked plots in the central panel.
pub fn comparison_plots(ui: &mut Ui, state: &AppState) {
    if state.comparison.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No samples to compare (one of the solver files is empty)");
        });
        return;
    }

    let title = ui.strong(TRAJECTORY_TITLE);
    let panel_height = split_panel_height(
        ui.available_height(),
        title.rect.height(),
        ui.spacing().item_spacing.y,
    );
    trajectory_plot(ui, state, panel_height);

    ui.strong(ERROR_TITLE);
    error_plot(ui, state, panel_height);
}

/// Height of each plot so that, below the first title, plot + title + plot
/// fill `available` exactly. `spacing` is the gap egui inserts between
/// consecutive widgets.
fn split_panel_height(available: f32, title_height: f32, spacing: f32) -> f32 {
    ((available - title_height - 2.0 * spacing) / 2.0).max(MIN_PANEL_HEIGHT)
}

/// Solver trajectories plus the analytic solution against time.
fn trajectory_plot(ui: &mut Ui, state: &AppState, height: f32) {
    let cmp = &state.comparison;
    let visuals = ui.visuals().clone();

    time_plot("trajectory_plot", height).show(ui, |plot_ui| {
        for series in Series::ALL {
            if !state.is_visible(series) {
                continue;
            }
            let values = match series {
                Series::Solver(scheme) => cmp.trajectory(scheme),
                Series::Analytic => cmp.analytic.as_slice(),
            };
            draw_series(
                plot_ui,
                &cmp.time,
                values,
                series.label(),
                state.colors.color_for(series, &visuals),
                state.line_width,
            );
        }
    });
}

/// `analytic - trajectory` for each scheme against time.
fn error_plot(ui: &mut Ui, state: &AppState, height: f32) {
    let cmp = &state.comparison;
    let visuals = ui.visuals().clone();

    time_plot("error_plot", height).show(ui, |plot_ui| {
        for scheme in Scheme::ALL {
            let series = Series::Solver(scheme);
            if !state.is_visible(series) {
                continue;
            }
            draw_series(
                plot_ui,
                &cmp.time,
                cmp.error(scheme),
                scheme.label(),
                state.colors.color_for(series, &visuals),
                state.line_width,
            );
        }
    });
}

fn time_plot(id: &str, height: f32) -> Plot {
    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label(X_LABEL)
        .y_axis_label(Y_LABEL)
        .height(height)
        .link_axis(TIME_LINK_GROUP, [true, false])
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
}

fn draw_series(
    plot_ui: &mut PlotUi,
    time: &[f64],
    values: &[f64],
    name: &str,
    color: Color32,
    width: f32,
) {
    let points: PlotPoints = time
        .iter()
        .zip(values)
        .map(|(&t, &y)| [t, y])
        .collect();

    plot_ui.line(Line::new(points).name(name).color(color).width(width));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_split_remaining_height_evenly() {
        let (available, title, spacing) = (700.0, 18.0, 4.0);
        let h = split_panel_height(available, title, spacing);
        // plot, gap, second title, gap, plot
        assert_eq!(h + spacing + title + spacing + h, available);
    }

    #[test]
    fn tiny_window_keeps_minimum_height() {
        assert_eq!(split_panel_height(50.0, 18.0, 4.0), MIN_PANEL_HEIGHT);
    }
}
