use std::collections::BTreeSet;
use std::path::Path;

use crate::color::SeriesColors;
use crate::data::compare::Comparison;
use crate::data::loader;
use crate::data::model::{ErrorSummary, Series};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Aligned trajectories and analytic solution currently shown.
    pub comparison: Comparison,

    /// Error statistics of `comparison` (cached).
    pub summary: Vec<ErrorSummary>,

    /// Series currently drawn.
    pub visible: BTreeSet<Series>,

    pub colors: SeriesColors,

    pub line_width: f32,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(comparison: Comparison, line_width: f32) -> Self {
        let summary = comparison.summary();
        Self {
            comparison,
            summary,
            visible: Series::ALL.into_iter().collect(),
            colors: SeriesColors::default(),
            line_width,
            status_message: None,
        }
    }

    /// Replace the displayed comparison. Visibility choices are kept.
    pub fn set_comparison(&mut self, comparison: Comparison) {
        self.summary = comparison.summary();
        self.comparison = comparison;
        self.status_message = None;
    }

    /// Load the solver files from `dir`. On failure the current comparison
    /// stays and the error is reported in the status bar.
    pub fn reload_from(&mut self, dir: &Path) {
        match loader::load_run(dir) {
            Ok(run) => {
                let comparison = Comparison::from_run(&run);
                log::info!(
                    "loaded {} aligned samples from {}",
                    comparison.len(),
                    dir.display()
                );
                self.set_comparison(comparison);
            }
            Err(e) => {
                let e = anyhow::Error::new(e);
                log::error!("Failed to load trajectories: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn is_visible(&self, series: Series) -> bool {
        self.visible.contains(&series)
    }

    /// Show or hide a single series.
    pub fn toggle_series(&mut self, series: Series) {
        if !self.visible.remove(&series) {
            self.visible.insert(series);
        }
    }

    pub fn show_all(&mut self) {
        self.visible = Series::ALL.into_iter().collect();
    }

    pub fn hide_all(&mut self) {
        self.visible.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Scheme, SolverRun, Trajectory};
    use std::path::PathBuf;

    fn state_with_len(n: usize) -> AppState {
        let run = SolverRun {
            source: PathBuf::from("."),
            trajectories: Scheme::ALL.map(|scheme| Trajectory {
                scheme,
                values: vec![0.0; n],
            }),
        };
        AppState::new(Comparison::from_run(&run), 1.5)
    }

    #[test]
    fn everything_visible_initially() {
        let state = state_with_len(3);
        assert!(Series::ALL.iter().all(|&s| state.is_visible(s)));
        assert_eq!(state.summary.len(), 4);
    }

    #[test]
    fn toggle_hides_then_shows() {
        let mut state = state_with_len(3);
        let euler = Series::Solver(Scheme::Euler);
        state.toggle_series(euler);
        assert!(!state.is_visible(euler));
        assert!(state.is_visible(Series::Analytic));
        state.toggle_series(euler);
        assert!(state.is_visible(euler));

        state.hide_all();
        assert!(state.visible.is_empty());
        state.show_all();
        assert_eq!(state.visible.len(), Series::ALL.len());
    }

    #[test]
    fn failed_reload_keeps_current_data() {
        let mut state = state_with_len(5);
        let dir = std::env::temp_dir().join(format!(
            "solver-compare-{}-empty-dir",
            std::process::id()
        ));
        let _ = std::fs::create_dir_all(&dir);

        state.reload_from(&dir);
        assert_eq!(state.comparison.len(), 5);
        let msg = state.status_message.as_deref().unwrap_or_default();
        assert!(msg.contains("euler.txt"), "{msg}");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
