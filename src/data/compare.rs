use std::path::PathBuf;

use super::align::align;
use super::model::{ErrorSummary, Scheme, SolverRun, Trajectory};
use crate::analytic;

// ---------------------------------------------------------------------------
// Comparison – everything the plots need, all of equal length
// ---------------------------------------------------------------------------

/// Aligned solver output next to the analytic solution.
///
/// Every sequence held here has exactly [`Comparison::len`] samples.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Directory the trajectories were loaded from.
    pub source: PathBuf,
    /// `t_i = i * STEP`.
    pub time: Vec<f64>,
    /// Analytic displacement at each `time` sample.
    pub analytic: Vec<f64>,
    /// Aligned trajectories in [`Scheme::ALL`] order.
    pub trajectories: [Trajectory; 4],
    /// `analytic - trajectory` per scheme, same order as `trajectories`.
    pub errors: [Vec<f64>; 4],
}

impl Comparison {
    /// Align the run and evaluate the analytic curve on its time axis.
    pub fn from_run(run: &SolverRun) -> Self {
        let trajectories = align(run);
        let len = trajectories[0].len();

        let time = analytic::time_axis(len, analytic::STEP);
        let analytic = analytic::evaluate(&time);
        let errors = trajectories
            .each_ref()
            .map(|t| error_series(&analytic, &t.values));

        Comparison {
            source: run.source.clone(),
            time,
            analytic,
            trajectories,
            errors,
        }
    }

    /// Aligned sample count.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn trajectory(&self, scheme: Scheme) -> &[f64] {
        &self.trajectories[scheme as usize].values
    }

    pub fn error(&self, scheme: Scheme) -> &[f64] {
        &self.errors[scheme as usize]
    }

    /// Error statistics per scheme, in [`Scheme::ALL`] order.
    pub fn summary(&self) -> Vec<ErrorSummary> {
        Scheme::ALL
            .iter()
            .map(|&scheme| ErrorSummary::from_errors(scheme, self.error(scheme)))
            .collect()
    }
}

/// Elementwise `analytic[i] - trajectory[i]` over the common prefix.
pub fn error_series(analytic: &[f64], trajectory: &[f64]) -> Vec<f64> {
    analytic
        .iter()
        .zip(trajectory)
        .map(|(a, y)| a - y)
        .collect()
}
