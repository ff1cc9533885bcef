use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Scheme – which integrator produced a trajectory
// ---------------------------------------------------------------------------

/// The four integration schemes whose output is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scheme {
    Euler,
    Leapfrog,
    Symplectic,
    Midpoint,
}

impl Scheme {
    /// All schemes in display order.
    pub const ALL: [Scheme; 4] = [
        Scheme::Euler,
        Scheme::Leapfrog,
        Scheme::Symplectic,
        Scheme::Midpoint,
    ];

    /// Name of the solver output file, relative to the input directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Scheme::Euler => "euler.txt",
            Scheme::Leapfrog => "lfrog.txt",
            Scheme::Symplectic => "symp.txt",
            Scheme::Midpoint => "midpoint.txt",
        }
    }

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            Scheme::Euler => "euler",
            Scheme::Leapfrog => "leapfrog",
            Scheme::Symplectic => "symplectic",
            Scheme::Midpoint => "midpoint",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Series – anything drawn as a line
// ---------------------------------------------------------------------------

/// A plotted line: one of the solver trajectories or the analytic curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Series {
    Solver(Scheme),
    Analytic,
}

impl Series {
    /// Solver series first, analytic last; this is also the legend order.
    pub const ALL: [Series; 5] = [
        Series::Solver(Scheme::Euler),
        Series::Solver(Scheme::Leapfrog),
        Series::Solver(Scheme::Symplectic),
        Series::Solver(Scheme::Midpoint),
        Series::Analytic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Series::Solver(scheme) => scheme.label(),
            Series::Analytic => "analytic solution",
        }
    }
}

// ---------------------------------------------------------------------------
// Trajectory / SolverRun – raw file contents
// ---------------------------------------------------------------------------

/// Position samples written by one scheme, one per time step.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub scheme: Scheme,
    pub values: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The four trajectories as read from disk, before alignment.
#[derive(Debug, Clone)]
pub struct SolverRun {
    /// Directory the files were read from.
    pub source: PathBuf,
    /// One trajectory per scheme, in [`Scheme::ALL`] order.
    pub trajectories: [Trajectory; 4],
}

impl SolverRun {
    pub fn trajectory(&self, scheme: Scheme) -> &Trajectory {
        &self.trajectories[scheme as usize]
    }
}

// ---------------------------------------------------------------------------
// ErrorSummary – scalar view of one error series
// ---------------------------------------------------------------------------

/// Aggregate error of one scheme against the analytic solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorSummary {
    pub scheme: Scheme,
    /// Largest `|analytic - trajectory|`.
    pub max_abs: f64,
    /// Root mean square of the error series.
    pub rms: f64,
}

impl ErrorSummary {
    /// Summarise an error series. An empty series yields zeros.
    pub fn from_errors(scheme: Scheme, errors: &[f64]) -> Self {
        if errors.is_empty() {
            return ErrorSummary {
                scheme,
                max_abs: 0.0,
                rms: 0.0,
            };
        }
        let max_abs = errors.iter().fold(0.0_f64, |acc, e| acc.max(e.abs()));
        let mean_sq = errors.iter().map(|e| e * e).sum::<f64>() / errors.len() as f64;
        ErrorSummary {
            scheme,
            max_abs,
            rms: mean_sq.sqrt(),
        }
    }
}
