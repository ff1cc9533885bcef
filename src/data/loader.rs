use std::fs;
use std::io;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use super::model::{Scheme, SolverRun, Trajectory};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: '{text}' is not a number", path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load all four solver output files from `dir`.
pub fn load_run(dir: &Path) -> Result<SolverRun> {
    let [euler, leapfrog, symplectic, midpoint] =
        Scheme::ALL.map(|scheme| dir.join(scheme.file_name()));

    let trajectories = [
        load_trajectory(Scheme::Euler, &euler)?,
        load_trajectory(Scheme::Leapfrog, &leapfrog)?,
        load_trajectory(Scheme::Symplectic, &symplectic)?,
        load_trajectory(Scheme::Midpoint, &midpoint)?,
    ];

    let run = SolverRun {
        source: dir.to_path_buf(),
        trajectories,
    };
    for scheme in Scheme::ALL {
        log::info!("{scheme}: {} samples", run.trajectory(scheme).len());
    }
    Ok(run)
}

/// Read one trajectory file: one float per line.
pub fn load_trajectory(scheme: Scheme, path: &Path) -> Result<Trajectory> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let values = parse_trajectory(&text, path)?;
    Ok(Trajectory { scheme, values })
}

/// Parse line-separated floats. `origin` is only used in error messages.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Each line is trimmed before
/// parsing; there is no other tolerance, so a blank line in the middle of
/// the data is an error.
pub fn parse_trajectory(text: &str, origin: &Path) -> Result<Vec<f64>> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let text = line.trim();
            parse_float(text).map_err(|source| LoadError::Parse {
                path: origin.to_path_buf(),
                line: i + 1,
                text: text.to_string(),
                source,
            })
        })
        .collect()
}

/// `f64` parsing that also accepts `_` between two digits, e.g. `1_000.5`.
fn parse_float(text: &str) -> std::result::Result<f64, ParseFloatError> {
    if !text.contains('_') {
        return text.parse();
    }
    let bytes = text.as_bytes();
    let separators_ok = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if separators_ok {
        text.replace('_', "").parse()
    } else {
        // fails with the error for the original text
        text.parse()
    }
}
