use super::model::{SolverRun, Trajectory};

/// Length of the shortest sequence; 0 if there are none.
pub fn aligned_len(sequences: &[&[f64]]) -> usize {
    sequences.iter().map(|s| s.len()).min().unwrap_or(0)
}

/// Truncate every trajectory of `run` to the shortest one.
///
/// Only trailing samples are dropped. Differing lengths are not treated as an
/// error: solvers that ran longer simply lose their tail.
pub fn align(run: &SolverRun) -> [Trajectory; 4] {
    let samples = run.trajectories.each_ref().map(|t| t.values.as_slice());
    let len = aligned_len(&samples);

    let mut truncated = false;
    let aligned = run.trajectories.each_ref().map(|t| {
        let dropped = t.len() - len;
        if dropped > 0 {
            truncated = true;
            log::debug!("{}: dropping {dropped} trailing samples", t.scheme);
        }
        Trajectory {
            scheme: t.scheme,
            values: t.values[..len].to_vec(),
        }
    });

    if truncated {
        log::info!("trajectories truncated to {len} samples");
    }
    aligned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Scheme;
    use std::path::PathBuf;

    fn run_with_lengths(lengths: [usize; 4]) -> SolverRun {
        let trajectories = Scheme::ALL.map(|scheme| {
            let n = lengths[scheme as usize];
            Trajectory {
                scheme,
                values: (0..n).map(|i| (scheme as usize * 100 + i) as f64 * 0.5).collect(),
            }
        });
        SolverRun {
            source: PathBuf::from("."),
            trajectories,
        }
    }

    #[test]
    fn aligned_len_is_minimum() {
        let a = vec![1.0; 10];
        let b = vec![1.0; 12];
        let c = vec![1.0; 8];
        let d = vec![1.0; 15];
        assert_eq!(aligned_len(&[&a[..], &b[..], &c[..], &d[..]]), 8);
        assert_eq!(aligned_len(&[]), 0);
    }

    #[test]
    fn truncates_to_shortest_keeping_prefix() {
        let run = run_with_lengths([10, 12, 8, 15]);
        let aligned = align(&run);
        for (orig, t) in run.trajectories.iter().zip(aligned.iter()) {
            assert_eq!(t.scheme, orig.scheme);
            assert_eq!(t.len(), 8);
            assert_eq!(t.values[..], orig.values[..8]);
        }
    }

    #[test]
    fn equal_lengths_are_untouched() {
        let run = run_with_lengths([5, 5, 5, 5]);
        let aligned = align(&run);
        assert_eq!(aligned, run.trajectories);
    }

    #[test]
    fn empty_trajectory_empties_everything() {
        let run = run_with_lengths([3, 0, 7, 2]);
        let aligned = align(&run);
        assert!(aligned.iter().all(|t| t.is_empty()));
    }
}
