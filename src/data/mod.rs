/// Data layer: solver output files, alignment and comparison.
///
/// Architecture:
/// ```text
///  euler.txt / lfrog.txt / symp.txt / midpoint.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse files → SolverRun
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  align    │  truncate to the shortest trajectory
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │  compare    │  time axis, analytic curve, error series → Comparison
///   └────────────┘
/// ```

pub mod align;
pub mod compare;
pub mod loader;
pub mod model;
