// Configuration constants for intersection finding

/// Fewest difference samples across the scan range.
pub const MIN_SAMPLE_COUNT: usize = 200;

/// Most difference samples across the scan range.
pub const MAX_SAMPLE_COUNT: usize = 1000;

/// Bisection refinement iteration cap per bracketed root.
pub const MAX_BISECTION_ITERATIONS: usize = 40;

/// Bisection stops once `|d(mid)|` drops below this.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-8;

/// Candidates closer than this to an accepted root are duplicates.
pub const DEDUP_TOLERANCE: f64 = 1e-6;
