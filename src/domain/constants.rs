// Configuration constants for domain analysis and sampling

/// Inward shift approximating an open bound (`ln` wants arg > 0, we keep
/// arg >= shift) and an excluded point (`acot` rejects exactly 0).
pub const OPEN_BOUND_SHIFT: f64 = 1e-9;

/// `sample_points` never generates fewer than this many points per interval.
pub const MIN_SAMPLE_POINTS: usize = 2;

/// Upper cap on points generated for a single interval.
pub const MAX_SAMPLE_POINTS: usize = 10_000;

/// Each member of a composed domain is asked for at least this many points.
pub const MIN_MEMBER_SAMPLES: usize = 10;
