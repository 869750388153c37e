use crate::domain::constants::{MAX_SAMPLE_POINTS, MIN_MEMBER_SAMPLES, MIN_SAMPLE_POINTS};

/// A closed interval `[min, max]`. `min > max` is the degenerate empty
/// interval: it contains nothing and yields no sample points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Uniformly spaced ascending points across the interval clipped to the
    /// view range. Empty when the clipped range is empty or NaN.
    pub fn sample_points(&self, view_min: f64, view_max: f64, n: usize) -> Vec<f64> {
        let lo = if self.min > view_min { self.min } else { view_min };
        let hi = if self.max < view_max { self.max } else { view_max };
        if lo.is_nan() || hi.is_nan() || !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }

        let count = n.clamp(MIN_SAMPLE_POINTS, MAX_SAMPLE_POINTS);
        let span = hi - lo;
        (0..count)
            .map(|i| lo + span * (i as f64) / ((count - 1) as f64))
            .collect()
    }
}

/// The set of inputs for which an expression has a mathematically valid
/// value. Immutable once built; computed once per parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Domain {
    Interval(Interval),
    /// A union of member domains, e.g. `(-inf, -1] U [1, inf)` for `asec`.
    /// Always holds at least one member.
    Composed(Vec<Domain>),
}

impl Domain {
    /// The fully unrestricted domain `(-inf, inf)`.
    pub fn unrestricted() -> Self {
        Domain::Interval(Interval::new(f64::NEG_INFINITY, f64::INFINITY))
    }

    pub fn contains(&self, x: f64) -> bool {
        match self {
            Domain::Interval(interval) => interval.contains(x),
            Domain::Composed(members) => members.iter().any(|member| member.contains(x)),
        }
    }

    pub fn min_bound(&self) -> f64 {
        match self {
            Domain::Interval(interval) => interval.min,
            Domain::Composed(members) => members
                .iter()
                .map(Domain::min_bound)
                .fold(f64::INFINITY, f64::min),
        }
    }

    pub fn max_bound(&self) -> f64 {
        match self {
            Domain::Interval(interval) => interval.max,
            Domain::Composed(members) => members
                .iter()
                .map(Domain::max_bound)
                .fold(f64::NEG_INFINITY, f64::max),
        }
    }

    /// Ascending, de-duplicated sample points clipped to the view range.
    ///
    /// Pure and restartable, so the renderer can call it every frame. A
    /// composed domain asks each member for `n / member_count` points
    /// (at least 10 each), merges them, and down-samples by even stride when
    /// the union overshoots `n`.
    pub fn sample_points(&self, view_min: f64, view_max: f64, n: usize) -> Vec<f64> {
        match self {
            Domain::Interval(interval) => interval.sample_points(view_min, view_max, n),
            Domain::Composed(members) => {
                let per_member = (n / members.len()).max(MIN_MEMBER_SAMPLES);
                let mut merged: Vec<f64> = members
                    .iter()
                    .flat_map(|member| member.sample_points(view_min, view_max, per_member))
                    .collect();
                merged.sort_by(f64::total_cmp);
                merged.dedup();

                let cap = n.max(MIN_SAMPLE_POINTS);
                if merged.len() > cap {
                    let stride = merged.len() as f64 / cap as f64;
                    merged = (0..cap)
                        .map(|i| merged[(i as f64 * stride) as usize])
                        .collect();
                }
                merged
            }
        }
    }
}
