use log::{debug, info};

use crate::engine::Evaluator;
use crate::intersect::constants::{
    CONVERGENCE_TOLERANCE, DEDUP_TOLERANCE, MAX_BISECTION_ITERATIONS, MAX_SAMPLE_COUNT,
    MIN_SAMPLE_COUNT,
};
use crate::intersect::point::Point;

/// Find the intersections of two expressions over `[min_x, max_x]`.
///
/// The difference `d(x) = left(x) - right(x)` is sampled at
/// `clamp(pixel_width, 200, 1000) + 1` uniform positions; a sign change
/// between consecutive valid samples brackets a root, which bisection then
/// refines. A sample that fails to evaluate (or is non-finite) is a
/// discontinuity: it resets the bracket tracking and never aborts the scan.
/// Results come back ascending in x, deduplicated to one root per 1e-6
/// neighborhood, with y computed from the left expression.
pub fn find_intersections(
    evaluator: &Evaluator,
    left: &str,
    right: &str,
    min_x: f64,
    max_x: f64,
    pixel_width: usize,
) -> Vec<Point> {
    let sample_count = pixel_width.clamp(MIN_SAMPLE_COUNT, MAX_SAMPLE_COUNT);
    let step = (max_x - min_x) / sample_count as f64;

    let difference = |x: f64| -> Option<f64> {
        let l = evaluator.evaluate(left, x).ok()?;
        let r = evaluator.evaluate(right, x).ok()?;
        let d = l - r;
        d.is_finite().then_some(d)
    };

    let mut found: Vec<Point> = Vec::new();
    let mut previous: Option<(f64, f64)> = None;

    for i in 0..=sample_count {
        let x = min_x + step * i as f64;
        let Some(d) = difference(x) else {
            // no signal at this x; infer no intersection across the gap
            previous = None;
            continue;
        };

        if let Some((prev_x, prev_d)) = previous
            && (prev_d == 0.0 || d == 0.0 || (prev_d < 0.0) != (d < 0.0))
        {
            let root_x = bisect(&difference, prev_x, prev_d, x);
            if let Ok(y) = evaluator.evaluate(left, root_x)
                && y.is_finite()
                && !found
                    .iter()
                    .any(|point| (point.x - root_x).abs() < DEDUP_TOLERANCE)
            {
                debug!("Accepted intersection at ({}, {})", root_x, y);
                found.push(Point { x: root_x, y });
            }
        }

        previous = Some((x, d));
    }

    info!(
        "Found {} intersections of '{}' and '{}' in [{}, {}]",
        found.len(),
        left,
        right,
        min_x,
        max_x
    );
    found
}

/// Refine a bracketed sign change by bisection. If a midpoint evaluation
/// fails, the last valid midpoint stands as the estimate.
fn bisect(difference: &impl Fn(f64) -> Option<f64>, lo: f64, lo_value: f64, hi: f64) -> f64 {
    let mut lo = lo;
    let mut lo_value = lo_value;
    let mut hi = hi;
    let mut estimate = 0.5 * (lo + hi);

    for _ in 0..MAX_BISECTION_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        let Some(d) = difference(mid) else {
            // keep the last midpoint that evaluated
            break;
        };
        estimate = mid;
        if d.abs() < CONVERGENCE_TOLERANCE {
            break;
        }
        if (d < 0.0) == (lo_value < 0.0) {
            lo = mid;
            lo_value = d;
        } else {
            hi = mid;
        }
    }

    estimate
}

#[cfg(test)]
mod tests_refinement {
    use super::bisect;

    #[test]
    fn test_bisect_converges_on_a_bracketed_root() {
        let f = |x: f64| Some(x * x - 2.0);
        let root = bisect(&f, 1.0, -1.0, 2.0);
        assert!((root - 2.0_f64.sqrt()).abs() < 1e-7);
    }

    #[test]
    fn test_bisect_failed_midpoint_keeps_last_valid_estimate() {
        // evaluation gives out once the difference gets small, as it would
        // approaching a gap in the sampled expression
        let f = |x: f64| {
            let d: f64 = x - 0.3;
            (d.abs() > 1.0 / 32.0).then_some(d)
        };
        let root = bisect(&f, 0.0, -0.3, 1.0);
        assert!(f(root).is_some());
        assert!((root - 0.3).abs() < 0.2);
    }
}
