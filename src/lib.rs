//! Curvelab - The expression engine behind an interactive graphing calculator
//!
//! This library parses infix expressions into evaluable trees, analyzes the
//! valid input domain of an expression by propagating per-function
//! restrictions, evaluates expressions numerically with named-parameter and
//! free-variable bindings, and locates intersection points between two
//! expressions via bracketed root-finding.

pub mod domain;
pub mod engine;
pub mod expression;
pub mod intersect;
pub mod parser;

// Re-export the main public API
pub use domain::{Domain, Interval, analyze};
pub use engine::{Curve, EvalError, Evaluator};
pub use expression::{BinaryOp, Expr, ParamFn, UnaryFn, UnaryOp};
pub use intersect::{Point, find_intersections};
pub use parser::{ParseError, parse};

/// Evaluate an expression at a value of the free variable `x`.
///
/// This is a convenience function using an [`Evaluator`] with no bindings;
/// `x` substitutes wrapped in parentheses, so `x^2` at `x = -2` is 4.
///
/// # Errors
///
/// Returns an error when the substituted text is not parseable. Division by
/// zero and out-of-domain function arguments are not errors; they evaluate
/// to infinities or NaN.
///
/// # Examples
///
/// ```
/// use curvelab::evaluate;
///
/// match evaluate("x^2", -2.0) {
///     Ok(value) => assert!((value - 4.0).abs() < 1e-12),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn evaluate(text: &str, x: f64) -> Result<f64, EvalError> {
    Evaluator::new().evaluate(text, x)
}

/// Evaluate an expression with no free variable, e.g. a point coordinate.
///
/// # Errors
///
/// Returns an error when the text is not parseable; a bare `x` is an
/// unbound identifier here.
///
/// # Examples
///
/// ```
/// use curvelab::evaluate_constant;
///
/// match evaluate_constant("2+3*4") {
///     Ok(value) => assert!((value - 14.0).abs() < 1e-12),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn evaluate_constant(text: &str) -> Result<f64, EvalError> {
    Evaluator::new().evaluate_constant(text)
}

/// Find the intersection points of two expressions over `[min_x, max_x]`,
/// sampled adaptively from the pixel width of the viewport.
///
/// Uses an [`Evaluator`] with no bindings; see
/// [`intersect::find_intersections`] to scan with parameters bound.
///
/// # Examples
///
/// ```
/// use curvelab::intersections;
///
/// let points = intersections("x^2", "2*x+1", -10.0, 10.0, 800);
/// assert_eq!(points.len(), 2);
/// ```
pub fn intersections(
    left: &str,
    right: &str,
    min_x: f64,
    max_x: f64,
    pixel_width: usize,
) -> Vec<Point> {
    find_intersections(&Evaluator::new(), left, right, min_x, max_x, pixel_width)
}
