use crate::engine::curve::Curve;
use crate::engine::errors::EvalError;
use crate::engine::evaluator::Evaluator;
use crate::engine::substitute::replace_word;
use crate::parser::ParseError;

#[test]
fn test_replace_word_whole_words_only() {
    assert_eq!(replace_word("x + exp", "x", "(2)"), "(2) + exp");
    assert_eq!(replace_word("abs(a)", "a", "3"), "abs(3)");
    assert_eq!(replace_word("a*a+a", "a", "2"), "2*2+2");
    assert_eq!(replace_word("X^2", "x", "(-2)"), "(-2)^2");
    assert_eq!(replace_word("rate*2", "rat", "9"), "rate*2");
}

#[test]
fn test_replace_word_passes_multibyte_text_through() {
    assert_eq!(replace_word("2*\u{d7}3", "x", "(1)"), "2*\u{d7}3");
    assert_eq!(replace_word("\u{3c0} + x", "x", "(2)"), "\u{3c0} + (2)");
}

#[test]
fn test_non_ascii_input_is_an_error_not_a_panic() {
    let evaluator = Evaluator::new();
    // the stray multiplication sign reaches the tokenizer and comes back as
    // a per-sample error the renderer can skip
    let result = evaluator.evaluate("2*\u{d7}3", 1.0);
    assert!(matches!(result, Err(EvalError::Unparseable { .. })));
}

#[test]
fn test_negative_x_substitutes_parenthesized() {
    let evaluator = Evaluator::new();
    let result = evaluator.evaluate("x^2", -2.0);
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 4.0).abs() < 1e-12);
    }
}

#[test]
fn test_sqrt_inside_and_outside_its_domain() {
    let evaluator = Evaluator::new();

    let result = evaluator.evaluate("sqrt(x)", 4.0);
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 2.0).abs() < 1e-12);
    }

    // unguarded by a domain check, a bad argument is NaN rather than an error
    let result = evaluator.evaluate("sqrt(x)", -1.0);
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!(value.is_nan());
    }
}

#[test]
fn test_evaluate_constant() {
    let evaluator = Evaluator::new();
    let result = evaluator.evaluate_constant("2*pi");
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - std::f64::consts::TAU).abs() < 1e-12);
    }
}

#[test]
fn test_evaluate_constant_rejects_free_variable() {
    let evaluator = Evaluator::new();
    let result = evaluator.evaluate_constant("x + 1");
    assert_eq!(
        result,
        Err(EvalError::Unparseable {
            text: "x + 1".to_string(),
            source: ParseError::UnknownIdentifier("x".to_string()),
        })
    );
}

#[test]
fn test_parameter_binding_is_case_insensitive() {
    let mut evaluator = Evaluator::new();
    evaluator.set_parameter("a", 3.0);

    let result = evaluator.evaluate("a*x", 2.0);
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 6.0).abs() < 1e-12);
    }

    let result = evaluator.evaluate("A*x", 2.0);
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 6.0).abs() < 1e-12);
    }
}

#[test]
fn test_parameter_does_not_touch_function_names() {
    let mut evaluator = Evaluator::new();
    evaluator.set_parameter("a", 5.0);

    // 'a' must not rewrite the 'a' in 'abs'
    let result = evaluator.evaluate_constant("abs(0-1) + a");
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 6.0).abs() < 1e-12);
    }
}

#[test]
fn test_named_function_expansion() {
    let mut evaluator = Evaluator::new();
    evaluator.set_function("f", "x^2");

    let result = evaluator.evaluate("f + 1", 3.0);
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 10.0).abs() < 1e-12);
    }
}

#[test]
fn test_nested_named_functions() {
    let mut evaluator = Evaluator::new();
    evaluator.set_function("f", "x^2");
    evaluator.set_function("g", "f + 1");

    let result = evaluator.evaluate("g", 2.0);
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 5.0).abs() < 1e-12);
    }
}

#[test]
fn test_cyclic_named_function_degrades_to_parse_error() {
    let mut evaluator = Evaluator::new();
    evaluator.set_function("f", "f + 1");

    let result = evaluator.evaluate("f", 0.0);
    assert!(matches!(result, Err(EvalError::Unparseable { .. })));
}

#[test]
fn test_removing_bindings() {
    let mut evaluator = Evaluator::new();
    evaluator.set_parameter("a", 1.0);
    evaluator.remove_parameter("a");
    assert!(evaluator.evaluate("a", 0.0).is_err());

    evaluator.set_function("f", "1");
    evaluator.remove_function("f");
    assert!(evaluator.evaluate("f", 0.0).is_err());
}

#[test]
fn test_domain_of_free_variable_expression() {
    let evaluator = Evaluator::new();
    let domain = evaluator.domain_of("ln(x)");
    assert!(!domain.contains(0.0));
    assert!(!domain.contains(-1.0));
    assert!(domain.contains(1.0));

    for x in domain.sample_points(-10.0, 10.0, 400) {
        assert!(x > 0.0);
    }
}

#[test]
fn test_domain_of_unparseable_text_fails_open() {
    let evaluator = Evaluator::new();
    let domain = evaluator.domain_of(")(");
    assert_eq!(domain, crate::domain::Domain::unrestricted());
}

#[test]
fn test_curve_cache_idempotence_and_invalidation() {
    let mut evaluator = Evaluator::new();
    evaluator.set_parameter("a", 1.0);

    let mut curve = Curve::new(&evaluator, "a*x");
    let first = curve.points(&evaluator, -1.0, 1.0, 11).to_vec();
    let second = curve.points(&evaluator, -1.0, 1.0, 11).to_vec();
    assert_eq!(first, second);
    assert!(!first.is_empty());

    // a changed parameter alone does not disturb the cache
    evaluator.set_parameter("a", 2.0);
    let stale = curve.points(&evaluator, -1.0, 1.0, 11).to_vec();
    assert_eq!(first, stale);

    // explicit invalidation picks up the new binding
    curve.invalidate();
    let fresh = curve.points(&evaluator, -1.0, 1.0, 11).to_vec();
    assert_ne!(first, fresh);
    for (old, new) in first.iter().zip(&fresh) {
        assert!((new.y - 2.0 * old.y).abs() < 1e-12);
    }
}

#[test]
fn test_curve_recomputes_when_the_view_moves() {
    let evaluator = Evaluator::new();
    let mut curve = Curve::new(&evaluator, "x");

    let first = curve.points(&evaluator, -1.0, 1.0, 11).to_vec();
    assert!(!first.is_empty());

    // a moved viewport is a different cache key, not a stale hit
    let moved = curve.points(&evaluator, 5.0, 6.0, 11).to_vec();
    assert!(!moved.is_empty());
    for point in &moved {
        assert!(point.x >= 5.0 && point.x <= 6.0);
    }

    // a changed pixel width recomputes as well
    let denser = curve.points(&evaluator, 5.0, 6.0, 21).to_vec();
    assert_eq!(denser.len(), 21);

    // returning to the original view reproduces the original points
    let again = curve.points(&evaluator, -1.0, 1.0, 11).to_vec();
    assert_eq!(first, again);
}

#[test]
fn test_curve_skips_undrawable_samples() {
    let evaluator = Evaluator::new();

    // domain keeps sampling away from x <= 0 entirely
    let mut curve = Curve::new(&evaluator, "ln(x)");
    for point in curve.points(&evaluator, -10.0, 10.0, 100) {
        assert!(point.x > 0.0);
        assert!(point.y.is_finite());
    }

    // 1/x is unrestricted but the pole evaluates non-finite and is dropped
    let mut curve = Curve::new(&evaluator, "1/x");
    for point in curve.points(&evaluator, -1.0, 1.0, 21) {
        assert!(point.y.is_finite());
    }
}

#[test]
fn test_curve_set_text_recomputes_domain() {
    let evaluator = Evaluator::new();
    let mut curve = Curve::new(&evaluator, "x");
    assert!(curve.domain().contains(-5.0));

    curve.set_text(&evaluator, "sqrt(x)");
    assert_eq!(curve.text(), "sqrt(x)");
    assert!(!curve.domain().contains(-5.0));
}
