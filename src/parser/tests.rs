use std::f64::consts;

use crate::parser::errors::ParseError;
use crate::parser::grammar::parse;
use crate::parser::token::{Token, tokenize};

fn parsed_value(text: &str) -> f64 {
    match parse(text) {
        Ok(expr) => expr.value(),
        Err(err) => panic!("'{}' failed to parse: {}", text, err),
    }
}

#[test]
fn test_tokenize_mixed_input() {
    let result = tokenize("log{2}(x) + 3.5");
    assert!(result.is_ok());
    if let Ok(tokens) = result {
        assert_eq!(
            tokens,
            vec![
                Token::Ident("log".to_string()),
                Token::LBrace,
                Token::Number(2.0),
                Token::RBrace,
                Token::LParen,
                Token::Ident("x".to_string()),
                Token::RParen,
                Token::Plus,
                Token::Number(3.5),
            ]
        );
    }
}

#[test]
fn test_tokenize_rejects_stray_characters() {
    let result = tokenize("2 # 3");
    assert!(matches!(
        result,
        Err(ParseError::UnexpectedChar { character: '#', .. })
    ));
}

#[test]
fn test_tokenize_rejects_double_decimal_point() {
    let result = tokenize("1.2.3");
    assert_eq!(result, Err(ParseError::MalformedNumber("1.2.3".to_string())));
}

#[test]
fn test_precedence() {
    assert!((parsed_value("2+3*4") - 14.0).abs() < 1e-12);
    assert!((parsed_value("(2+3)*4") - 20.0).abs() < 1e-12);
    assert!((parsed_value("10-4-3") - 3.0).abs() < 1e-12);
    assert!((parsed_value("12/3/2") - 2.0).abs() < 1e-12);
}

#[test]
fn test_power_is_right_associative() {
    assert!((parsed_value("2^3^2") - 512.0).abs() < 1e-12);
}

#[test]
fn test_unary_minus_wraps_the_power() {
    assert!((parsed_value("-2^2") + 4.0).abs() < 1e-12);
    assert!((parsed_value("(-2)^2") - 4.0).abs() < 1e-12);
}

#[test]
fn test_constants_case_insensitive() {
    assert!((parsed_value("2*pi") - consts::TAU).abs() < 1e-12);
    assert!((parsed_value("PI") - consts::PI).abs() < 1e-12);
    assert!((parsed_value("E") - consts::E).abs() < 1e-12);
}

#[test]
fn test_function_calls() {
    assert!(parsed_value("sin(0)").abs() < 1e-12);
    assert!((parsed_value("sqrt(abs(-9))") - 3.0).abs() < 1e-12);
    assert!((parsed_value("cos(1+1-2)") - 1.0).abs() < 1e-12);
    assert!((parsed_value("ln(e)") - 1.0).abs() < 1e-12);
}

#[test]
fn test_parameterized_calls() {
    assert!((parsed_value("log{2}(8)") - 3.0).abs() < 1e-12);
    assert!((parsed_value("root{3}(27)") - 3.0).abs() < 1e-12);
    assert!((parsed_value("root{2}(2+2)") - 2.0).abs() < 1e-12);
}

#[test]
fn test_out_of_domain_is_not_a_parse_error() {
    assert!(parsed_value("1/0").is_infinite());
    assert!(parsed_value("sqrt(0-1)").is_nan());
    assert!(parsed_value("ln(0-5)").is_nan());
}

#[test]
fn test_unknown_identifier() {
    let result = parse("foo(1)");
    assert_eq!(result, Err(ParseError::UnknownIdentifier("foo".to_string())));

    let result = parse("x");
    assert_eq!(result, Err(ParseError::UnknownIdentifier("x".to_string())));
}

#[test]
fn test_trailing_input() {
    let result = parse("2 3");
    assert!(matches!(result, Err(ParseError::TrailingInput(_))));

    let result = parse("(1+2))");
    assert!(matches!(result, Err(ParseError::TrailingInput(_))));
}

#[test]
fn test_incomplete_expressions() {
    assert_eq!(parse("2+"), Err(ParseError::UnexpectedEnd));
    assert_eq!(parse(""), Err(ParseError::UnexpectedEnd));
    assert!(matches!(parse("(1+2"), Err(ParseError::UnexpectedEnd)));
    assert!(matches!(
        parse("log{}(1)"),
        Err(ParseError::UnexpectedToken { .. })
    ));
}

#[test]
fn test_nested_unary_signs() {
    assert!((parsed_value("--5") - 5.0).abs() < 1e-12);
    assert!((parsed_value("+-5") + 5.0).abs() < 1e-12);
    assert!((parsed_value("2--3") - 5.0).abs() < 1e-12);
}
