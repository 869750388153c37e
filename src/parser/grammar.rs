use std::f64::consts;

use log::debug;

use crate::expression::{BinaryOp, Expr, ParamFn, UnaryFn, UnaryOp};
use crate::parser::errors::ParseError;
use crate::parser::token::{Token, TokenStream, tokenize};

/// Parse a source string into an expression tree.
///
/// Grammar, lowest precedence first:
///
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := factor (('*' | '/') factor)*
/// factor  := ('+' | '-') factor | primary ('^' factor)?
/// primary := '(' expr ')' | number | name '{' number '}' '(' expr ')'
///          | name '(' expr ')' | name
/// ```
///
/// `^` is right-associative through the factor recursion (`2^3^2` is 512) and
/// a unary sign wraps the whole power (`-2^2` is -4). Division by zero and
/// out-of-domain function arguments are not parse errors; they surface as
/// NaN or infinities when the tree is evaluated.
///
/// # Errors
///
/// Returns an error for malformed syntax, an identifier that is not a known
/// constant or function, or trailing characters after a complete expression.
pub fn parse(text: &str) -> Result<Expr, ParseError> {
    let mut stream = TokenStream::new(tokenize(text)?);
    let expr = parse_expr(&mut stream)?;
    if !stream.is_at_end() {
        return Err(ParseError::TrailingInput(stream.remainder()));
    }
    debug!("Parsed '{}' into {}", text, expr);
    Ok(expr)
}

fn parse_expr(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    let mut left = parse_term(stream)?;
    loop {
        let op = match stream.peek() {
            Some(Token::Plus) => BinaryOp::Add,
            Some(Token::Minus) => BinaryOp::Sub,
            _ => break,
        };
        stream.next();
        let right = parse_term(stream)?;
        left = Expr::Binary(op, Box::new(left), Box::new(right));
    }
    Ok(left)
}

fn parse_term(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    let mut left = parse_factor(stream)?;
    loop {
        let op = match stream.peek() {
            Some(Token::Star) => BinaryOp::Mul,
            Some(Token::Slash) => BinaryOp::Div,
            _ => break,
        };
        stream.next();
        let right = parse_factor(stream)?;
        left = Expr::Binary(op, Box::new(left), Box::new(right));
    }
    Ok(left)
}

fn parse_factor(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    if stream.eat(&Token::Plus) {
        let operand = parse_factor(stream)?;
        return Ok(Expr::Unary(UnaryOp::Plus, Box::new(operand)));
    }
    if stream.eat(&Token::Minus) {
        let operand = parse_factor(stream)?;
        return Ok(Expr::Unary(UnaryOp::Minus, Box::new(operand)));
    }

    let base = parse_primary(stream)?;
    if stream.eat(&Token::Caret) {
        let exponent = parse_factor(stream)?;
        return Ok(Expr::Binary(BinaryOp::Pow, Box::new(base), Box::new(exponent)));
    }
    Ok(base)
}

fn parse_primary(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    match stream.next() {
        Some(Token::Number(value)) => Ok(Expr::Number(value)),
        Some(Token::LParen) => {
            let inner = parse_expr(stream)?;
            stream.expect(&Token::RParen, "')'")?;
            Ok(inner)
        }
        Some(Token::Ident(name)) => parse_name(stream, &name),
        Some(token) => Err(ParseError::UnexpectedToken {
            expected: "a number, '(', or a name",
            found: token.to_string(),
        }),
        None => Err(ParseError::UnexpectedEnd),
    }
}

/// An identifier is a braced-parameter call, a plain function call, or one of
/// the recognized constants.
fn parse_name(stream: &mut TokenStream, name: &str) -> Result<Expr, ParseError> {
    if stream.eat(&Token::LBrace) {
        let function = ParamFn::from_name(name)
            .ok_or_else(|| ParseError::UnknownIdentifier(name.to_string()))?;
        let param = match stream.next() {
            Some(Token::Number(value)) => value,
            Some(token) => {
                return Err(ParseError::UnexpectedToken {
                    expected: "a number parameter",
                    found: token.to_string(),
                });
            }
            None => return Err(ParseError::UnexpectedEnd),
        };
        stream.expect(&Token::RBrace, "'}'")?;
        stream.expect(&Token::LParen, "'('")?;
        let arg = parse_expr(stream)?;
        stream.expect(&Token::RParen, "')'")?;
        return Ok(Expr::CallWith(function, param, Box::new(arg)));
    }

    if stream.eat(&Token::LParen) {
        let function = UnaryFn::from_name(name)
            .ok_or_else(|| ParseError::UnknownIdentifier(name.to_string()))?;
        let arg = parse_expr(stream)?;
        stream.expect(&Token::RParen, "')'")?;
        return Ok(Expr::Call(function, Box::new(arg)));
    }

    match name.to_ascii_lowercase().as_str() {
        "pi" => Ok(Expr::Number(consts::PI)),
        "e" => Ok(Expr::Number(consts::E)),
        _ => Err(ParseError::UnknownIdentifier(name.to_string())),
    }
}
