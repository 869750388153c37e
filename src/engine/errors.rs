use thiserror::Error;

use crate::parser::ParseError;

/// Errors raised while evaluating an expression with bindings applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("substituted expression '{text}' is not parseable: {source}")]
    Unparseable { text: String, source: ParseError },
}
