use thiserror::Error;

/// Errors produced while tokenizing or parsing an expression string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unexpected character '{character}' at byte {position}")]
    UnexpectedChar { character: char, position: usize },
    #[error("malformed number literal '{0}'")]
    MalformedNumber(String),
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("expected {expected}, found '{found}'")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },
    #[error("trailing input after a complete expression, starting at '{0}'")]
    TrailingInput(String),
}
