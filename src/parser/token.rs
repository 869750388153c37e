use std::fmt;

use log::debug;

use crate::parser::errors::ParseError;

/// A lexed token. Numbers and identifiers carry their literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    LBrace,
    RBrace,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Ident(name) => write!(f, "{}", name),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
        }
    }
}

/// Lex a source string into tokens.
///
/// # Errors
///
/// Returns an error for characters outside the grammar and for number
/// literals with more than one decimal point.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(position, c)) = chars.peek() {
        match c {
            ' ' | '\t' | '\n' | '\r' => {
                chars.next();
            }
            '+' | '-' | '*' | '/' | '^' | '(' | ')' | '{' | '}' => {
                chars.next();
                tokens.push(match c {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '*' => Token::Star,
                    '/' => Token::Slash,
                    '^' => Token::Caret,
                    '(' => Token::LParen,
                    ')' => Token::RParen,
                    '{' => Token::LBrace,
                    _ => Token::RBrace,
                });
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                let mut dots = 0;
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_digit() {
                        literal.push(c);
                        chars.next();
                    } else if c == '.' {
                        dots += 1;
                        literal.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if dots > 1 || literal == "." {
                    return Err(ParseError::MalformedNumber(literal));
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ParseError::MalformedNumber(literal.clone()))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_ascii_alphabetic() => {
                let mut name = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_alphabetic() {
                        name.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(name));
            }
            _ => {
                return Err(ParseError::UnexpectedChar {
                    character: c,
                    position,
                });
            }
        }
    }

    debug!("Tokenized '{}' into {} tokens", text, tokens.len());
    Ok(tokens)
}

/// An owned token sequence with a forward-only cursor.
///
/// One stream is created per parse call, so parsing is reentrant and each
/// grammar rule can be tested in isolation.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Consume the next token if it equals `expected`.
    pub fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consume the next token, requiring it to equal `expected`.
    pub fn expect(
        &mut self,
        expected: &Token,
        description: &'static str,
    ) -> Result<(), ParseError> {
        match self.next() {
            Some(ref token) if token == expected => Ok(()),
            Some(token) => Err(ParseError::UnexpectedToken {
                expected: description,
                found: token.to_string(),
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Render the unconsumed remainder, used for trailing-input errors.
    pub fn remainder(&self) -> String {
        self.tokens[self.position..]
            .iter()
            .map(Token::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
