//! Tokenizer and recursive-descent parser

mod errors;
mod grammar;
mod token;

pub use errors::ParseError;
pub use grammar::parse;
pub use token::{Token, TokenStream, tokenize};

#[cfg(test)]
mod tests;
