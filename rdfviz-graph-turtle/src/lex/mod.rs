//! Turtle tokenizer built on winnow.

pub mod chars;
mod lexer;
mod token;

pub use lexer::tokenize;
pub use token::{NumberKind, Token, TokenKind};
