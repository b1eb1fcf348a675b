/*!
# Rust Language Module

This Rust module provides lexical analysis and statement classification
of the BEEP language.

*/

pub type LineNumber = Option<usize>;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::classify;
pub use token::{Literal, Operator, Token, Word};

pub mod ast;

#[cfg(test)]
mod tests;
