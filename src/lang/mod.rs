/*!
# Rust Language Module

This Rust module turns the text a user types into typed values:
program lines, front-end commands, and classified statements.

*/

pub type LineNumber = i32;

#[macro_use]
mod error;
mod command;
mod lex;
mod line;
mod parse;

pub use command::Command;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::literal;
pub use line::Line;
pub use parse::parse;

pub mod ast;

#[cfg(test)]
mod tests;
