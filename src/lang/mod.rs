/*!
# Rust Language Module

This Rust module provides lexical analysis of the assembly language.
Source text becomes a [`Program`] of tokenized lines plus a table of
[`Labels`].

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod program;

pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use program::Labels;
pub use program::Program;
