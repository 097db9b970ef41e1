//! Line input for the `fact` REPL and command line.

pub mod lexer;
pub mod parser;

pub use parser::{InputParser, ParseError, Request};
