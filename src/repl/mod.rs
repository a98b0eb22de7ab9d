//! Line-oriented read-eval-print loop.
//!
//! Reads one line at a time, lexes it with a fresh [`Lexer`](crate::lexer::lexer::Lexer)
//! and prints every token until the end of the line.

pub mod repl;

#[cfg(test)]
mod tests;
