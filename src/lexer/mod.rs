//! Lexical analysis module for the interpreter.
//!
//! This module contains the hand-written scanner that converts source text
//! into tokens for a parser. It handles:
//!
//! - One- and two-byte operators and punctuation
//! - Identifier and integer runs, with keyword lookup
//! - Whitespace skipping
//! - Recovery from unrecognised bytes via `Illegal` tokens

pub mod lexer;
pub mod tokens;
