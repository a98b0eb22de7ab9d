//! Error types and error handling for the interpreter.
//!
//! Scanning never fails: unrecognised input becomes an `Illegal` token.
//! The errors here cover strict tokenizing, where the first illegal byte
//! aborts the run, and I/O failures in the REPL driver.

pub mod errors;
