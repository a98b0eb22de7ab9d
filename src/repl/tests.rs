//! Unit tests for the REPL driver.

use std::io::{self, Cursor, Read, Write};

use crate::errors::errors::ErrorImpl;

use super::repl::{start, PROMPT};

fn run(input: &str) -> String {
    let mut output = Vec::new();
    start(Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_empty_input_prints_single_prompt() {
    assert_eq!(run(""), PROMPT);
}

#[test]
fn test_prints_one_token_per_line() {
    let output = run("let five = 5;\n");
    assert_eq!(
        output,
        ">> LetKeyword (let)\nIdentifier (five)\nAssign (=)\nIntegerLiteral (5)\nSemicolon (;)\n>> "
    );
}

#[test]
fn test_each_line_gets_fresh_lexer() {
    let output = run("a\r\n==\nb");
    assert_eq!(
        output,
        ">> Identifier (a)\n>> Equal (==)\n>> Identifier (b)\n>> "
    );
}

#[test]
fn test_blank_line_prints_nothing() {
    assert_eq!(run("\n   \n"), ">> >> >> ");
}

#[test]
fn test_illegal_bytes_are_printed() {
    assert_eq!(run("@x\n"), ">> Illegal (@)\nIdentifier (x)\n>> ");
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "stdin gone"))
    }
}

impl io::BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::new(io::ErrorKind::Other, "stdin gone"))
    }

    fn consume(&mut self, _amt: usize) {}
}

#[test]
fn test_read_failure_is_reported() {
    let mut output = Vec::new();
    let error = start(FailingReader, &mut output).unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::Io {
            message: "stdin gone".to_string()
        }
    );
}

struct ClosedWriter;

impl Write for ClosedWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failure_is_reported() {
    let error = start(Cursor::new("let x;\n"), ClosedWriter).unwrap_err();
    assert_eq!(error.get_error_name(), "Io");
}
