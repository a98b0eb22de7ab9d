use std::io::{BufRead, Write};

use log::debug;

use crate::{
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::TokenKind},
};

pub const PROMPT: &str = ">> ";

/// Runs the loop until `input` reaches end of stream.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<(), Error> {
    let mut line = String::new();
    let mut lines_read = 0usize;

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input after {} lines", lines_read);
            return Ok(());
        }
        lines_read += 1;

        let source = line.trim_end_matches(['\n', '\r']);
        debug!("read line {}: {:?}", lines_read, source);

        let mut lexer = Lexer::new(source.to_string());
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::EndOfInput {
                break;
            }
            writeln!(output, "{}", token)?;
        }
        output.flush()?;
    }
}
