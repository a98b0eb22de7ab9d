use std::rc::Rc;

use log::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_BYTE_TOKEN, MK_TOKEN,
};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Byte classes that start a multi-byte run or an illegal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    Digit,
    Other,
}

pub fn classify(byte: u8) -> CharClass {
    match byte {
        b'a'..=b'z' | b'A'..=b'Z' | b'_' => CharClass::Letter,
        b'0'..=b'9' => CharClass::Digit,
        _ => CharClass::Other,
    }
}

fn punctuation_kind(byte: u8) -> Option<TokenKind> {
    let kind = match byte {
        b'=' => TokenKind::Assign,
        b'+' => TokenKind::Plus,
        b'-' => TokenKind::Minus,
        b'!' => TokenKind::Bang,
        b'*' => TokenKind::Asterisk,
        b'/' => TokenKind::Slash,
        b'<' => TokenKind::LessThan,
        b'>' => TokenKind::GreaterThan,
        b';' => TokenKind::Semicolon,
        b'(' => TokenKind::LParen,
        b')' => TokenKind::RParen,
        b'{' => TokenKind::LBrace,
        b'}' => TokenKind::RBrace,
        b',' => TokenKind::Comma,
        _ => return None,
    };

    Some(kind)
}

/// Scanner over one source string. Each call to [`Lexer::next_token`]
/// consumes input and returns exactly one token; once the input is exhausted
/// every further call returns `EndOfInput`.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: String,
    // byte under examination
    position: usize,
    // always position + 1 once primed
    read_position: usize,
    // `None` once the cursor has run past the end of input
    current: Option<u8>,
}

impl Lexer {
    pub fn new(input: String) -> Lexer {
        let mut lexer = Lexer {
            input,
            position: 0,
            read_position: 0,
            current: None,
        };
        lexer.advance();

        lexer
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(byte) = self.current else {
            return MK_TOKEN!(TokenKind::EndOfInput, String::new());
        };

        let start = self.position;
        let token = match (byte, self.peek()) {
            (b'=', Some(b'=')) => self.read_pair(TokenKind::Equal),
            (b'!', Some(b'=')) => self.read_pair(TokenKind::NotEqual),
            _ => match punctuation_kind(byte) {
                Some(kind) => {
                    self.advance();
                    MK_BYTE_TOKEN!(kind, byte)
                }
                None => match classify(byte) {
                    CharClass::Letter => {
                        let literal = self.read_run(CharClass::Letter);
                        MK_TOKEN!(lookup_identifier(&literal), literal)
                    }
                    CharClass::Digit => {
                        MK_TOKEN!(TokenKind::IntegerLiteral, self.read_run(CharClass::Digit))
                    }
                    CharClass::Other => self.read_illegal(),
                },
            },
        };

        trace!("lexed {} at byte {}", token, start);
        token
    }

    /// Byte offset of the cursor. Equals the input length once exhausted.
    pub fn offset(&self) -> usize {
        self.position.min(self.input.len())
    }

    fn advance(&mut self) {
        self.current = self.input.as_bytes().get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.advance();
        }
    }

    fn read_pair(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        self.advance();
        self.advance();

        MK_TOKEN!(kind, self.input[start..self.position].to_string())
    }

    // Leaves the cursor on the first byte outside `class`.
    fn read_run(&mut self, class: CharClass) -> String {
        let start = self.position;
        while self.current.is_some_and(|byte| classify(byte) == class) {
            self.advance();
        }

        self.input[start..self.position].to_string()
    }

    // A non-ASCII scalar is swallowed whole so the literal stays valid UTF-8.
    fn read_illegal(&mut self) -> Token {
        let start = self.position;
        let width = self.input[start..].chars().next().map_or(1, char::len_utf8);
        for _ in 0..width {
            self.advance();
        }

        MK_TOKEN!(TokenKind::Illegal, self.input[start..self.position].to_string())
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::EndOfInput {
            None
        } else {
            Some(token)
        }
    }
}

/// Lexes the whole source, keeping `Illegal` tokens in place. The result
/// always ends with a single `EndOfInput` token.
pub fn tokenize(source: String) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens: Vec<Token> = lex.by_ref().collect();
    tokens.push(lex.next_token());

    tokens
}

/// Like [`tokenize`], but fails on the first unrecognised byte.
pub fn tokenize_strict(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let file_name = if let Some(file) = file {
        Rc::new(file)
    } else {
        Rc::new(String::from("shell"))
    };

    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        match token.kind {
            TokenKind::Illegal => {
                let start = lex.offset() - token.literal.len();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedByte {
                        byte: token.literal,
                    },
                    Position(start as u32, file_name),
                ));
            }
            TokenKind::EndOfInput => {
                tokens.push(token);
                return Ok(tokens);
            }
            _ => tokens.push(token),
        }
    }
}
