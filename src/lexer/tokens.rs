use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::FunctionKeyword);
        map.insert("let", TokenKind::LetKeyword);
        map
    };
}

/// Returns the keyword kind for a reserved spelling, or `Identifier`.
pub fn lookup_identifier(ident: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(ident)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EndOfInput,

    Identifier,
    IntegerLiteral,

    Assign, // =
    Plus,
    Minus,
    Bang, // !
    Asterisk,
    Slash,

    LessThan,
    GreaterThan,
    Equal, // ==
    NotEqual, // !=

    Comma,
    Semicolon,

    LParen,
    RParen,
    LBrace,
    RBrace,

    // Reserved
    FunctionKeyword,
    LetKeyword,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.literal)
    }
}

impl Token {
    pub fn new(kind: TokenKind, literal: String) -> Self {
        Token { kind, literal }
    }
}
