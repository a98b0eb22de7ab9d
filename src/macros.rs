//! Utility macros for the interpreter.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_BYTE_TOKEN!` - Creates a Token whose literal is a single ASCII byte

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's literal text
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerLiteral, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
        }
    };
}

/// Creates a Token from one ASCII byte of source.
///
/// ```ignore
/// let token = MK_BYTE_TOKEN!(TokenKind::Plus, b'+');
/// ```
#[macro_export]
macro_rules! MK_BYTE_TOKEN {
    ($kind:expr, $byte:expr) => {
        $crate::MK_TOKEN!($kind, char::from($byte).to_string())
    };
}
