//! Parse error types.
//!
//! The `Display` of each variant is the exact diagnostic text reported to
//! users, so callers can print errors without further formatting.

use monkey_ir::{Span, TokenKind};

/// A syntax error recorded while parsing.
///
/// Errors are accumulated rather than returned: the parser skips ahead one
/// token and keeps going, so a single pass reports independent mistakes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token after the current one was not the kind the grammar requires.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },

    /// A token that cannot start an expression appeared in expression position.
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParser { kind: TokenKind, span: Span },

    /// Integer literal text that does not fit in a signed 64-bit integer.
    #[error("could not parse {literal} as integer")]
    InvalidInteger { literal: String, span: Span },
}

impl ParseError {
    /// Location of the offending token.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::NoPrefixParser { span, .. }
            | ParseError::InvalidInteger { span, .. } => *span,
        }
    }
}
