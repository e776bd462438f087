//! Pratt parser for Monkey.
//!
//! The parser pulls tokens from any [`TokenSource`], keeping the current
//! token and one token of lookahead. Syntax errors are collected instead of
//! aborting; see [`ParseOutput`].
//!
//! ```text
//! let output = monkey_parse::parse("let x = 1 + 2;");
//! assert!(!output.has_errors());
//! ```

mod error;
mod grammar;
mod precedence;

pub use error::ParseError;

use monkey_ir::{Program, Token, TokenKind, TokenSource};
use monkey_lexer::Lexer;
use tracing::debug;

/// Result of parsing a source text.
///
/// `program` holds every statement that parsed cleanly. Callers must not
/// evaluate it when `errors` is non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error messages in the order they were recorded.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Parser state.
pub struct Parser<S> {
    source: S,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl<S: TokenSource> Parser<S> {
    /// Create a parser, priming the current and lookahead tokens.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();
        Parser {
            source,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    /// Parse statements until end of input.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }
        debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        ParseOutput {
            program: Program::new(statements),
            errors: self.errors,
        }
    }

    fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    #[inline]
    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advance if the lookahead is `kind`; otherwise record an error and
    /// stay put.
    fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.advance();
            Some(())
        } else {
            self.error(ParseError::UnexpectedToken {
                expected: kind,
                found: self.peek.kind,
                span: self.peek.span,
            });
            None
        }
    }

    fn error(&mut self, error: ParseError) {
        debug!(%error, span = %error.span(), "syntax error");
        self.errors.push(error);
    }
}

/// Lex and parse a source text.
pub fn parse(source: &str) -> ParseOutput {
    Parser::new(Lexer::new(source)).parse_program()
}

#[cfg(test)]
mod tests;
