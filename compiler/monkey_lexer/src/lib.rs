//! Lexer for Monkey using logos.
//!
//! [`Lexer`] is a pull-based [`TokenSource`]; [`lex`] collects a whole
//! source text into a token vector ending in `EOF`.

mod escape;
mod raw_token;

use logos::Logos;
use monkey_ir::{Span, Token, TokenKind, TokenSource};

use raw_token::RawToken;

/// Streaming tokenizer over a source text.
///
/// Never fails: unrecognized input becomes `ILLEGAL` tokens and the parser
/// reports them. Once the input is exhausted every call yields `EOF`.
pub struct Lexer<'src> {
    logos: logos::Lexer<'src, RawToken>,
    eof_offset: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            logos: RawToken::lexer(source),
            eof_offset: u32::try_from(source.len()).unwrap_or(u32::MAX),
        }
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        while let Some(result) = self.logos.next() {
            let span = Span::from_range(self.logos.span());
            let slice = self.logos.slice();

            let token = match result {
                Ok(RawToken::LineComment) => continue,
                Ok(raw) => convert_token(raw, slice, span),
                Err(()) => Token::new(TokenKind::Illegal, slice, span),
            };
            tracing::trace!(?token, "lexed");
            return token;
        }
        Token::eof(self.eof_offset)
    }
}

/// Lex source code into tokens, up to and including `EOF`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let at_end = token.kind == TokenKind::Eof;
        tokens.push(token);
        if at_end {
            return tokens;
        }
    }
}

fn convert_token(raw: RawToken, slice: &str, span: Span) -> Token {
    let kind = match raw {
        RawToken::Ident => TokenKind::keyword(slice).unwrap_or(TokenKind::Ident),
        RawToken::Int => TokenKind::Int,
        RawToken::String => {
            let body = slice
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
                .unwrap_or(slice);
            return Token::new(TokenKind::String, escape::unescape_string(body), span);
        }
        RawToken::UnterminatedString | RawToken::LineComment => TokenKind::Illegal,
        RawToken::EqEq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Star => TokenKind::Asterisk,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
    };
    Token::new(kind, slice, span)
}

#[cfg(test)]
mod tests;
