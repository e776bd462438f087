//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! conversion into `monkey_ir::Token`.

use logos::Logos;

/// Raw token from logos.
///
/// Keywords are not listed here: they lex as `Ident` and are classified
/// during conversion.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r#""([^"\\]|\\[^\n])*""#)]
    String,

    // Runs to end of input; reported as ILLEGAL.
    #[regex(r#""([^"\\]|\\[^\n])*"#)]
    UnterminatedString,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(source: &str) -> Vec<Result<RawToken, ()>> {
        RawToken::lexer(source).collect()
    }

    #[test]
    fn test_two_char_operators_win() {
        assert_eq!(raw("=="), vec![Ok(RawToken::EqEq)]);
        assert_eq!(raw("!="), vec![Ok(RawToken::NotEq)]);
        assert_eq!(raw("= ="), vec![Ok(RawToken::Assign), Ok(RawToken::Assign)]);
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        assert_eq!(
            raw("// hi\nx"),
            vec![Ok(RawToken::LineComment), Ok(RawToken::Ident)]
        );
    }

    #[test]
    fn test_terminated_string_preferred() {
        assert_eq!(raw(r#""a\"b""#), vec![Ok(RawToken::String)]);
        assert_eq!(raw(r#""abc"#), vec![Ok(RawToken::UnterminatedString)]);
    }
}
