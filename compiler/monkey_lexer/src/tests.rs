use super::*;
use pretty_assertions::assert_eq;

fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
    lex(source)
        .into_iter()
        .map(|token| (token.kind, token.literal))
        .collect()
}

fn expect(expected: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    expected
        .iter()
        .map(|(kind, literal)| (*kind, (*literal).to_string()))
        .collect()
}

#[test]
fn test_full_program() {
    let source = r#"let five = 5;
let add = fn(x, y) {
  x + y;
};
!-/*5;
5 < 10 > 5;
if (5 < 10) { return true; } else { return false; }
10 == 10; 10 != 9;
"foo bar"
[1, 2];
{"foo": "bar"}
"#;
    use TokenKind::*;
    let expected = expect(&[
        (Let, "let"),
        (Ident, "five"),
        (Assign, "="),
        (Int, "5"),
        (Semicolon, ";"),
        (Let, "let"),
        (Ident, "add"),
        (Assign, "="),
        (Function, "fn"),
        (LParen, "("),
        (Ident, "x"),
        (Comma, ","),
        (Ident, "y"),
        (RParen, ")"),
        (LBrace, "{"),
        (Ident, "x"),
        (Plus, "+"),
        (Ident, "y"),
        (Semicolon, ";"),
        (RBrace, "}"),
        (Semicolon, ";"),
        (Bang, "!"),
        (Minus, "-"),
        (Slash, "/"),
        (Asterisk, "*"),
        (Int, "5"),
        (Semicolon, ";"),
        (Int, "5"),
        (Lt, "<"),
        (Int, "10"),
        (Gt, ">"),
        (Int, "5"),
        (Semicolon, ";"),
        (If, "if"),
        (LParen, "("),
        (Int, "5"),
        (Lt, "<"),
        (Int, "10"),
        (RParen, ")"),
        (LBrace, "{"),
        (Return, "return"),
        (True, "true"),
        (Semicolon, ";"),
        (RBrace, "}"),
        (Else, "else"),
        (LBrace, "{"),
        (Return, "return"),
        (False, "false"),
        (Semicolon, ";"),
        (RBrace, "}"),
        (Int, "10"),
        (Eq, "=="),
        (Int, "10"),
        (Semicolon, ";"),
        (Int, "10"),
        (NotEq, "!="),
        (Int, "9"),
        (Semicolon, ";"),
        (String, "foo bar"),
        (LBracket, "["),
        (Int, "1"),
        (Comma, ","),
        (Int, "2"),
        (RBracket, "]"),
        (Semicolon, ";"),
        (LBrace, "{"),
        (String, "foo"),
        (Colon, ":"),
        (String, "bar"),
        (RBrace, "}"),
        (Eof, ""),
    ]);

    assert_eq!(kinds_and_literals(source), expected);
}

#[test]
fn test_keywords_need_word_boundary() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_literals("fn fnord letter return_value"),
        expect(&[
            (Function, "fn"),
            (Ident, "fnord"),
            (Ident, "letter"),
            (Ident, "return_value"),
            (Eof, ""),
        ])
    );
}

#[test]
fn test_comments_are_skipped() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_literals("1 // one\n// whole line\n2"),
        expect(&[(Int, "1"), (Int, "2"), (Eof, "")])
    );
}

#[test]
fn test_string_escapes_are_unescaped() {
    let tokens = lex(r#""a\tb\"c\"""#);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].literal, "a\tb\"c\"");
}

#[test]
fn test_illegal_input() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_literals("1 @ 2"),
        expect(&[(Int, "1"), (Illegal, "@"), (Int, "2"), (Eof, "")])
    );
    assert_eq!(
        kinds_and_literals(r#"x = "open"#),
        expect(&[(Ident, "x"), (Assign, "="), (Illegal, "\"open"), (Eof, "")])
    );
}

#[test]
fn test_spans_are_byte_offsets() {
    let tokens = lex("let x = 10;");
    let spans: Vec<_> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 3),
            Span::new(4, 5),
            Span::new(6, 7),
            Span::new(8, 10),
            Span::new(10, 11),
            Span::point(11),
        ]
    );
}

#[test]
fn test_source_keeps_returning_eof() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_empty_source() {
    assert_eq!(
        kinds_and_literals("  \n\t "),
        expect(&[(TokenKind::Eof, "")])
    );
}
