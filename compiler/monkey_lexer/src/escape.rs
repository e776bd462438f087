//! Escape Sequence Processing
//!
//! Recognized escapes: `\n`, `\t`, `\r`, `\"`, `\\`

#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '"' => Some('"'),
        '\\' => Some('\\'),
        _ => None,
    }
}

/// Unescape the body of a string literal (quotes already stripped).
///
/// An unknown escape yields the escaped character itself (`\q` becomes `q`).
pub(crate) fn unescape_string(body: &str) -> String {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(esc) => result.push(resolve_escape(esc).unwrap_or(esc)),
            None => result.push('\\'),
        }
    }

    result
}
