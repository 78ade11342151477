//! POSIX shell quoting for values interpolated into command lines.

/// Shell-safe single-quote escaping.
///
/// Words made only of characters the shell never interprets are returned
/// bare so the command typed into the pane stays readable.
pub fn shell_quote(s: &str) -> String {
    if s.is_empty() {
        return "''".into();
    }
    if s.chars().all(is_plain_char) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', "'\\''"))
}

fn is_plain_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '/' | '.' | '_' | '-' | '+' | ',' | ':' | '=' | '%' | '@')
}
