//! C string-literal helpers.

/// Token emitted wherever an optional text or list field is absent.
pub const NULL: &str = "NULL";

/// Escape newlines, tabs and both quote characters for a C string literal.
///
/// Nothing else is touched, so the function must only ever see raw text.
///
/// ```
/// assert_eq!(dungeon_gen::escape::c_escape("say \"hi\"\n"), "say \\\"hi\\\"\\n");
/// ```
pub fn c_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap already-escaped text in double quotes.
pub fn quote_wrap(text: &str) -> String {
    format!("\"{text}\"")
}

/// Quoted, escaped literal for `Some` text, `NULL` otherwise.
pub fn c_string_or_null(text: Option<&str>) -> String {
    text.map_or_else(|| NULL.to_string(), |t| quote_wrap(&c_escape(t)))
}
