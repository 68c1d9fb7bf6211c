//! Escaping of text for HTML contexts, to prevent XSS.

/// Escape text for use as element body text.
///
/// Replaces `&`, `<`, `>`, `"`, `'` and `/` with their entity
/// forms. Done in a single pass over the characters, so entities
/// introduced for one character are never re-escaped.
pub fn escape_content(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for use as an attribute value.
///
/// Narrower than `escape_content`: attribute values are delimited by
/// double quotes, so only `&`, `"` and `'` need replacing.
pub fn escape_attribute(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
