//! Escaping for XML text content, shared by the feed and sitemap
//! generators.
//!
//! Distinct from the HTML escapers in `whtml`: XML uses `&apos;` and
//! needs no `/` handling.

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_escape_xml() {
        assert_eq!(escape_xml(""), "");
        assert_eq!(escape_xml("a & b <c>"), "a &amp; b &lt;c&gt;");
        assert_eq!(escape_xml("it's \"here\""), "it&apos;s &quot;here&quot;");
        assert_eq!(escape_xml("path/to"), "path/to");
    }
}
