//! Context-aware escaping for the generated page
//!
//! Every catalog string reaches the page through one of these functions.

/// Escape a string for HTML text content
///
/// Escapes: `&`, `<`, `>`
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a string for a double-quoted HTML attribute value
///
/// Escapes: `&`, `<`, `>`, `"`, `'`
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text placed inside `<style>`
///
/// Only `</` can end the element early.
pub fn escape_style(s: &str) -> String {
    s.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html("QR Code Reader & Generator"),
            "QR Code Reader &amp; Generator"
        );
        assert_eq!(
            escape_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_html_keeps_quotes() {
        assert_eq!(escape_html(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(
            escape_attr(r#"" onmouseover="x"#),
            "&quot; onmouseover=&quot;x"
        );
        assert_eq!(escape_attr("it's"), "it&#39;s");
        assert_eq!(
            escape_attr("https://demo.example/?a=1&b=2"),
            "https://demo.example/?a=1&amp;b=2"
        );
    }

    #[test]
    fn test_escape_style() {
        assert_eq!(escape_style("a{}</style><b>"), "a{}<\\/style><b>");
    }

    #[test]
    fn test_unicode_passthrough() {
        assert_eq!(escape_html("Émilie ✓"), "Émilie ✓");
    }
}
