//! HTML entity escaping.

/// Escape `&`, `<` and `>` as HTML entities.
///
/// `&` is replaced first so entities produced for `<` and `>` are not escaped
/// a second time. Quotes are left untouched.
///
/// # Examples
///
/// ```
/// use edu_renderer::escape_html;
///
/// assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_empty() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_html_tag() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn test_escape_html_existing_entity_is_escaped_again() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_html_quotes_untouched() {
        assert_eq!(escape_html(r#"say "hi" it's"#), r#"say "hi" it's"#);
    }

    #[test]
    fn test_escape_html_non_ascii() {
        assert_eq!(escape_html("Euclid’s lemma <ok>"), "Euclid’s lemma &lt;ok&gt;");
    }
}
