//! HTML escaping for values reflected into markup.

/// Escape the five HTML-special characters.
///
/// `&`, `<`, `>`, `"` and `'` become `&amp;`, `&lt;`, `&gt;`, `&#34;` and
/// `&#39;`. Everything else is copied through unchanged, so the output never
/// contains a raw `<`, `>` or `&` that came from `input`.
pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&#34;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(ch),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_html("Ada Lovelace"), "Ada Lovelace");
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("Zoë 🦀"), "Zoë 🦀");
    }

    #[test]
    fn escapes_every_special_character() {
        assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&#34;&#39;");
    }

    #[test]
    fn neutralizes_script_tag() {
        assert_eq!(
            escape_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn existing_entities_are_escaped_again() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn output_has_no_raw_markup() {
        let escaped = escape_html(r#"<img src=x onerror="alert('x')"> & more"#);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        // every ampersand starts an entity we produced
        for (idx, _) in escaped.match_indices('&') {
            let rest = &escaped[idx..];
            assert!(
                ["&amp;", "&lt;", "&gt;", "&#34;", "&#39;"]
                    .iter()
                    .any(|entity| rest.starts_with(entity)),
                "stray ampersand at {idx}"
            );
        }
    }
}
