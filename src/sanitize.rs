//! Text sanitization for generated markup.
//!
//! [`sanitize`] is the only transformation applied to user-supplied section
//! titles and text. It neutralizes tag delimiters and turns newlines into
//! explicit line breaks. Ampersands and quotes pass through unchanged.

/// Escape `<` and `>` and convert every newline into `<br/>`.
///
/// # Example
///
/// ```
/// use wrapview::sanitize::sanitize;
///
/// assert_eq!(sanitize("a<b>c\nd"), "a&lt;b&gt;c<br/>d");
/// ```
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\n' => out.push_str("<br/>"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a value for use inside a double-quoted HTML attribute.
///
/// Used for image URIs, correlation ids and inline styles, never for
/// title or text content.
pub fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sanitize_escapes_tags_and_breaks_lines() {
        assert_eq!(sanitize("a<b>c\nd"), "a&lt;b&gt;c<br/>d");
    }

    #[test]
    fn test_sanitize_leaves_ampersand_and_quotes() {
        assert_eq!(sanitize("Tom & \"Jerry\" 'x'"), "Tom & \"Jerry\" 'x'");
    }

    #[test]
    fn test_sanitize_script_tag_is_inert() {
        let out = sanitize("<script>alert(1)</script>");
        assert!(!out.contains("<script"));
        assert_eq!(out, "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn test_sanitize_consecutive_newlines() {
        assert_eq!(sanitize("\n\n"), "<br/><br/>");
    }

    #[test]
    fn test_sanitize_keeps_carriage_return() {
        assert_eq!(sanitize("a\r\nb"), "a\r<br/>b");
    }

    #[test]
    fn test_escape_attribute_quotes() {
        assert_eq!(
            escape_attribute(r#"x" onerror="y"#),
            "x&quot; onerror=&quot;y"
        );
        assert_eq!(escape_attribute("a&b"), "a&amp;b");
    }

    proptest! {
        #[test]
        fn prop_sanitize_is_identity_without_special_chars(s in "[^<>\n]*") {
            prop_assert_eq!(sanitize(&s), s);
        }

        #[test]
        fn prop_sanitize_has_one_break_per_newline(s in ".*(\n.*){0,5}") {
            let out = sanitize(&s);
            let newlines = s.matches('\n').count();
            prop_assert_eq!(out.matches("<br/>").count(), newlines);
            prop_assert!(!out.contains('\n'));
        }

        #[test]
        fn prop_sanitize_leaves_no_raw_angle_brackets(s in any::<String>()) {
            let out = sanitize(&s).replace("<br/>", "");
            prop_assert!(!out.contains('<'));
            prop_assert!(!out.contains('>'));
        }
    }
}
