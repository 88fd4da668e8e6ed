//! XML text helpers for the package writers.

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use deckforge::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<t>\"x\"</t>"), "&lt;t&gt;&quot;x&quot;&lt;/t&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn escapes_all_entities() {
        assert_eq!(
            escape_xml(r#"<foo & "bar">"#),
            "&lt;foo &amp; &quot;bar&quot;&gt;"
        );
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape_xml("YTD vs AsOfDate"), "YTD vs AsOfDate");
    }

    proptest! {
        #[test]
        fn escaped_output_has_no_markup_characters(s in ".*") {
            let escaped = escape_xml(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
            // Every remaining ampersand must begin a known entity.
            for (i, _) in escaped.match_indices('&') {
                let rest = &escaped[i..];
                prop_assert!(
                    rest.starts_with("&amp;")
                        || rest.starts_with("&lt;")
                        || rest.starts_with("&gt;")
                        || rest.starts_with("&quot;")
                        || rest.starts_with("&apos;")
                );
            }
        }
    }
}
