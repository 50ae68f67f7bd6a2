//! Output escaping as an explicit, testable seam.
//!
//! Notice authors are trusted: body text and URLs are emitted verbatim under
//! the default [`EscapePolicy::Trusted`], matching the platform this library
//! models. Hosts that do not extend that trust opt into
//! [`EscapePolicy::Escaped`] per render context. Supplied list headings are
//! escaped unconditionally, independent of the policy.

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapePolicy {
    /// Emit author-supplied text verbatim.
    #[default]
    Trusted,
    /// HTML-escape author-supplied text.
    Escaped,
}

impl EscapePolicy {
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            EscapePolicy::Trusted => Cow::Borrowed(text),
            EscapePolicy::Escaped => Cow::Owned(escape_html(text)),
        }
    }
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_covers_significant_chars() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn trusted_policy_is_passthrough() {
        let policy = EscapePolicy::default();
        assert_eq!(policy.apply("<b>bold</b>"), "<b>bold</b>");
    }

    #[test]
    fn escaped_policy_escapes() {
        assert_eq!(
            EscapePolicy::Escaped.apply("<b>bold</b>"),
            "&lt;b&gt;bold&lt;/b&gt;"
        );
    }
}
