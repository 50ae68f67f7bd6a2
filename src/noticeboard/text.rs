//! Plain-text helpers shared by the save path and the renderers.
//!
//! [`sanitize_text`] is the minimal field sanitization applied before any
//! value is written to record metadata or read from a request parameter. It
//! is deliberately not an HTML escaper—see [`crate::render::escape`] for the
//! output-side policy.

/// Strips markup tags, collapses whitespace runs (including newlines) to
/// single spaces, and trims the result.
///
/// Unterminated tags are dropped to the end of input rather than kept.
pub fn sanitize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for ch in raw.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag && !c.is_control() => out.push(c),
            c if !in_tag && (c == '\n' || c == '\r' || c == '\t') => out.push(' '),
            _ => {}
        }
    }
    let mut collapsed = String::with_capacity(out.len());
    let mut last_was_space = false;
    for ch in out.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                collapsed.push(' ');
            }
            last_was_space = true;
        } else {
            collapsed.push(ch);
            last_was_space = false;
        }
    }
    collapsed.trim().to_string()
}

/// Truncates `text` to at most `max_words` whitespace-separated words,
/// appending an ellipsis when anything was cut.
pub fn trim_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return words.join(" ");
    }
    let mut trimmed = words[..max_words].join(" ");
    trimmed.push('…');
    trimmed
}
