//! Input sanitizers for values submitted through the admin forms.
//!
//! URL cleanup lives in [`crate::utils::html`] since output escaping shares it.

use regex::Regex;
use std::sync::LazyLock;

/// `<script>`/`<style>` elements including their content.
static RE_SCRIPT_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(?i-u:script|style)[^>]*>.*?</(?i-u:script|style)>").unwrap()
});

/// Anything that looks like a tag, comment or doctype.
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[a-zA-Z/!?][^>]*>?").unwrap());

/// Percent-encoded octets such as `%0A`.
static RE_OCTET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%[a-fA-F0-9]{2}").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n\t ]+").unwrap());

static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").unwrap());

/// Single-line text: tags stripped, octets removed, whitespace collapsed.
pub fn sanitize_text_field(raw: &str) -> String {
    sanitize(raw, false)
}

/// Multi-line text: like [`sanitize_text_field`] but newlines survive.
pub fn sanitize_textarea_field(raw: &str) -> String {
    sanitize(raw, true)
}

fn sanitize(raw: &str, keep_newlines: bool) -> String {
    let mut text = raw.to_string();

    if text.contains('<') {
        text = strip_all_tags(&text);
        // A `<` that did not open a tag is kept as text.
        text = text.replace('<', "&lt;");
    }

    if !keep_newlines {
        text = RE_WHITESPACE.replace_all(&text, " ").into_owned();
    }
    let mut text = text.trim().to_string();

    let mut found = false;
    while RE_OCTET.is_match(&text) {
        text = RE_OCTET.replace_all(&text, "").into_owned();
        found = true;
    }
    if found {
        text = RE_SPACES.replace_all(&text, " ").trim().to_string();
    }

    text
}

/// Remove `<script>`/`<style>` blocks and every remaining tag.
fn strip_all_tags(text: &str) -> String {
    let text = RE_SCRIPT_STYLE.replace_all(text, "");
    RE_TAG.replace_all(&text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_strips_tags() {
        assert_eq!(sanitize_text_field("<b>Bold</b> title"), "Bold title");
        assert_eq!(
            sanitize_text_field("a<script>alert(1)</script>b"),
            "ab"
        );
        assert_eq!(
            sanitize_text_field("x<STYLE type=\"text/css\">p{}</Style>y"),
            "xy"
        );
    }

    #[test]
    fn test_text_keeps_lone_less_than() {
        assert_eq!(sanitize_text_field("1 < 2 <b>x</b>"), "1 &lt; 2 x");
    }

    #[test]
    fn test_text_collapses_whitespace() {
        assert_eq!(sanitize_text_field("  a \n\t b  "), "a b");
    }

    #[test]
    fn test_text_removes_octets() {
        assert_eq!(sanitize_text_field("a%0Ab %20 c"), "ab c");
        assert_eq!(sanitize_text_field("%%4141"), "");
    }

    #[test]
    fn test_textarea_keeps_newlines() {
        assert_eq!(
            sanitize_textarea_field("line one\nline <i>two</i>\n"),
            "line one\nline two"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize_text_field("@site_handle"), "@site_handle");
        assert_eq!(sanitize_text_field("Café – ünïcode"), "Café – ünïcode");
    }
}
