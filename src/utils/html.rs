//! HTML utility functions.
//!
//! - `escape()`, `escape_attr()` - HTML entity escaping (existing entities kept)
//! - `esc_url_raw()` - URL cleanup for storage
//! - `esc_url()` - URL cleanup for attribute output
//! - `meta_property()`, `meta_name()` - `<meta>` element builders

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::borrow::Cow;
use url::{ParseError, Url};

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(c) = rest.chars().next() {
        if c == '&'
            && let Some(len) = entity_len(rest)
        {
            result.push_str(&rest[..len]);
            rest = &rest[len..];
            continue;
        }
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }
    Cow::Owned(result)
}

/// Length of a well-formed entity (`&name;`, `&#123;`, `&#x1f;`) at the start
/// of `s`.
fn entity_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let (start, valid): (usize, fn(&u8) -> bool) = match bytes.get(1..3) {
        Some([b'#', b'x' | b'X']) => (3, u8::is_ascii_hexdigit),
        Some([b'#', _]) => (2, u8::is_ascii_digit),
        _ if bytes.get(1).is_some_and(u8::is_ascii_alphabetic) => (1, u8::is_ascii_alphanumeric),
        _ => return None,
    };
    let run = bytes[start..].iter().take_while(|&b| valid(b)).count();
    let end = start + run;
    (run > 0 && bytes.get(end) == Some(&b';')).then_some(end + 1)
}

// =============================================================================
// URL Cleanup
// =============================================================================

/// Schemes accepted by `esc_url_raw()`.
const ALLOWED_SCHEMES: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "irc6", "ircs", "gopher", "nntp",
    "feed", "telnet", "mms", "rtsp", "sms", "svn", "tel", "fax", "xmpp", "webcal", "urn",
];

/// Punctuation allowed to survive URL cleanup (besides ASCII alphanumerics).
const URL_PUNCT: &str = "-~+_.?#=!&;,/:%@$|*'()[]";

/// Bytes percent-encoded after cleanup. Non-ASCII is always encoded.
const URL_ENCODE: &AsciiSet = &CONTROLS.add(b' ');

#[inline]
fn is_url_char(c: char) -> bool {
    c == ' ' || c.is_ascii_alphanumeric() || URL_PUNCT.contains(c) || !c.is_ascii()
}

/// Clean a URL for storage.
///
/// Characters outside the URL set are dropped and spaces and non-ASCII are
/// percent-encoded. A bare `host/path` gets an `http://` prefix. URLs with a
/// scheme outside [`ALLOWED_SCHEMES`], or that fail to parse as absolute
/// URLs, collapse to the empty string.
pub fn esc_url_raw(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    let kept: String = url.chars().filter(|&c| is_url_char(c)).collect();
    let cleaned = utf8_percent_encode(&kept, URL_ENCODE).to_string();
    if cleaned.is_empty() {
        return String::new();
    }

    match Url::parse(&cleaned) {
        Ok(parsed) if ALLOWED_SCHEMES.contains(&parsed.scheme()) => cleaned,
        Ok(_) => String::new(),
        Err(ParseError::RelativeUrlWithoutBase) if cleaned.starts_with(['/', '#', '?']) => {
            cleaned
        }
        Err(ParseError::RelativeUrlWithoutBase) => format!("http://{cleaned}"),
        Err(e) => {
            crate::debug!("url"; "dropping `{}`: {}", cleaned, e);
            String::new()
        }
    }
}

/// Clean a URL for output inside an HTML attribute.
pub fn esc_url(url: &str) -> String {
    let raw = esc_url_raw(url);
    if !raw.contains(['&', '\'']) {
        return raw;
    }

    let mut out = String::with_capacity(raw.len() + 8);
    let mut rest = raw.as_str();
    while let Some(c) = rest.chars().next() {
        match c {
            '&' if rest.starts_with("&#038;") => {
                out.push_str("&#038;");
                rest = &rest[6..];
                continue;
            }
            '&' => out.push_str("&#038;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }
    out
}

// =============================================================================
// Meta Elements
// =============================================================================

/// `<meta property="..." content="..." />` line (Open Graph style).
pub fn meta_property(property: &str, content: &str) -> String {
    format!("<meta property=\"{property}\" content=\"{content}\" />\n")
}

/// `<meta name="..." content="..." />` line (Twitter Card style).
pub fn meta_name(name: &str, content: &str) -> String {
    format!("<meta name=\"{name}\" content=\"{content}\" />\n")
}
