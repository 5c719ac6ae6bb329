//! Splice rendered markup into an HTML document.

use super::Markup;

/// Byte offset of the first (or last) case-insensitive match of `tag`.
fn find_tag(lower: &str, tag: &str, last: bool) -> Option<usize> {
    if last { lower.rfind(tag) } else { lower.find(tag) }
}

/// Insert head markup before `</head>` and footer markup before `</body>`.
///
/// Tags are matched case-insensitively. When a tag is missing its markup is
/// appended at the end of the document.
pub fn inject(html: &str, markup: &Markup) -> String {
    // ASCII lowercasing keeps byte offsets valid for `html`.
    let lower = html.to_ascii_lowercase();

    let mut inserts: Vec<(usize, &str)> = Vec::with_capacity(2);
    let mut trailing = String::new();

    for (tag, text, last) in [
        ("</head>", markup.head.as_str(), false),
        ("</body>", markup.footer.as_str(), true),
    ] {
        if text.is_empty() {
            continue;
        }
        match find_tag(&lower, tag, last) {
            Some(pos) => inserts.push((pos, text)),
            None => {
                crate::debug!("inject"; "no {} found, appending", tag);
                trailing.push_str(text);
            }
        }
    }
    inserts.sort_by_key(|(pos, _)| *pos);

    let mut out = String::with_capacity(html.len() + markup.head.len() + markup.footer.len());
    let mut cursor = 0;
    for (pos, text) in inserts {
        out.push_str(&html[cursor..pos]);
        out.push_str(text);
        cursor = pos;
    }
    out.push_str(&html[cursor..]);
    out.push_str(&trailing);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup(head: &str, footer: &str) -> Markup {
        Markup {
            head: head.into(),
            footer: footer.into(),
        }
    }

    #[test]
    fn test_inject_both_points() {
        let html = "<html><head><title>x</title></head><body><p>hi</p></body></html>";
        let out = inject(html, &markup("<meta />", "<script></script>"));
        assert_eq!(
            out,
            "<html><head><title>x</title><meta /></head><body><p>hi</p><script></script></body></html>"
        );
    }

    #[test]
    fn test_inject_case_insensitive() {
        let html = "<HTML><HEAD></HEAD><BODY></BODY></HTML>";
        let out = inject(html, &markup("A", "B"));
        assert_eq!(out, "<HTML><HEAD>A</HEAD><BODY>B</BODY></HTML>");
    }

    #[test]
    fn test_inject_missing_tags_append() {
        let out = inject("<p>fragment</p>", &markup("A", "B"));
        assert_eq!(out, "<p>fragment</p>AB");
    }

    #[test]
    fn test_inject_empty_markup_is_identity() {
        let html = "<head></head><body></body>";
        assert_eq!(inject(html, &Markup::default()), html);
    }

    #[test]
    fn test_inject_last_body_close() {
        let html = "<body><pre>&lt;/body&gt; </body></pre></body>";
        let out = inject(html, &markup("", "X"));
        assert!(out.ends_with("</pre>X</body>"));
    }

    #[test]
    fn test_inject_non_ascii_content() {
        let html = "<head><title>Café – Ünïcode</title></head><body>ß</body>";
        let out = inject(html, &markup("H", "F"));
        assert_eq!(out, "<head><title>Café – Ünïcode</title>H</head><body>ßF</body>");
    }
}
