//! `seomark render` and `seomark inject`.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::args::PointArg;
use super::common::{Session, load_page};
use crate::seo::{Markup, inject};
use crate::{debug, log};

fn select(markup: Markup, point: PointArg) -> String {
    match point {
        PointArg::Head => markup.head,
        PointArg::Footer => markup.footer,
        PointArg::All => markup.head + &markup.footer,
    }
}

/// Print the markup for one page to stdout.
pub fn render(session: &Session, page: &Path, point: PointArg) -> Result<()> {
    let page = load_page(page)?;
    let markup = session.markup(&page);
    if markup.is_empty() {
        debug!("render"; "nothing to emit for this page");
    }

    let out = select(markup, point);
    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Splice the page markup into an HTML file.
pub fn inject_file(session: &Session, html: &Path, page: &Path, output: Option<&Path>) -> Result<()> {
    let page = load_page(page)?;
    let source = fs::read_to_string(html)
        .with_context(|| format!("failed to read '{}'", html.display()))?;

    let result = inject(&source, &session.markup(&page));

    match output {
        Some(path) => {
            fs::write(path, &result)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            log!("inject"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(result.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::test_support::{SINGULAR_PAGE, project, write_page};

    #[test]
    fn test_select_points() {
        let markup = Markup {
            head: "H".into(),
            footer: "F".into(),
        };
        assert_eq!(select(markup.clone(), PointArg::Head), "H");
        assert_eq!(select(markup.clone(), PointArg::Footer), "F");
        assert_eq!(select(markup, PointArg::All), "HF");
    }

    #[test]
    fn test_inject_file_writes_output() {
        let (temp, config) = project("");
        let session = Session::open(config).unwrap();
        let page = write_page(temp.path(), SINGULAR_PAGE);
        let html = temp.path().join("index.html");
        let out = temp.path().join("out.html");
        fs::write(&html, "<html><head></head><body></body></html>").unwrap();

        inject_file(&session, &html, &page, Some(&out)).unwrap();

        let result = fs::read_to_string(&out).unwrap();
        let head_end = result.find("</head>").unwrap();
        assert!(result.find("og:title").unwrap() < head_end);
        assert!(result.find("application/ld+json").unwrap() > head_end);
    }
}
