//! Schema.org JSON-LD.
//!
//! Singular pages get an `Article`, the front page gets a `WebSite` with a
//! search action. Objects are built with keys in output order and pass
//! through [`Filters`](super::Filters) before serialization.

use super::{RenderContext, RenderPoint, Resolver, cascade};
use crate::page::Document;
use crate::utils::date::Timestamp;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Value, json};

const CONTEXT: &str = "https://schema.org";

/// Emits one `<script type="application/ld+json">` block.
pub struct SchemaMarkup;

impl Resolver for SchemaMarkup {
    fn name(&self) -> &'static str {
        "schema"
    }

    fn point(&self) -> RenderPoint {
        RenderPoint::Footer
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        if !ctx.settings.schema_enabled {
            return String::new();
        }

        let object = if ctx.page.singular {
            let Some(doc) = ctx.document() else {
                crate::debug!("schema"; "singular page without a document, skipping");
                return String::new();
            };
            ctx.filters.apply_schema_article(article(ctx, doc), doc.id)
        } else if ctx.page.front_page {
            ctx.filters.apply_schema_home(website(ctx))
        } else {
            return String::new();
        };

        script(&object)
    }
}

fn iso_date(ts: Option<Timestamp>) -> String {
    ts.map(Timestamp::to_iso8601).unwrap_or_default()
}

/// `Article` object for a single document.
fn article(ctx: &RenderContext<'_>, doc: &Document) -> Value {
    let image = cascade::image(ctx).unwrap_or_default();

    json!({
        "@context": CONTEXT,
        "@type": "Article",
        "headline": cascade::headline(ctx),
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": ctx.permalink(),
        },
        "datePublished": iso_date(doc.published),
        "dateModified": iso_date(doc.modified),
        "author": {
            "@type": "Person",
            "name": doc.author,
        },
        "publisher": {
            "@type": "Organization",
            "name": ctx.site.name,
            "logo": {
                "@type": "ImageObject",
                "url": cascade::publisher_logo(ctx),
            },
        },
        "description": cascade::article_description(ctx),
        "image": image,
    })
}

/// `WebSite` object for the front page.
fn website(ctx: &RenderContext<'_>) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "WebSite",
        "name": ctx.site.name,
        "alternateName": ctx.browser_title(),
        "url": ctx.site.home(),
        "potentialAction": {
            "@type": "SearchAction",
            "target": ctx.site.home_url("/?s={search_term_string}"),
            "query-input": "required name=search_term_string",
        },
    })
}

/// Pretty JSON with `<`, `>` and `&` escaped so the text cannot close the
/// surrounding script element. Slashes are left alone.
fn to_json(value: &Value) -> Option<String> {
    let mut buf = Vec::with_capacity(1024);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if let Err(e) = value.serialize(&mut ser) {
        crate::log!("schema"; "failed to serialize JSON-LD: {}", e);
        return None;
    }
    let json = String::from_utf8(buf).ok()?;

    Some(
        json.replace('<', "\\u003c")
            .replace('>', "\\u003e")
            .replace('&', "\\u0026"),
    )
}

fn script(value: &Value) -> String {
    match to_json(value) {
        Some(json) => format!("<script type=\"application/ld+json\">{json}</script>\n"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageContext;
    use crate::seo::test_support::Fixture;
    use crate::store::{DocId, keys};

    /// Parse the JSON body back out of the script element.
    fn parse(markup: &str) -> Value {
        let body = markup
            .strip_prefix("<script type=\"application/ld+json\">")
            .and_then(|s| s.strip_suffix("</script>\n"))
            .unwrap();
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_article_shape() {
        let mut fx = Fixture::singular();
        let json = parse(&SchemaMarkup.render(&fx.ctx()));

        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "Article");
        assert_eq!(json["headline"], "Hello World");
        assert_eq!(json["mainEntityOfPage"]["@type"], "WebPage");
        assert_eq!(json["mainEntityOfPage"]["@id"], "https://example.com/hello-world/");
        assert_eq!(json["datePublished"], "2024-06-15T14:30:45+00:00");
        assert_eq!(json["dateModified"], "2024-06-16T09:00:00+00:00");
        assert_eq!(json["author"]["name"], "Alice");
        assert_eq!(json["publisher"]["name"], "My Site");
        assert_eq!(json["publisher"]["logo"]["url"], cascade::PLACEHOLDER_LOGO);
        assert_eq!(json["description"], "First post.");
    }

    #[test]
    fn test_article_key_order() {
        let mut fx = Fixture::singular();
        let json = parse(&SchemaMarkup.render(&fx.ctx()));
        let order: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            order,
            [
                "@context",
                "@type",
                "headline",
                "mainEntityOfPage",
                "datePublished",
                "dateModified",
                "author",
                "publisher",
                "description",
                "image"
            ]
        );
    }

    #[test]
    fn test_article_image_always_present() {
        let mut fx = Fixture::singular();
        let json = parse(&SchemaMarkup.render(&fx.ctx()));
        assert_eq!(json["image"], "");

        let mut fx = Fixture::singular().option(keys::DEFAULT_IMAGE, "http://x.com/d.png");
        let json = parse(&SchemaMarkup.render(&fx.ctx()));
        assert_eq!(json["image"], "https://x.com/d.png");
        assert_eq!(json["publisher"]["logo"]["url"], "http://x.com/d.png");
    }

    #[test]
    fn test_article_description_prefers_excerpt_over_default() {
        let mut fx = Fixture::singular()
            .meta(keys::META_DESCRIPTION, "")
            .option(keys::DEFAULT_DESCRIPTION, "Default desc");
        let json = parse(&SchemaMarkup.render(&fx.ctx()));
        assert_eq!(json["description"], "First post.");
    }

    #[test]
    fn test_missing_dates_are_empty() {
        let mut fx = Fixture::singular();
        if let Some(doc) = fx.page.document.as_mut() {
            doc.published = None;
            doc.modified = None;
        }
        let json = parse(&SchemaMarkup.render(&fx.ctx()));
        assert_eq!(json["datePublished"], "");
        assert_eq!(json["dateModified"], "");
    }

    #[test]
    fn test_website_shape() {
        let mut fx = Fixture::front_page();
        let json = parse(&SchemaMarkup.render(&fx.ctx()));

        assert_eq!(json["@type"], "WebSite");
        assert_eq!(json["name"], "My Site");
        assert_eq!(json["alternateName"], "My Site – Home");
        assert_eq!(json["url"], "https://example.com");
        assert_eq!(json["potentialAction"]["@type"], "SearchAction");
        assert_eq!(
            json["potentialAction"]["target"],
            "https://example.com/?s={search_term_string}"
        );
        assert_eq!(
            json["potentialAction"]["query-input"],
            "required name=search_term_string"
        );
    }

    #[test]
    fn test_static_front_page_is_article() {
        let mut fx = Fixture::static_front_page();
        let json = parse(&SchemaMarkup.render(&fx.ctx()));
        assert_eq!(json["@type"], "Article");
        assert_eq!(json["headline"], "Hello World");
        assert!(json.get("potentialAction").is_none());
    }

    #[test]
    fn test_website_alternate_name_is_browser_title() {
        let mut fx = Fixture::front_page();
        fx.page.document_title = "My Site – Tagline".into();
        fx.page.document = Some(Document::new(7, "Latest post"));
        let json = parse(&SchemaMarkup.render(&fx.ctx()));
        assert_eq!(json["@type"], "WebSite");
        assert_eq!(json["alternateName"], "My Site – Tagline");
    }

    #[test]
    fn test_article_headline_without_browser_fallback() {
        let mut fx = Fixture::singular();
        fx.page.document_title = "Browser Title – My Site".into();
        if let Some(doc) = fx.page.document.as_mut() {
            doc.title.clear();
        }
        let json = parse(&SchemaMarkup.render(&fx.ctx()));
        assert_eq!(json["headline"], "");
    }

    #[test]
    fn test_pretty_and_unescaped_slashes() {
        let mut fx = Fixture::front_page();
        let out = SchemaMarkup.render(&fx.ctx());
        assert!(out.contains("\n    \"@context\": \"https://schema.org\""));
        assert!(!out.contains("\\/"));
    }

    #[test]
    fn test_script_breakout_is_escaped() {
        let mut fx = Fixture::singular().meta(keys::META_TITLE, "</script><b>&");
        let out = SchemaMarkup.render(&fx.ctx());
        assert!(!out.contains("</script><b>"));
        assert_eq!(parse(&out)["headline"], "</script><b>&");
    }

    #[test]
    fn test_disabled_emits_nothing() {
        let mut fx = Fixture::singular().option(keys::SCHEMA_ENABLED, "0");
        assert_eq!(SchemaMarkup.render(&fx.ctx()), "");
    }

    #[test]
    fn test_other_pages_emit_nothing() {
        let mut fx = Fixture::new(PageContext::default());
        assert_eq!(SchemaMarkup.render(&fx.ctx()), "");
    }

    #[test]
    fn test_filters_applied() {
        let mut fx = Fixture::singular();
        fx.filters.on_schema_article(|mut value, doc| {
            value["wordCount"] = json!(doc.0 * 10);
            value
        });
        fx.filters.on_schema_home(|_| json!({"never": true}));

        let json = parse(&SchemaMarkup.render(&fx.ctx()));
        assert_eq!(json["wordCount"], 420);
        assert_eq!(json["@type"], "Article");
        assert_eq!(fx.page.doc_id(), Some(DocId(42)));
    }
}
