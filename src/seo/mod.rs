//! SEO markup resolvers.
//!
//! Each resolver turns a [`RenderContext`] into a markup string for one
//! render point. The [`Renderer`] runs them in a fixed order.
//!
//! | Module    | Purpose                                      |
//! |-----------|----------------------------------------------|
//! | `cascade` | First-non-empty value resolution             |
//! | `og`      | Open Graph `<meta property>` elements        |
//! | `twitter` | Twitter Card `<meta name>` elements          |
//! | `schema`  | Schema.org JSON-LD script                    |
//! | `filters` | Extension points applied before output       |
//! | `inject`  | Splice markup into an HTML document          |

pub mod cascade;
mod filters;
mod inject;
mod og;
mod schema;
mod twitter;

pub use filters::Filters;
pub use inject::inject;
pub use og::OgTags;
pub use schema::SchemaMarkup;
pub use twitter::TwitterTags;

use crate::config::SiteSectionConfig;
use crate::page::{Document, PageContext};
use crate::store::{DocumentMeta, Settings};
use std::fmt;
use std::str::FromStr;

/// Everything a resolver may read for one page.
///
/// Built once per request; resolvers never write through it.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub site: &'a SiteSectionConfig,
    pub settings: &'a Settings,
    pub meta: &'a DocumentMeta,
    pub page: &'a PageContext,
    pub filters: &'a Filters,
}

impl<'a> RenderContext<'a> {
    pub fn document(&self) -> Option<&'a Document> {
        self.page.document.as_ref()
    }

    /// Canonical URL: the document permalink, else the site root.
    pub fn permalink(&self) -> &'a str {
        match self.document() {
            Some(doc) if !doc.permalink.is_empty() => doc.permalink.as_str(),
            _ => self.site.home(),
        }
    }

    /// Post title of the current document, `""` without one.
    pub fn post_title(&self) -> &'a str {
        self.document().map_or("", |doc| doc.title.as_str())
    }

    /// Browser title of the page (`<title>` text).
    pub fn browser_title(&self) -> &'a str {
        self.page.document_title.as_str()
    }

    pub fn excerpt(&self) -> &'a str {
        self.document().map_or("", |doc| doc.excerpt.as_str())
    }

    pub fn featured_image(&self) -> Option<&'a str> {
        self.document().and_then(Document::featured_image)
    }
}

/// Where in the page a resolver's output belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPoint {
    /// Inside `<head>`.
    Head,
    /// Just before `</body>`.
    Footer,
}

impl RenderPoint {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Footer => "footer",
        }
    }
}

impl fmt::Display for RenderPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "head" => Ok(Self::Head),
            "footer" => Ok(Self::Footer),
            _ => Err(format!("unknown render point `{s}`")),
        }
    }
}

/// A markup producer bound to one render point.
///
/// Resolvers never fail: a disabled feature or a page they have nothing to
/// say about yields an empty string.
pub trait Resolver {
    fn name(&self) -> &'static str;
    fn point(&self) -> RenderPoint;
    fn render(&self, ctx: &RenderContext<'_>) -> String;
}

/// Markup for both render points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    pub head: String,
    pub footer: String,
}

impl Markup {
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.footer.is_empty()
    }
}

/// Runs resolvers in registration order.
#[derive(Default)]
pub struct Renderer {
    resolvers: Vec<Box<dyn Resolver>>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// OG, Twitter, then Schema.
    pub fn standard() -> Self {
        Self::new().with(OgTags).with(TwitterTags).with(SchemaMarkup)
    }

    pub fn with(mut self, resolver: impl Resolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Concatenated output of every resolver registered for `point`.
    pub fn render(&self, point: RenderPoint, ctx: &RenderContext<'_>) -> String {
        let mut out = String::new();
        for resolver in self.resolvers.iter().filter(|r| r.point() == point) {
            let markup = resolver.render(ctx);
            crate::debug!("render"; "{} at {}: {} bytes", resolver.name(), point, markup.len());
            out.push_str(&markup);
        }
        out
    }

    pub fn render_all(&self, ctx: &RenderContext<'_>) -> Markup {
        Markup {
            head: self.render(RenderPoint::Head, ctx),
            footer: self.render(RenderPoint::Footer, ctx),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::Fixture;
    use super::*;
    use crate::store::keys;

    #[test]
    fn test_render_point_parse() {
        assert_eq!("head".parse(), Ok(RenderPoint::Head));
        assert_eq!("footer".parse(), Ok(RenderPoint::Footer));
        assert!("body".parse::<RenderPoint>().is_err());
    }

    #[test]
    fn test_context_permalink_falls_back_to_home() {
        let mut fx = Fixture::front_page();
        assert_eq!(fx.ctx().permalink(), "https://example.com");

        let mut fx = Fixture::singular();
        assert_eq!(fx.ctx().permalink(), "https://example.com/hello-world/");
    }

    #[test]
    fn test_context_titles() {
        let mut fx = Fixture::singular();
        fx.page.document_title = "Hello World – My Site".into();
        assert_eq!(fx.ctx().post_title(), "Hello World");
        assert_eq!(fx.ctx().browser_title(), "Hello World – My Site");

        let mut fx = Fixture::front_page();
        assert_eq!(fx.ctx().post_title(), "");
        assert_eq!(fx.ctx().browser_title(), "My Site – Home");
        assert_eq!(fx.ctx().excerpt(), "");
        assert_eq!(fx.ctx().featured_image(), None);
    }

    #[test]
    fn test_renderer_splits_points() {
        let mut fx = Fixture::singular();
        let markup = Renderer::standard().render_all(&fx.ctx());

        assert!(markup.head.contains("og:title"));
        assert!(markup.head.contains("twitter:card"));
        assert!(!markup.head.contains("ld+json"));
        assert!(markup.footer.starts_with("<script type=\"application/ld+json\">"));
        assert!(!markup.footer.contains("<meta"));
    }

    #[test]
    fn test_renderer_head_order() {
        let mut fx = Fixture::singular();
        let head = Renderer::standard().render(RenderPoint::Head, &fx.ctx());
        let og = head.find("og:title").unwrap();
        let twitter = head.find("twitter:card").unwrap();
        assert!(og < twitter);
    }

    #[test]
    fn test_renderer_all_disabled() {
        let mut fx = Fixture::singular()
            .option(keys::OG_ENABLED, "0")
            .option(keys::TWITTER_ENABLED, "0")
            .option(keys::SCHEMA_ENABLED, "0");
        assert!(Renderer::standard().render_all(&fx.ctx()).is_empty());
    }

    #[test]
    fn test_renderer_archive_is_empty() {
        let mut fx = Fixture::new(PageContext::default());
        assert!(Renderer::standard().render_all(&fx.ctx()).is_empty());
    }

    struct Fixed;

    impl Resolver for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }
        fn point(&self) -> RenderPoint {
            RenderPoint::Footer
        }
        fn render(&self, _: &RenderContext<'_>) -> String {
            "<!-- fixed -->\n".into()
        }
    }

    #[test]
    fn test_renderer_custom_resolver() {
        let mut fx = Fixture::front_page();
        let renderer = Renderer::new().with(Fixed);
        assert_eq!(renderer.render(RenderPoint::Head, &fx.ctx()), "");
        assert_eq!(renderer.render(RenderPoint::Footer, &fx.ctx()), "<!-- fixed -->\n");
    }
}
