//! Open Graph tags.
//!
//! ```html
//! <meta property="og:title" content="Hello World" />
//! <meta property="og:type" content="article" />
//! <meta property="og:url" content="https://example.com/hello-world/" />
//! <meta property="og:site_name" content="My Site" />
//! <meta property="og:description" content="First post." />
//! <meta property="og:image" content="https://example.com/a.png" />
//! ```

use super::{RenderContext, RenderPoint, Resolver, cascade};
use crate::utils::html::{esc_url, escape_attr, meta_property};

/// Emits `og:*` elements on singular and front pages.
pub struct OgTags;

impl Resolver for OgTags {
    fn name(&self) -> &'static str {
        "og"
    }

    fn point(&self) -> RenderPoint {
        RenderPoint::Head
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        if !ctx.settings.og_enabled || !ctx.page.is_renderable() {
            return String::new();
        }

        let mut out = String::with_capacity(512);
        out.push_str(&meta_property("og:title", &escape_attr(cascade::title(ctx))));
        out.push_str(&meta_property("og:type", cascade::og_type(ctx).as_str()));
        out.push_str(&meta_property("og:url", &esc_url(ctx.permalink())));
        out.push_str(&meta_property("og:site_name", &escape_attr(&ctx.site.name)));
        out.push_str(&meta_property(
            "og:description",
            &escape_attr(cascade::description(ctx)),
        ));
        if let Some(image) = cascade::image(ctx) {
            out.push_str(&meta_property("og:image", &esc_url(&image)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageContext;
    use crate::seo::test_support::Fixture;
    use crate::store::keys;

    #[test]
    fn test_singular_tags_in_order() {
        let mut fx = Fixture::singular();
        let out = OgTags.render(&fx.ctx());
        let expected = "\
<meta property=\"og:title\" content=\"Hello World\" />
<meta property=\"og:type\" content=\"article\" />
<meta property=\"og:url\" content=\"https://example.com/hello-world/\" />
<meta property=\"og:site_name\" content=\"My Site\" />
<meta property=\"og:description\" content=\"Just another site\" />
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_custom_title_is_escaped() {
        let mut fx = Fixture::singular().meta(keys::META_TITLE, "Tom & \"Jerry\"");
        let out = OgTags.render(&fx.ctx());
        assert!(out.contains("content=\"Tom &amp; &quot;Jerry&quot;\""));
    }

    #[test]
    fn test_disabled_emits_nothing() {
        let mut fx = Fixture::singular().option(keys::OG_ENABLED, "0");
        assert_eq!(OgTags.render(&fx.ctx()), "");
    }

    #[test]
    fn test_image_forced_to_https() {
        let mut fx = Fixture::singular().meta(keys::META_IMAGE, "http://x.com/a.png");
        let out = OgTags.render(&fx.ctx());
        assert!(out.ends_with("<meta property=\"og:image\" content=\"https://x.com/a.png\" />\n"));
    }

    #[test]
    fn test_front_page_is_website() {
        let mut fx = Fixture::front_page();
        let out = OgTags.render(&fx.ctx());
        assert!(out.contains("og:type\" content=\"website\""));
        assert!(out.contains("og:title\" content=\"My Site – Home\""));
        assert!(out.contains("og:url\" content=\"https://example.com\""));
    }

    #[test]
    fn test_static_front_page_is_website() {
        let mut fx = Fixture::static_front_page();
        let out = OgTags.render(&fx.ctx());
        assert!(out.contains("og:type\" content=\"website\""));
        assert!(out.contains("og:title\" content=\"Hello World\""));
        assert!(out.contains("og:url\" content=\"https://example.com/hello-world/\""));
    }

    #[test]
    fn test_other_pages_emit_nothing() {
        let mut fx = Fixture::new(PageContext::default());
        assert_eq!(OgTags.render(&fx.ctx()), "");
    }
}
