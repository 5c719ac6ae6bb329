//! Twitter Card tags.

use super::{RenderContext, RenderPoint, Resolver, cascade};
use crate::utils::html::{esc_url, escape_attr, meta_name};

/// Handle emitted when no site handle is configured.
pub const FALLBACK_HANDLE: &str = "@default_handle";

const CARD: &str = "summary_large_image";

/// Emits `twitter:*` elements on singular pages only.
pub struct TwitterTags;

impl Resolver for TwitterTags {
    fn name(&self) -> &'static str {
        "twitter"
    }

    fn point(&self) -> RenderPoint {
        RenderPoint::Head
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        if !ctx.settings.twitter_enabled || !ctx.page.singular {
            return String::new();
        }

        let handle = ctx
            .settings
            .twitter_handle
            .as_deref()
            .unwrap_or(FALLBACK_HANDLE);

        let mut out = String::with_capacity(512);
        out.push_str(&meta_name("twitter:card", CARD));
        out.push_str(&meta_name("twitter:title", &escape_attr(cascade::title(ctx))));
        out.push_str(&meta_name(
            "twitter:description",
            &escape_attr(cascade::description(ctx)),
        ));
        out.push_str(&meta_name("twitter:url", &esc_url(ctx.permalink())));
        out.push_str(&meta_name("twitter:site", &escape_attr(handle)));
        if let Some(image) = cascade::image(ctx) {
            out.push_str(&meta_name("twitter:image", &esc_url(&image)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::test_support::Fixture;
    use crate::store::keys;

    #[test]
    fn test_singular_tags_in_order() {
        let mut fx = Fixture::singular()
            .meta(keys::META_TITLE, "Custom")
            .option(keys::TWITTER_HANDLE, "@site")
            .thumbnail("http://x.com/f.png");
        let out = TwitterTags.render(&fx.ctx());
        let expected = "\
<meta name=\"twitter:card\" content=\"summary_large_image\" />
<meta name=\"twitter:title\" content=\"Custom\" />
<meta name=\"twitter:description\" content=\"Just another site\" />
<meta name=\"twitter:url\" content=\"https://example.com/hello-world/\" />
<meta name=\"twitter:site\" content=\"@site\" />
<meta name=\"twitter:image\" content=\"https://x.com/f.png\" />
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_fallback_handle() {
        let mut fx = Fixture::singular().option(keys::TWITTER_HANDLE, "");
        let out = TwitterTags.render(&fx.ctx());
        assert!(out.contains("twitter:site\" content=\"@default_handle\""));
        assert!(!out.contains("twitter:image"));
    }

    #[test]
    fn test_static_front_page_emits_tags() {
        let mut fx = Fixture::static_front_page();
        let out = TwitterTags.render(&fx.ctx());
        assert!(out.starts_with("<meta name=\"twitter:card\" content=\"summary_large_image\" />\n"));
        assert!(out.contains("twitter:title\" content=\"Hello World\""));
    }

    #[test]
    fn test_front_page_emits_nothing() {
        let mut fx = Fixture::front_page();
        assert_eq!(TwitterTags.render(&fx.ctx()), "");
    }

    #[test]
    fn test_disabled_emits_nothing() {
        let mut fx = Fixture::singular().option(keys::TWITTER_ENABLED, "0");
        assert_eq!(TwitterTags.render(&fx.ctx()), "");
    }

    #[test]
    fn test_title_matches_og() {
        let mut fx = Fixture::singular();
        let ctx = fx.ctx();
        let og = crate::seo::OgTags.render(&ctx);
        let twitter = TwitterTags.render(&ctx);
        assert!(og.contains("content=\"Hello World\""));
        assert!(twitter.contains("twitter:title\" content=\"Hello World\""));
    }
}
