//! Value resolution: the first non-empty candidate wins.
//!
//! Every chain is built from `Option::or_else`, so later candidates are only
//! looked at when the earlier ones are empty. Empty strings count as unset.

use super::RenderContext;
use crate::store::OgType;
use std::borrow::Cow;

/// Publisher logo used when neither a site logo nor a default image exists.
pub const PLACEHOLDER_LOGO: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// `Some(value)` unless it is empty.
fn present(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// Borrow an optional owned string, treating `""` as unset.
fn stored(value: &Option<String>) -> Option<&str> {
    value.as_deref().and_then(present)
}

/// Rewrite a leading `http://` to `https://`. Nothing else changes.
pub fn force_https(url: &str) -> Cow<'_, str> {
    match url.strip_prefix("http://") {
        Some(rest) => Cow::Owned(format!("https://{rest}")),
        None => Cow::Borrowed(url),
    }
}

/// custom title → post title → browser title on the front page.
pub fn title<'a>(ctx: &RenderContext<'a>) -> &'a str {
    stored(&ctx.meta.custom_title)
        .or_else(|| present(ctx.post_title()))
        .or_else(|| ctx.page.front_page.then(|| ctx.browser_title()))
        .unwrap_or("")
}

/// custom title → post title, with no browser title fallback.
///
/// Used for the Article headline.
pub fn headline<'a>(ctx: &RenderContext<'a>) -> &'a str {
    stored(&ctx.meta.custom_title).unwrap_or_else(|| ctx.post_title())
}

/// custom description → default description → site description → excerpt.
///
/// Order used by the Open Graph and Twitter tags.
pub fn description<'a>(ctx: &RenderContext<'a>) -> &'a str {
    stored(&ctx.meta.custom_description)
        .or_else(|| stored(&ctx.settings.default_description))
        .or_else(|| present(&ctx.site.description))
        .or_else(|| present(ctx.excerpt()))
        .unwrap_or("")
}

/// custom description → excerpt → default description → site description.
///
/// Order used by the Article object.
pub fn article_description<'a>(ctx: &RenderContext<'a>) -> &'a str {
    stored(&ctx.meta.custom_description)
        .or_else(|| present(ctx.excerpt()))
        .or_else(|| stored(&ctx.settings.default_description))
        .or_else(|| present(&ctx.site.description))
        .unwrap_or("")
}

/// custom image → featured image → default image, with `https` forced.
///
/// `None` means the image element is omitted.
pub fn image<'a>(ctx: &RenderContext<'a>) -> Option<Cow<'a, str>> {
    stored(&ctx.meta.custom_image)
        .or_else(|| ctx.featured_image())
        .or_else(|| stored(&ctx.settings.default_image))
        .map(force_https)
}

/// Document og type → `website` on the front page, `article` elsewhere.
pub fn og_type(ctx: &RenderContext<'_>) -> OgType {
    ctx.meta.og_type.unwrap_or(if ctx.page.front_page {
        OgType::Website
    } else {
        OgType::Article
    })
}

/// Site logo → default image → transparent placeholder.
pub fn publisher_logo<'a>(ctx: &RenderContext<'a>) -> &'a str {
    ctx.site
        .logo
        .as_deref()
        .and_then(present)
        .or_else(|| stored(&ctx.settings.default_image))
        .unwrap_or(PLACEHOLDER_LOGO)
}
