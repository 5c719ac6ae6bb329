//! Admin HTML: the settings page and the per-document meta box.
//!
//! Stored values are escaped into the markup; nothing here writes.

use super::nonce::META_BOX_FIELD;
use crate::config::AdminConfig;
use crate::seo::Filters;
use crate::store::{DocId, OgType, Options, PostMeta, Settings, keys};
use crate::utils::html::{esc_url, escape, escape_attr};

/// Meta box form field names.
pub mod field {
    pub const TITLE: &str = "db_seo_custom_meta_title";
    pub const DESCRIPTION: &str = "db_seo_custom_meta_description";
    pub const IMAGE: &str = "db_seo_custom_image";
    pub const OG_TYPE: &str = "db_seo_og_type";
}

/// Hidden field carrying the settings page token.
pub const SETTINGS_FIELD: &str = "db_seo_settings_nonce";

/// Post types that get the meta box, after the `meta_box_post_types` filter.
pub fn meta_box_post_types(admin: &AdminConfig, filters: &Filters) -> Vec<String> {
    filters.apply_meta_box_post_types(admin.post_types.clone())
}

fn checked(on: bool) -> &'static str {
    if on { " checked='checked'" } else { "" }
}

fn selected(on: bool) -> &'static str {
    if on { " selected='selected'" } else { "" }
}

fn og_type_options(current: &str) -> String {
    OgType::ALL
        .into_iter()
        .map(|t| {
            format!(
                "<option value=\"{}\"{}>{}</option>\n",
                t.as_str(),
                selected(t.as_str() == current),
                escape(t.label())
            )
        })
        .collect()
}

fn image_preview(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    format!(
        "<div class=\"db-seo-image-preview\"><img src=\"{}\" alt=\"Preview\" /></div>\n",
        esc_url(url)
    )
}

// ============================================================================
// Settings page
// ============================================================================

fn toggle_row(key: &str, label: &str, help: &str, on: bool) -> String {
    format!(
        "<tr>\n<th scope=\"row\">{label}</th>\n<td>\
         <label for=\"{key}\"><input type=\"checkbox\" id=\"{key}\" name=\"{key}\" value=\"1\"{} /> {label}</label>\
         <p class=\"description\">{help}</p></td>\n</tr>\n",
        checked(on)
    )
}

fn text_row(key: &str, label: &str, help: &str, value: &str, extra: &str) -> String {
    format!(
        "<tr>\n<th scope=\"row\">{label}</th>\n<td>\
         <input type=\"text\" id=\"{key}\" name=\"{key}\" value=\"{}\" class=\"regular-text\" />\n\
         {extra}<p class=\"description\">{help}</p></td>\n</tr>\n",
        escape_attr(value)
    )
}

/// Settings page with the General and Social Media sections.
pub fn settings_page(options: &dyn Options, token: &str) -> String {
    let settings = Settings::read(options);
    let description = settings.default_description.as_deref().unwrap_or("");
    let image = settings.default_image.as_deref().unwrap_or("");
    let handle = settings.twitter_handle.as_deref().unwrap_or("");

    let mut html = String::with_capacity(4096);
    html.push_str("<div class=\"wrap db-seo-settings-page\">\n<h1>DB SEO Settings</h1>\n");
    html.push_str("<form method=\"post\">\n");
    html.push_str(&format!(
        "<input type=\"hidden\" name=\"{SETTINGS_FIELD}\" value=\"{}\" />\n",
        escape_attr(token)
    ));

    html.push_str("<h2>General Settings</h2>\n");
    html.push_str("<p>Configure the general SEO settings for your site.</p>\n");
    html.push_str("<table class=\"form-table\">\n");
    html.push_str(&toggle_row(
        keys::OG_ENABLED,
        "Enable Open Graph Tags",
        "Adds Open Graph meta tags for better sharing on Facebook and other platforms.",
        settings.og_enabled,
    ));
    html.push_str(&toggle_row(
        keys::TWITTER_ENABLED,
        "Enable Twitter Cards",
        "Adds Twitter Card meta tags for better sharing on Twitter.",
        settings.twitter_enabled,
    ));
    html.push_str(&toggle_row(
        keys::SCHEMA_ENABLED,
        "Enable Schema.org Markup",
        "Adds Schema.org structured data for better search engine understanding of your content.",
        settings.schema_enabled,
    ));
    html.push_str(&format!(
        "<tr>\n<th scope=\"row\">Default Meta Description</th>\n<td>\
         <textarea id=\"{key}\" name=\"{key}\" rows=\"3\" class=\"large-text\">{}</textarea>\
         <p class=\"description\">Enter a default meta description to use if no custom description is provided.</p></td>\n</tr>\n",
        escape(description),
        key = keys::DEFAULT_DESCRIPTION,
    ));
    html.push_str("</table>\n");

    html.push_str("<h2>Social Media Settings</h2>\n");
    html.push_str("<p>Configure how your content appears when shared on social media platforms.</p>\n");
    html.push_str("<table class=\"form-table\">\n");
    html.push_str(&text_row(
        keys::DEFAULT_IMAGE,
        "Default Image URL",
        "Enter the URL of the default image to be used if no other image is defined.",
        image,
        &image_preview(image),
    ));
    html.push_str(&text_row(
        keys::TWITTER_HANDLE,
        "Twitter Site Handle",
        "Enter the Twitter handle for the site (e.g., @yoursite).",
        handle,
        "",
    ));
    html.push_str(&format!(
        "<tr>\n<th scope=\"row\">Default Open Graph Type</th>\n<td>\
         <select name=\"{key}\" id=\"{key}\">\n{}</select>\
         <p class=\"description\">Select the default Open Graph type to use for the home page or generic pages.</p></td>\n</tr>\n",
        og_type_options(settings.default_og_type.as_str()),
        key = keys::DEFAULT_OG_TYPE,
    ));
    html.push_str("</table>\n");

    html.push_str("<p class=\"submit\"><input type=\"submit\" class=\"button button-primary\" value=\"Save Changes\" /></p>\n");
    html.push_str("</form>\n</div>\n");
    html
}

// ============================================================================
// Meta box
// ============================================================================

/// Meta box for one document. The og type select falls back to `article`.
pub fn meta_box(meta: &dyn PostMeta, doc: DocId, token: &str) -> String {
    let get = |key: &str| meta.get_meta(doc, key).unwrap_or("");
    let title = get(keys::META_TITLE);
    let description = get(keys::META_DESCRIPTION);
    let image = get(keys::META_IMAGE);
    let og_type = match get(keys::META_OG_TYPE) {
        "" => OgType::Article.as_str(),
        stored => stored,
    };

    let mut html = String::with_capacity(2048);
    html.push_str(&format!(
        "<input type=\"hidden\" id=\"{META_BOX_FIELD}\" name=\"{META_BOX_FIELD}\" value=\"{}\" />\n",
        escape_attr(token)
    ));
    html.push_str("<div class=\"db-seo-meta-box\">\n");

    html.push_str(&format!(
        "<p>\n<label for=\"{key}\"><strong>Custom Meta Title:</strong></label>\n\
         <input type=\"text\" id=\"{key}\" name=\"{key}\" value=\"{}\" class=\"widefat\" />\n\
         <span class=\"description\">Enter a custom title for social sharing and search results.</span>\n</p>\n",
        escape_attr(title),
        key = field::TITLE,
    ));

    html.push_str(&format!(
        "<p>\n<label for=\"{key}\"><strong>Custom Meta Description:</strong></label>\n\
         <textarea id=\"{key}\" name=\"{key}\" class=\"widefat\" rows=\"3\">{}</textarea>\n\
         <span class=\"description\">Enter a custom description for social sharing and search results.</span>\n</p>\n",
        escape(description),
        key = field::DESCRIPTION,
    ));

    html.push_str(&format!(
        "<p>\n<label for=\"{key}\"><strong>Custom Image URL:</strong></label>\n\
         <input type=\"text\" id=\"{key}\" name=\"{key}\" value=\"{}\" class=\"widefat\" />\n{}\
         <span class=\"description\">Select an image to use for social sharing.</span>\n</p>\n",
        escape_attr(image),
        image_preview(image),
        key = field::IMAGE,
    ));

    html.push_str(&format!(
        "<p>\n<label for=\"{key}\"><strong>Open Graph Type:</strong></label>\n\
         <select id=\"{key}\" name=\"{key}\">\n{}</select>\n\
         <span class=\"description\">Select the Open Graph type for this post/page.</span>\n</p>\n",
        og_type_options(og_type),
        key = field::OG_TYPE,
    ));

    html.push_str("</div>\n");
    html
}
