//! `[site]` section configuration.
//!
//! Platform-level site information the resolvers read but never own.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "My Blog"
//! description = "A personal blog"
//! url = "https://myblog.com"
//! logo = "https://myblog.com/logo.png"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site metadata shared by every rendered page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site name (`og:site_name`, publisher name).
    pub name: String,

    /// Site tagline, used as a description fallback.
    pub description: String,

    /// Site root URL (e.g., "https://example.com").
    pub url: String,

    /// Site logo URL for the Article publisher.
    pub logo: Option<String>,
}

/// Field paths for diagnostics.
pub struct SiteFields {
    pub name: FieldPath,
    pub url: FieldPath,
    pub logo: FieldPath,
}

impl SiteSectionConfig {
    pub const FIELDS: SiteFields = SiteFields {
        name: FieldPath::new("site.name"),
        url: FieldPath::new("site.url"),
        logo: FieldPath::new("site.logo"),
    };

    /// Site root without a trailing slash.
    pub fn home(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Absolute URL for a site-relative path (like `home_url('/x')`).
    ///
    /// Plain concatenation: `url::Url` would percent-encode template
    /// placeholders such as `{search_term_string}`.
    pub fn home_url(&self, path: &str) -> String {
        if path.is_empty() {
            return self.home().to_string();
        }
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.home(), path)
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` is an http(s) URL with a host
    /// - `logo`, when set, is an absolute URL
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.warn(Self::FIELDS.name, "site name is empty, og:site_name will be blank");
        }

        const URL_HINT: &str = "use format like https://example.com";
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    let message = format!(
                        "scheme `{}` not supported, must be http or https",
                        parsed.scheme()
                    );
                    diag.error(Self::FIELDS.url, message).hint(URL_HINT);
                }
                if parsed.host_str().is_none() {
                    diag.error(Self::FIELDS.url, "URL must have a host").hint(URL_HINT);
                }
            }
            Err(e) => {
                diag.error(Self::FIELDS.url, format!("invalid URL: {e}")).hint(URL_HINT);
            }
        }

        if let Some(logo) = &self.logo
            && !logo.is_empty()
            && url::Url::parse(logo).is_err()
        {
            diag.error(Self::FIELDS.logo, "logo must be an absolute URL")
                .hint("use format like https://example.com/logo.png");
        }
    }

    /// TOML template written by `init`.
    pub fn template() -> String {
        [
            "[site]",
            "name = \"My Site\"                       # og:site_name and publisher name",
            "description = \"\"                       # tagline, description fallback",
            "url = \"https://example.com\"            # site root",
            "# logo = \"https://example.com/logo.png\"  # Article publisher logo",
            "",
        ]
        .join("\n")
    }
}
