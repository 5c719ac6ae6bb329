//! Typed views over the raw store.
//!
//! Empty strings and missing keys are the same thing here: both read as
//! `None`.

use super::{DocId, Options, PostMeta, keys};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Open Graph object type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    #[default]
    Website,
    Article,
    Profile,
    Video,
    Book,
}

impl OgType {
    pub const ALL: [OgType; 5] = [
        OgType::Website,
        OgType::Article,
        OgType::Profile,
        OgType::Video,
        OgType::Book,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
            Self::Profile => "profile",
            Self::Video => "video",
            Self::Book => "book",
        }
    }

    /// Human label for select boxes.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Article => "Article",
            Self::Profile => "Profile",
            Self::Video => "Video",
            Self::Book => "Book",
        }
    }
}

impl fmt::Display for OgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OgType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| format!("unknown Open Graph type `{s}`"))
    }
}

/// `Some(value)` unless the value is missing or empty.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

// ============================================================================
// Global configuration
// ============================================================================

/// Global configuration, read once per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub og_enabled: bool,
    pub twitter_enabled: bool,
    pub schema_enabled: bool,
    pub default_image: Option<String>,
    pub twitter_handle: Option<String>,
    pub default_og_type: OgType,
    pub default_description: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            og_enabled: true,
            twitter_enabled: true,
            schema_enabled: true,
            default_image: None,
            twitter_handle: None,
            default_og_type: OgType::Website,
            default_description: None,
        }
    }
}

impl Settings {
    /// Read settings from an option provider.
    ///
    /// Toggles are on unless stored as something other than `"1"`.
    pub fn read(options: &dyn Options) -> Self {
        let toggle = |key: &str| options.get_option_or(key, "1") == "1";

        Self {
            og_enabled: toggle(keys::OG_ENABLED),
            twitter_enabled: toggle(keys::TWITTER_ENABLED),
            schema_enabled: toggle(keys::SCHEMA_ENABLED),
            default_image: non_empty(options.get_option(keys::DEFAULT_IMAGE)),
            twitter_handle: non_empty(options.get_option(keys::TWITTER_HANDLE)),
            default_og_type: options
                .get_option(keys::DEFAULT_OG_TYPE)
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            default_description: non_empty(options.get_option(keys::DEFAULT_DESCRIPTION)),
        }
    }
}

// ============================================================================
// Document metadata
// ============================================================================

/// Per-document overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMeta {
    pub custom_title: Option<String>,
    pub custom_description: Option<String>,
    pub custom_image: Option<String>,
    pub og_type: Option<OgType>,
}

impl DocumentMeta {
    /// Read a document's overrides. No document means no overrides.
    pub fn read(meta: &dyn PostMeta, doc: Option<DocId>) -> Self {
        let Some(doc) = doc else {
            return Self::default();
        };

        let og_type = meta.get_meta(doc, keys::META_OG_TYPE).filter(|v| !v.is_empty());
        let og_type = og_type.and_then(|raw| match raw.parse::<OgType>() {
            Ok(t) => Some(t),
            Err(e) => {
                crate::debug!("meta"; "document {}: {}, ignoring", doc, e);
                None
            }
        });

        Self {
            custom_title: non_empty(meta.get_meta(doc, keys::META_TITLE)),
            custom_description: non_empty(meta.get_meta(doc, keys::META_DESCRIPTION)),
            custom_image: non_empty(meta.get_meta(doc, keys::META_IMAGE)),
            og_type,
        }
    }
}
