//! Storage keys.
//!
//! Option and metadata key names are part of the stored data format: stores
//! written by earlier installs must keep resolving.

/// `"1"` enables Open Graph tags.
pub const OG_ENABLED: &str = "db_seo_og_enabled";
/// `"1"` enables Twitter Card tags.
pub const TWITTER_ENABLED: &str = "db_seo_twitter_enabled";
/// `"1"` enables Schema.org JSON-LD.
pub const SCHEMA_ENABLED: &str = "db_seo_schema_enabled";
/// Site-wide fallback image URL.
pub const DEFAULT_IMAGE: &str = "db_seo_default_image";
/// Site Twitter handle.
pub const TWITTER_HANDLE: &str = "db_seo_twitter_handle";
/// Default Open Graph type.
pub const DEFAULT_OG_TYPE: &str = "db_seo_og_type";
/// Site-wide fallback description.
pub const DEFAULT_DESCRIPTION: &str = "db_seo_default_meta_description";

/// Every option this crate owns.
pub const ALL_OPTIONS: [&str; 7] = [
    OG_ENABLED,
    TWITTER_ENABLED,
    SCHEMA_ENABLED,
    DEFAULT_IMAGE,
    TWITTER_HANDLE,
    DEFAULT_OG_TYPE,
    DEFAULT_DESCRIPTION,
];

/// Prefix shared by every per-document metadata key.
pub const META_PREFIX: &str = "_db_seo_";

pub const META_TITLE: &str = "_db_seo_custom_meta_title";
pub const META_DESCRIPTION: &str = "_db_seo_custom_meta_description";
pub const META_IMAGE: &str = "_db_seo_custom_image";
pub const META_OG_TYPE: &str = "_db_seo_og_type";
