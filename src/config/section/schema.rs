//! `[schema]` section configuration.
//!
//! Static additions merged into the JSON-LD objects through the schema
//! filters.
//!
//! # Example
//!
//! ```toml
//! [schema.article]
//! inLanguage = "en"
//!
//! [schema.home]
//! sameAs = ["https://github.com/alice"]
//! ```

use serde::{Deserialize, Serialize};

/// Extra JSON-LD properties per variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Merged into every Article object.
    pub article: toml::Table,

    /// Merged into the WebSite object.
    pub home: toml::Table,
}
