//! `[store]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [store]
//! path = ".seomark/store.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the options/metadata store file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store file path (relative to the config file directory).
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: ".seomark/store.json".into(),
        }
    }
}

impl StoreConfig {
    /// TOML template written by `init`.
    pub fn template() -> String {
        [
            "[store]",
            "path = \".seomark/store.json\"           # options and document metadata",
            "",
        ]
        .join("\n")
    }
}
