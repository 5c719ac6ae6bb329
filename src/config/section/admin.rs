//! `[admin]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [admin]
//! post_types = ["post", "page"]
//! editors = [1]
//! secret = "change-me"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Settings for the edit-screen surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Post types that get the SEO meta box.
    pub post_types: Vec<String>,

    /// User ids allowed to edit SEO data and settings.
    pub editors: Vec<u64>,

    /// Key material for edit tokens.
    pub secret: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            post_types: vec!["post".into(), "page".into()],
            editors: vec![1],
            secret: String::new(),
        }
    }
}

/// Field paths for diagnostics.
pub struct AdminFields {
    pub post_types: FieldPath,
    pub editors: FieldPath,
    pub secret: FieldPath,
}

impl AdminConfig {
    pub const FIELDS: AdminFields = AdminFields {
        post_types: FieldPath::new("admin.post_types"),
        editors: FieldPath::new("admin.editors"),
        secret: FieldPath::new("admin.secret"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.post_types.iter().all(|t| t.trim().is_empty()) {
            diag.error(Self::FIELDS.post_types, "no post types configured for the meta box")
                .hint("e.g.: post_types = [\"post\", \"page\"]");
        }
        if self.editors.is_empty() {
            diag.error(
                Self::FIELDS.editors,
                "no editors configured, every meta box save would be rejected",
            );
        }
        if self.secret.trim().is_empty() {
            diag.error(Self::FIELDS.secret, "edit token secret is empty")
                .hint("set a long random string, e.g. the output of `openssl rand -hex 32`");
        }
    }

    /// TOML template written by `init`, with a freshly supplied secret.
    pub fn template(secret: &str) -> String {
        [
            "[admin]".to_string(),
            "post_types = [\"post\", \"page\"]        # edit screens with the SEO meta box".into(),
            "editors = [1]                           # user ids allowed to save SEO data".into(),
            format!("secret = \"{secret}\""),
            String::new(),
        ]
        .join("\n")
    }
}
