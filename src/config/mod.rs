//! Site configuration management for `seomark.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── admin      # [admin]
//! │   ├── schema     # [schema]
//! │   ├── site       # [site]
//! │   └── store      # [store]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                        |
//! |------------|------------------------------------------------|
//! | `[site]`   | Site metadata (name, description, url, logo)   |
//! | `[store]`  | Where options and document metadata live       |
//! | `[admin]`  | Meta box post types and edit token secret      |
//! | `[schema]` | Extra JSON-LD properties per variant           |

pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

pub use section::{AdminConfig, SchemaConfig, SiteSectionConfig, StoreConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "seomark.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing seomark.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site information
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Store location
    #[serde(default)]
    pub store: StoreConfig,

    /// Edit-screen settings
    #[serde(default)]
    pub admin: AdminConfig,

    /// Extra JSON-LD properties
    #[serde(default)]
    pub schema: SchemaConfig,
}

impl SiteConfig {
    /// Load and validate configuration from a file path.
    ///
    /// The project root is the config file's parent directory.
    pub fn load(config_path: &Path) -> Result<Self> {
        let mut config = Self::from_path(config_path)?;
        config.config_path = config_path.to_path_buf();
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Absolute store file path.
    pub fn store_path(&self) -> PathBuf {
        self.root.join(&self.store.path)
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.admin.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Generate seomark.toml content with comments.
    pub fn template(secret: &str) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "# seomark configuration file (v{})\n\n",
            env!("CARGO_PKG_VERSION")
        ));
        out.push_str(&SiteSectionConfig::template());
        out.push('\n');
        out.push_str(&StoreConfig::template());
        out.push('\n');
        out.push_str(&AdminConfig::template(secret));
        out.push('\n');
        out.push_str("# [schema.article]                    # merged into Article JSON-LD\n");
        out.push_str("# [schema.home]                       # merged into WebSite JSON-LD\n");

        out
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` and `[admin]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site]\nname = \"Test Site\"\ndescription = \"Just testing\"\nurl = \"https://example.com\"\n\
         [admin]\nsecret = \"test-secret\"\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\nname = \"My Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.site.name, "");
        assert_eq!(config.store.path, PathBuf::from(".seomark/store.json"));
        assert_eq!(config.admin.post_types, ["post", "page"]);
        assert!(config.schema.article.is_empty());
    }

    #[test]
    fn test_parse_schema_extras() {
        let config = test_parse_config("[schema.article]\ninLanguage = \"en\"\n");
        assert_eq!(
            config.schema.article.get("inLanguage").and_then(|v| v.as_str()),
            Some("en")
        );
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nname = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.name, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = SiteConfig::from_str("[site]\nurl = \"nope\"\n").unwrap();
        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_template_parses_and_validates() {
        let template = SiteConfig::template("abc123");
        let (config, ignored) = SiteConfig::parse_with_ignored(&template).unwrap();
        assert!(ignored.is_empty());
        assert_eq!(config.admin.secret, "abc123");
        config.validate().unwrap();
    }

    #[test]
    fn test_load_sets_root() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, SiteConfig::template("k")).unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.root, temp.path());
        assert_eq!(config.store_path(), temp.path().join(".seomark/store.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = SiteConfig::load(&temp.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }
}
