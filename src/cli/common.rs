//! Common utilities shared across CLI commands.

use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};

use crate::admin::{Grants, Nonces};
use crate::config::{SiteConfig, find_config_file};
use crate::page::PageContext;
use crate::seo::{Filters, Markup, RenderContext, Renderer};
use crate::store::{DocumentMeta, MemoryStore, Settings, persist_store, restore_store};

/// Locate and load the config file named on the command line.
pub fn load_config(config: &Path) -> Result<SiteConfig> {
    let path = find_config_file(config).ok_or_else(|| {
        anyhow!(
            "config file `{}` not found, run `seomark init` first",
            config.display()
        )
    })?;
    SiteConfig::load(&path)
}

/// Load a page context file.
pub fn load_page(path: &Path) -> Result<PageContext> {
    PageContext::load(path).with_context(|| format!("failed to load page `{}`", path.display()))
}

/// Loaded config plus the store it points at.
pub struct Session {
    pub config: SiteConfig,
    pub store: MemoryStore,
    pub filters: Filters,
    store_path: PathBuf,
}

impl Session {
    pub fn open(config: SiteConfig) -> Result<Self> {
        let store_path = config.store_path();
        let store = restore_store(&store_path)
            .with_context(|| format!("failed to open store `{}`", store_path.display()))?;
        let filters = Filters::from_config(&config);
        Ok(Self {
            config,
            store,
            filters,
            store_path,
        })
    }

    /// Write the store back to disk.
    pub fn persist(&self) -> Result<()> {
        persist_store(&self.store, &self.store_path)
            .with_context(|| format!("failed to save store `{}`", self.store_path.display()))
    }

    /// Markup for both render points of `page`.
    pub fn markup(&self, page: &PageContext) -> Markup {
        let settings = Settings::read(&self.store);
        let meta = DocumentMeta::read(&self.store, page.doc_id());
        let ctx = RenderContext {
            site: &self.config.site,
            settings: &settings,
            meta: &meta,
            page,
            filters: &self.filters,
        };
        Renderer::standard().render_all(&ctx)
    }

    pub fn nonces(&self) -> Nonces {
        Nonces::new(&self.config.admin.secret)
    }

    pub fn grants(&self) -> Grants {
        Grants::editors(self.config.admin.editors.iter().copied())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// A temp project with a valid config file.
    pub fn project(extra: &str) -> (TempDir, SiteConfig) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(crate::config::CONFIG_FILE);
        let content = format!(
            "[site]\nname = \"Test Site\"\ndescription = \"Just testing\"\nurl = \"https://example.com\"\n\
             [admin]\nsecret = \"test-secret\"\n{extra}"
        );
        fs::write(&path, content).unwrap();
        let config = SiteConfig::load(&path).unwrap();
        (temp, config)
    }

    pub fn write_page(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("page.toml");
        fs::write(&path, content).unwrap();
        path
    }

    pub const SINGULAR_PAGE: &str = r#"
singular = true

[document]
id = 42
title = "Hello World"
permalink = "https://example.com/hello-world/"
excerpt = "First post."
author = "Alice"
published = "2024-06-15 14:30:45"
"#;
}
