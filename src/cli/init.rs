//! `seomark init`: write the config template and activate the store.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use super::common::Session;
use crate::admin::activate;
use crate::config::SiteConfig;
use crate::log;

/// Fresh edit token secret: a hash over the current time and process id.
fn generate_secret() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let mut hasher = blake3::Hasher::new();
    hasher.update(&nanos.to_le_bytes());
    hasher.update(&std::process::id().to_le_bytes());
    hasher.finalize().to_hex().to_string()
}

fn config_target(config: &Path) -> Result<PathBuf> {
    if config.is_absolute() {
        return Ok(config.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(cwd.join(config))
}

pub fn init(config: &Path, force: bool, dry_run: bool) -> Result<()> {
    let template = SiteConfig::template(&generate_secret());
    if dry_run {
        print!("{template}");
        return Ok(());
    }

    let path = config_target(config)?;
    write_config(&path, &template, force)?;

    let mut session = Session::open(SiteConfig::load(&path)?)?;
    let added = activate(&mut session.store);
    session.persist()?;

    log!("init"; "wrote {}, {} feature toggles enabled", path.display(), added);
    Ok(())
}

fn write_config(path: &Path, template: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "`{}` already exists, pass --force to overwrite",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    fs::write(path, template)
        .with_context(|| format!("failed to write config file '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Options, keys};
    use tempfile::TempDir;

    #[test]
    fn test_secret_is_hex() {
        let secret = generate_secret();
        assert_eq!(secret.len(), 64);
        assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_init_writes_config_and_activates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("seomark.toml");

        init(&path, false, false).unwrap();

        let session = Session::open(SiteConfig::load(&path).unwrap()).unwrap();
        assert_eq!(session.store.get_option(keys::OG_ENABLED), Some("1"));
        assert_eq!(session.store.get_option(keys::TWITTER_ENABLED), Some("1"));
        assert_eq!(session.store.get_option(keys::SCHEMA_ENABLED), Some("1"));
        assert!(temp.path().join(".seomark/store.json").exists());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("seomark.toml");
        fs::write(&path, "# mine").unwrap();

        assert!(init(&path, false, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        init(&path, true, false).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "# mine");
    }
}
