//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/site/templates/posts/  ← start
/// /home/user/site/seomark.toml      ← found!
/// ```
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Find config file by searching upward from the current directory.
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_parent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("seomark.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("seomark.toml")).unwrap();
        assert_eq!(found, temp.path().join("seomark.toml"));
    }

    #[test]
    fn test_find_absolute() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        assert_eq!(find_config_file_from(temp.path(), &path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(temp.path(), &path), Some(path));
    }
}
