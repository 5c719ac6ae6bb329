//! Errors raised while loading `seomark.toml`.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    // Display only; a source would print every problem twice.
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One rejected config value.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    /// Attach a suggested fix.
    pub fn hint(&mut self, hint: impl Into<String>) -> &mut Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {} {}", self.field.as_str().cyan().bold(), self.message)?;
        match &self.hint {
            Some(hint) => write!(f, "\n    {} {}", "fix:".green(), hint.dimmed()),
            None => Ok(()),
        }
    }
}

/// Every problem found by one validation pass.
///
/// Sections push into it and loading fails once at the end, so a user sees
/// all bad fields at once.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    problems: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejected value. Chain `.hint(..)` to suggest a fix.
    pub fn error(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
    ) -> &mut ConfigDiagnostic {
        self.problems.push(ConfigDiagnostic {
            field,
            message: message.into(),
            hint: None,
        });
        let last = self.problems.len() - 1;
        &mut self.problems[last]
    }

    /// Report a questionable but accepted value right away.
    pub fn warn(&self, field: FieldPath, message: impl fmt::Display) {
        crate::log!("config"; "{}: {}", field.as_str(), message);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    #[cfg(test)]
    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.problems
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.problems.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.problems.len();
        let noun = if count == 1 { "problem" } else { "problems" };
        write!(f, "{}", format!("invalid config, {count} {noun}:").red().bold())?;
        for problem in &self.problems {
            write!(f, "\n{problem}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_names_file() {
        let err = ConfigError::Io(
            PathBuf::from("seomark.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert!(err.to_string().contains("`seomark.toml`"));
    }

    #[test]
    fn test_collects_every_problem() {
        let mut diag = ConfigDiagnostics::new();
        assert!(diag.is_empty());
        diag.error(FieldPath::new("site.url"), "missing");
        diag.error(FieldPath::new("admin.secret"), "empty").hint("set one");
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].hint, None);
        assert_eq!(diag.errors()[1].hint.as_deref(), Some("set one"));

        let shown = diag.into_result().unwrap_err().to_string();
        assert!(shown.contains("2 problems"));
        assert!(shown.contains("site.url"));
        assert!(shown.contains("admin.secret"));
        assert!(shown.contains("set one"));
    }

    #[test]
    fn test_empty_is_ok() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }
}
