//! Page context: what the host knows about the page being rendered.
//!
//! A page context file is TOML:
//!
//! ```toml
//! singular = true
//! front-page = false
//! document-title = "Hello World – My Site"
//!
//! [document]
//! id = 42
//! post-type = "post"
//! title = "Hello World"
//! permalink = "https://example.com/hello-world/"
//! excerpt = "First post."
//! thumbnail = "http://example.com/uploads/hello.png"
//! published = "2024-06-15 14:30:45"
//! modified = "2024-06-16T09:00:00+02:00"
//! author = "Alice"
//! ```

mod document;

pub use document::Document;

use crate::store::DocId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Page context loading errors
#[derive(Debug, Error)]
pub enum PageError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("page context parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("singular page context has no [document]")]
    MissingDocument,
}

/// Render context supplied by the host for one page request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageContext {
    /// Exactly one document is being shown.
    pub singular: bool,

    /// This is the site's front page.
    pub front_page: bool,

    /// Browser document title (`<title>` text).
    pub document_title: String,

    /// The current document, if the page has one.
    pub document: Option<Document>,
}

#[cfg(test)]
impl PageContext {
    /// Context for a single document page.
    pub fn singular(document: Document) -> Self {
        Self {
            singular: true,
            front_page: false,
            document_title: document.title.clone(),
            document: Some(document),
        }
    }

    /// Context for a front page that is not itself a document.
    pub fn front_page(document_title: impl Into<String>) -> Self {
        Self {
            singular: false,
            front_page: true,
            document_title: document_title.into(),
            document: None,
        }
    }
}

impl PageContext {
    /// Parse a page context from TOML.
    pub fn from_str(content: &str) -> Result<Self, PageError> {
        let page: Self = toml::from_str(content)?;
        page.validate()?;
        Ok(page)
    }

    /// Load a page context file.
    pub fn load(path: &Path) -> Result<Self, PageError> {
        let content =
            fs::read_to_string(path).map_err(|err| PageError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    fn validate(&self) -> Result<(), PageError> {
        if self.singular && self.document.is_none() {
            return Err(PageError::MissingDocument);
        }
        Ok(())
    }

    /// Whether any resolver has something to say about this page.
    pub fn is_renderable(&self) -> bool {
        self.singular || self.front_page
    }

    /// Identifier of the current document.
    pub fn doc_id(&self) -> Option<DocId> {
        self.document.as_ref().map(|d| d.id)
    }
}
