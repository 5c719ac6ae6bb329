//! The current content document as the host describes it.

use crate::store::DocId;
use crate::utils::date::Timestamp;
use serde::{Deserialize, Serialize};

/// A single post or page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Document {
    pub id: DocId,

    /// Content type (`post`, `page`, ...).
    #[serde(default = "default_post_type")]
    pub post_type: String,

    #[serde(default)]
    pub title: String,

    /// Canonical URL.
    #[serde(default)]
    pub permalink: String,

    #[serde(default)]
    pub excerpt: String,

    /// Featured image URL.
    #[serde(default)]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub published: Option<Timestamp>,

    #[serde(default)]
    pub modified: Option<Timestamp>,

    /// Author display name.
    #[serde(default)]
    pub author: String,
}

fn default_post_type() -> String {
    "post".into()
}

#[cfg(test)]
impl Document {
    /// Minimal document for test fixtures.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: DocId(id),
            post_type: default_post_type(),
            title: title.into(),
            permalink: String::new(),
            excerpt: String::new(),
            thumbnail: None,
            published: None,
            modified: None,
            author: String::new(),
        }
    }

    pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = permalink.into();
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_dates(mut self, published: Timestamp, modified: Timestamp) -> Self {
        self.published = Some(published);
        self.modified = Some(modified);
        self
    }
}

impl Document {
    /// Featured image URL, if one is set and non-empty.
    pub fn featured_image(&self) -> Option<&str> {
        self.thumbnail.as_deref().filter(|t| !t.is_empty())
    }
}
