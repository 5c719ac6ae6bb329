//! In-process store.

use super::{DocId, Options, OptionsMut, PostMeta, PostMetaMut};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options and document metadata held in ordered maps.
///
/// Ordered so the persisted JSON is stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    options: BTreeMap<String, String>,
    #[serde(default)]
    post_meta: BTreeMap<DocId, BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper to seed an option.
    pub fn with_option(mut self, key: &str, value: &str) -> Self {
        self.update_option(key, value);
        self
    }

    /// Builder-style helper to seed a metadata value.
    pub fn with_meta(mut self, doc: DocId, key: &str, value: &str) -> Self {
        self.update_meta(doc, key, value);
        self
    }

    /// All stored options in key order.
    pub fn options(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All metadata of one document in key order.
    pub fn meta_of(&self, doc: DocId) -> impl Iterator<Item = (&str, &str)> {
        self.post_meta
            .get(&doc)
            .into_iter()
            .flatten()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of metadata entries across all documents.
    pub fn meta_count(&self) -> usize {
        self.post_meta.values().map(BTreeMap::len).sum()
    }
}

impl Options for MemoryStore {
    fn get_option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }
}

impl OptionsMut for MemoryStore {
    fn add_option(&mut self, key: &str, value: &str) -> bool {
        if self.options.contains_key(key) {
            return false;
        }
        self.options.insert(key.to_string(), value.to_string());
        true
    }

    fn update_option(&mut self, key: &str, value: &str) {
        self.options.insert(key.to_string(), value.to_string());
    }

    fn delete_option(&mut self, key: &str) -> bool {
        self.options.remove(key).is_some()
    }
}

impl PostMeta for MemoryStore {
    fn get_meta(&self, doc: DocId, key: &str) -> Option<&str> {
        self.post_meta.get(&doc)?.get(key).map(String::as_str)
    }
}

impl PostMetaMut for MemoryStore {
    fn update_meta(&mut self, doc: DocId, key: &str, value: &str) {
        self.post_meta
            .entry(doc)
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    fn delete_meta_by_prefix(&mut self, prefix: &str) -> usize {
        let mut removed = 0;
        for meta in self.post_meta.values_mut() {
            let before = meta.len();
            meta.retain(|key, _| !key.starts_with(prefix));
            removed += before - meta.len();
        }
        self.post_meta.retain(|_, meta| !meta.is_empty());
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: DocId = DocId(7);

    #[test]
    fn test_add_option_keeps_existing() {
        let mut store = MemoryStore::new();
        assert!(store.add_option("a", "1"));
        assert!(!store.add_option("a", "2"));
        assert_eq!(store.get_option("a"), Some("1"));
    }

    #[test]
    fn test_get_option_or() {
        let store = MemoryStore::new().with_option("a", "");
        assert_eq!(store.get_option_or("a", "x"), "");
        assert_eq!(store.get_option_or("b", "x"), "x");
    }

    #[test]
    fn test_delete_option() {
        let mut store = MemoryStore::new().with_option("a", "1");
        assert!(store.delete_option("a"));
        assert!(!store.delete_option("a"));
        assert_eq!(store.get_option("a"), None);
    }

    #[test]
    fn test_meta_is_per_document() {
        let store = MemoryStore::new().with_meta(DOC, "_k", "v");
        assert_eq!(store.get_meta(DOC, "_k"), Some("v"));
        assert_eq!(store.get_meta(DocId(8), "_k"), None);
    }

    #[test]
    fn test_delete_meta_by_prefix() {
        let mut store = MemoryStore::new()
            .with_meta(DOC, "_db_seo_a", "1")
            .with_meta(DOC, "_other", "2")
            .with_meta(DocId(8), "_db_seo_b", "3");

        assert_eq!(store.delete_meta_by_prefix("_db_seo_"), 2);
        assert_eq!(store.meta_count(), 1);
        assert_eq!(store.get_meta(DOC, "_other"), Some("2"));
        assert_eq!(store.meta_of(DocId(8)).count(), 0);
    }
}
