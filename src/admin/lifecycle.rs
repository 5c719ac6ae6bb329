//! Activation and uninstall hooks.

use crate::store::{OptionsMut, PostMetaMut, keys};

/// Feature toggles seeded on activation.
const TOGGLES: [&str; 3] = [keys::OG_ENABLED, keys::TWITTER_ENABLED, keys::SCHEMA_ENABLED];

/// Turn all three features on unless a value is already stored.
///
/// Returns how many toggles were added.
pub fn activate(store: &mut dyn OptionsMut) -> usize {
    let added = TOGGLES
        .into_iter()
        .filter(|key| store.add_option(key, "1"))
        .count();
    crate::debug!("store"; "activation added {} toggles", added);
    added
}

/// What [`uninstall`] removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Removed {
    pub options: usize,
    pub meta: usize,
}

/// Delete every option and every `_db_seo_` metadata entry.
pub fn uninstall<S: OptionsMut + PostMetaMut + ?Sized>(store: &mut S) -> Removed {
    let options = keys::ALL_OPTIONS
        .into_iter()
        .filter(|key| store.delete_option(key))
        .count();
    let meta = store.delete_meta_by_prefix(keys::META_PREFIX);
    Removed { options, meta }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DocId, MemoryStore, Options, PostMeta};

    #[test]
    fn test_activate_seeds_missing_toggles() {
        let mut store = MemoryStore::new().with_option(keys::TWITTER_ENABLED, "0");
        assert_eq!(activate(&mut store), 2);
        assert_eq!(store.get_option(keys::OG_ENABLED), Some("1"));
        assert_eq!(store.get_option(keys::TWITTER_ENABLED), Some("0"));
        assert_eq!(store.get_option(keys::SCHEMA_ENABLED), Some("1"));
        assert_eq!(store.get_option(keys::DEFAULT_IMAGE), None);
    }

    #[test]
    fn test_activate_twice_is_noop() {
        let mut store = MemoryStore::new();
        activate(&mut store);
        let before = store.clone();
        assert_eq!(activate(&mut store), 0);
        assert_eq!(store, before);
    }

    #[test]
    fn test_uninstall_leaves_nothing() {
        let mut store = keys::ALL_OPTIONS
            .into_iter()
            .fold(MemoryStore::new(), |store, key| store.with_option(key, "x"))
            .with_option("blogname", "Keep me")
            .with_meta(DocId(1), keys::META_TITLE, "t")
            .with_meta(DocId(1), keys::META_OG_TYPE, "book")
            .with_meta(DocId(2), keys::META_IMAGE, "https://x.com/a.png")
            .with_meta(DocId(2), "_edit_lock", "123");

        let removed = uninstall(&mut store);
        assert_eq!(removed, Removed { options: 7, meta: 3 });

        for key in keys::ALL_OPTIONS {
            assert_eq!(store.get_option(key), None);
        }
        assert_eq!(store.get_option("blogname"), Some("Keep me"));
        assert!(store.meta_of(DocId(1)).next().is_none());
        assert_eq!(store.get_meta(DocId(2), "_edit_lock"), Some("123"));
        assert_eq!(store.meta_count(), 1);
    }
}
