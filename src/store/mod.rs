//! Settings store: global options and per-document metadata.
//!
//! The store is the host side of the system. Resolvers only see the read
//! traits ([`Options`], [`PostMeta`]); the admin surface and lifecycle hooks
//! get the `*Mut` variants.
//!
//! | Module   | Purpose                                        |
//! |----------|------------------------------------------------|
//! | `keys`   | Option and metadata key names                  |
//! | `memory` | `MemoryStore`, the in-process implementation   |
//! | `file`   | JSON persistence for `MemoryStore`             |
//! | `model`  | Typed views: `Settings`, `DocumentMeta`        |

mod file;
pub mod keys;
mod memory;
mod model;

pub use file::{StoreError, restore_store, persist_store};
pub use memory::MemoryStore;
pub use model::{DocumentMeta, OgType, Settings};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(pub u64);

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read access to global options.
pub trait Options {
    /// Raw option value, `None` when the option was never stored.
    fn get_option(&self, key: &str) -> Option<&str>;

    /// Option value with a fallback for missing keys.
    fn get_option_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_option(key).unwrap_or(default)
    }
}

/// Write access to global options.
pub trait OptionsMut: Options {
    /// Store `value` only if `key` is absent. Returns whether it was added.
    fn add_option(&mut self, key: &str, value: &str) -> bool;

    /// Insert or replace an option.
    fn update_option(&mut self, key: &str, value: &str);

    /// Remove an option. Returns whether it existed.
    fn delete_option(&mut self, key: &str) -> bool;
}

/// Read access to per-document metadata.
pub trait PostMeta {
    fn get_meta(&self, doc: DocId, key: &str) -> Option<&str>;
}

/// Write access to per-document metadata.
pub trait PostMetaMut: PostMeta {
    /// Insert or replace a metadata value.
    fn update_meta(&mut self, doc: DocId, key: &str, value: &str);

    /// Delete every metadata entry (any document) whose key starts with
    /// `prefix`. Returns the number of removed entries.
    fn delete_meta_by_prefix(&mut self, prefix: &str) -> usize;
}
