//! Permission checks for admin actions.

use crate::store::DocId;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the acting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    EditPost,
    EditPage,
    ManageOptions,
}

impl Capability {
    pub const ALL: [Capability; 3] = [Self::EditPost, Self::EditPage, Self::ManageOptions];

    /// Capability needed to edit a document of `post_type`.
    pub fn edit_for(post_type: &str) -> Self {
        if post_type == "page" {
            Self::EditPage
        } else {
            Self::EditPost
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EditPost => "edit_post",
            Self::EditPage => "edit_page",
            Self::ManageOptions => "manage_options",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answers "may this user do that", optionally to one document.
pub trait Capabilities {
    fn user_can(&self, user: UserId, capability: Capability, doc: Option<DocId>) -> bool;
}

/// Static per-user capability table.
#[derive(Debug, Clone, Default)]
pub struct Grants {
    by_user: FxHashMap<UserId, FxHashSet<Capability>>,
}

impl Grants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every capability for each of `users`.
    pub fn editors(users: impl IntoIterator<Item = u64>) -> Self {
        let mut grants = Self::new();
        for user in users {
            for capability in Capability::ALL {
                grants.grant(UserId(user), capability);
            }
        }
        grants
    }

    pub fn grant(&mut self, user: UserId, capability: Capability) -> &mut Self {
        self.by_user.entry(user).or_default().insert(capability);
        self
    }
}

impl Capabilities for Grants {
    fn user_can(&self, user: UserId, capability: Capability, _doc: Option<DocId>) -> bool {
        self.by_user
            .get(&user)
            .is_some_and(|caps| caps.contains(&capability))
    }
}
