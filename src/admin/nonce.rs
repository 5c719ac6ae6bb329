//! Edit tokens.
//!
//! A token is a keyed BLAKE3 hash over `(tick, action, user)` where a tick is
//! a 12 hour window. Tokens from the current and the previous tick verify,
//! so a token lives between 12 and 24 hours.

use super::UserId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Action the meta box token is bound to.
pub const META_BOX_ACTION: &str = "db_seo_save_meta_box";

/// Form field carrying the meta box token.
pub const META_BOX_FIELD: &str = "db_seo_meta_box_nonce";

const TICK_SECS: u64 = 12 * 60 * 60;

const KEY_CONTEXT: &str = "seomark edit tokens v1";

/// Issues and verifies edit tokens for one secret.
#[derive(Clone)]
pub struct Nonces {
    key: [u8; 32],
}

impl Nonces {
    pub fn new(secret: &str) -> Self {
        Self {
            key: blake3::derive_key(KEY_CONTEXT, secret.as_bytes()),
        }
    }

    /// Token for `action` by `user`, valid from now.
    pub fn create(&self, action: &str, user: UserId) -> String {
        self.create_at(action, user, now_secs())
    }

    /// Check a submitted token.
    pub fn verify(&self, token: &str, action: &str, user: UserId) -> bool {
        self.verify_at(token, action, user, now_secs())
    }

    pub fn create_at(&self, action: &str, user: UserId, now: u64) -> String {
        self.hash(tick(now), action, user).to_hex().to_string()
    }

    pub fn verify_at(&self, token: &str, action: &str, user: UserId, now: u64) -> bool {
        let Ok(submitted) = blake3::Hash::from_hex(token.trim()) else {
            return false;
        };
        let current = tick(now);
        // `Hash` equality is constant time.
        [current, current.saturating_sub(1)]
            .into_iter()
            .any(|t| self.hash(t, action, user) == submitted)
    }

    fn hash(&self, tick: u64, action: &str, user: UserId) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new_keyed(&self.key);
        hasher.update(&tick.to_le_bytes());
        hasher.update(action.as_bytes());
        hasher.update(b"|");
        hasher.update(&user.0.to_le_bytes());
        hasher.finalize()
    }
}

fn tick(now: u64) -> u64 {
    now / TICK_SECS + 1
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
