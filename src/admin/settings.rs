//! Registered settings and their sanitize callbacks.

use super::SETTINGS_ACTION;
use super::caps::{Capabilities, Capability, UserId};
use super::nonce::Nonces;
use super::sanitize::{sanitize_text_field, sanitize_textarea_field};
use crate::store::{OptionsMut, keys};
use crate::utils::html::esc_url_raw;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingError {
    #[error("`{0}` is not a registered setting")]
    UnknownKey(String),

    #[error("no settings token submitted")]
    MissingToken,

    #[error("settings token is invalid or expired")]
    InvalidToken,

    #[error("user {0} lacks the `{1}` capability")]
    Forbidden(UserId, Capability),
}

/// How a submitted setting value is cleaned before storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sanitizer {
    Text,
    Textarea,
    Url,
}

impl Sanitizer {
    pub fn apply(self, raw: &str) -> String {
        match self {
            Self::Text => sanitize_text_field(raw),
            Self::Textarea => sanitize_textarea_field(raw),
            Self::Url => esc_url_raw(raw),
        }
    }
}

/// The seven registered settings in form order.
pub const REGISTERED: [(&str, Sanitizer); 7] = [
    (keys::OG_ENABLED, Sanitizer::Text),
    (keys::TWITTER_ENABLED, Sanitizer::Text),
    (keys::SCHEMA_ENABLED, Sanitizer::Text),
    (keys::DEFAULT_DESCRIPTION, Sanitizer::Textarea),
    (keys::DEFAULT_IMAGE, Sanitizer::Url),
    (keys::TWITTER_HANDLE, Sanitizer::Text),
    (keys::DEFAULT_OG_TYPE, Sanitizer::Text),
];

pub fn sanitizer_for(key: &str) -> Option<Sanitizer> {
    REGISTERED
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, sanitizer)| *sanitizer)
}

/// Sanitize and store one setting. Returns the stored value.
pub fn update_setting(
    store: &mut dyn OptionsMut,
    key: &str,
    raw: &str,
) -> Result<String, SettingError> {
    let sanitizer = sanitizer_for(key).ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;
    let value = sanitizer.apply(raw);
    store.update_option(key, &value);
    crate::debug!("settings"; "{} = {:?}", key, value);
    Ok(value)
}

/// Acting user and the token posted with the settings page.
#[derive(Debug, Clone, Copy)]
pub struct Submitter<'a> {
    pub user: UserId,
    pub token: Option<&'a str>,
}

/// Store one setting submitted through the settings page.
///
/// The token must be present and bound to the settings action for this user,
/// and the user must hold `manage_options`. Nothing is written otherwise.
pub fn save_setting(
    store: &mut dyn OptionsMut,
    submitter: Submitter<'_>,
    key: &str,
    raw: &str,
    nonces: &Nonces,
    caps: &dyn Capabilities,
) -> Result<String, SettingError> {
    let token = submitter.token.ok_or(SettingError::MissingToken)?;
    if !nonces.verify(token, SETTINGS_ACTION, submitter.user) {
        return Err(SettingError::InvalidToken);
    }
    if !caps.user_can(submitter.user, Capability::ManageOptions, None) {
        return Err(SettingError::Forbidden(submitter.user, Capability::ManageOptions));
    }
    update_setting(store, key, raw)
}
