//! Meta box save handler.
//!
//! Rejections are not errors: the document id comes back either way and the
//! outcome says what happened.

use super::caps::{Capabilities, Capability, UserId};
use super::nonce::{META_BOX_ACTION, Nonces};
use super::sanitize::{sanitize_text_field, sanitize_textarea_field};
use crate::store::{DocId, PostMetaMut, keys};
use crate::utils::html::esc_url_raw;

/// Submitted meta box fields. `None` means the field was not in the form.
#[derive(Debug, Clone, Default)]
pub struct MetaBoxForm {
    pub nonce: Option<String>,
    pub post_type: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub og_type: Option<String>,
}

/// One save event for one document.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub doc: DocId,
    pub user: UserId,
    /// Periodic background save rather than an explicit one.
    pub autosave: bool,
    pub form: MetaBoxForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Number of fields written.
    Saved(usize),
    MissingToken,
    InvalidToken,
    Autosave,
    Forbidden(Capability),
}

/// Verify and persist a meta box submission.
///
/// Checks run in order: token present, token valid, not an autosave, user
/// may edit the document. Each field present in the form is then sanitized
/// and written.
pub fn save_meta_box(
    store: &mut dyn PostMetaMut,
    request: &SaveRequest,
    nonces: &Nonces,
    caps: &dyn Capabilities,
) -> (DocId, SaveOutcome) {
    let outcome = check(request, nonces, caps).unwrap_or_else(|| write_fields(store, request));
    crate::debug!("save"; "document {}: {:?}", request.doc, outcome);
    (request.doc, outcome)
}

/// First failed check, if any.
fn check(request: &SaveRequest, nonces: &Nonces, caps: &dyn Capabilities) -> Option<SaveOutcome> {
    let Some(token) = request.form.nonce.as_deref() else {
        return Some(SaveOutcome::MissingToken);
    };
    if !nonces.verify(token, META_BOX_ACTION, request.user) {
        return Some(SaveOutcome::InvalidToken);
    }
    if request.autosave {
        return Some(SaveOutcome::Autosave);
    }
    let capability = Capability::edit_for(&request.form.post_type);
    if !caps.user_can(request.user, capability, Some(request.doc)) {
        return Some(SaveOutcome::Forbidden(capability));
    }
    None
}

fn write_fields(store: &mut dyn PostMetaMut, request: &SaveRequest) -> SaveOutcome {
    let form = &request.form;
    let fields: [(&str, &Option<String>, fn(&str) -> String); 4] = [
        (keys::META_TITLE, &form.title, sanitize_text_field),
        (keys::META_DESCRIPTION, &form.description, sanitize_textarea_field),
        (keys::META_IMAGE, &form.image, esc_url_raw),
        (keys::META_OG_TYPE, &form.og_type, sanitize_text_field),
    ];

    let mut written = 0;
    for (key, raw, sanitize) in fields {
        if let Some(raw) = raw {
            store.update_meta(request.doc, key, &sanitize(raw));
            written += 1;
        }
    }
    SaveOutcome::Saved(written)
}
