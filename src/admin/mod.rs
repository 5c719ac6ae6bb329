//! Admin surface: the edit screens and the hooks that change stored data.
//!
//! | Module      | Purpose                                           |
//! |-------------|---------------------------------------------------|
//! | `caps`      | Users and capability checks                       |
//! | `forms`     | Settings page and meta box HTML                   |
//! | `lifecycle` | Activation and uninstall                          |
//! | `nonce`     | Edit tokens                                       |
//! | `sanitize`  | Text sanitizers for submitted values              |
//! | `save`      | Meta box save handler                             |
//! | `settings`  | Registered settings and the guarded settings save |

mod caps;
mod forms;
mod lifecycle;
mod nonce;
pub mod sanitize;
mod save;
mod settings;

pub use caps::{Capabilities, Capability, Grants, UserId};
pub use forms::{SETTINGS_FIELD, field, meta_box, meta_box_post_types, settings_page};
pub use lifecycle::{Removed, activate, uninstall};
pub use nonce::{META_BOX_ACTION, META_BOX_FIELD, Nonces};
pub use save::{MetaBoxForm, SaveOutcome, SaveRequest, save_meta_box};
pub use settings::{
    REGISTERED, Sanitizer, SettingError, Submitter, sanitizer_for, save_setting, update_setting,
};

/// Action the settings page token is bound to.
pub const SETTINGS_ACTION: &str = "db_seo_settings_group";
