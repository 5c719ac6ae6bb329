//! `seomark settings`.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use super::args::SettingsAction;
use super::common::Session;
use crate::admin::{
    REGISTERED, SETTINGS_ACTION, Submitter, UserId, sanitizer_for, save_setting, settings_page,
};
use crate::log;
use crate::store::Options;

pub fn run(session: &mut Session, action: &SettingsAction) -> Result<()> {
    match action {
        SettingsAction::Show => {
            print!("{}", show(&session.store));
            Ok(())
        }
        SettingsAction::Get { key } => {
            if sanitizer_for(key).is_none() {
                bail!("`{key}` is not a registered setting");
            }
            println!("{}", session.store.get_option_or(key, ""));
            Ok(())
        }
        SettingsAction::Set {
            key,
            value,
            nonce,
            user,
        } => {
            let submitter = Submitter {
                user: UserId(user.user),
                token: nonce.as_deref(),
            };
            let nonces = session.nonces();
            let grants = session.grants();
            let stored =
                save_setting(&mut session.store, submitter, key, value, &nonces, &grants)?;
            session.persist()?;
            log!("store"; "{} = {:?}", key, stored);
            Ok(())
        }
        SettingsAction::Form { user } => {
            let token = session.nonces().create(SETTINGS_ACTION, UserId(user.user));
            print!("{}", settings_page(&session.store, &token));
            Ok(())
        }
    }
}

/// One `key = "value"` line per registered setting, unset ones marked.
fn show(options: &dyn Options) -> String {
    REGISTERED
        .iter()
        .map(|(key, _)| match options.get_option(key) {
            Some(value) => format!("{} = {:?}\n", key.bold(), value),
            None => format!("{} = {}\n", key.bold(), "(unset)".dimmed()),
        })
        .collect()
}
