//! `seomark uninstall`.

use anyhow::{Result, bail};

use super::common::Session;
use crate::admin::uninstall;
use crate::log;

pub fn run(session: &mut Session, confirmed: bool) -> Result<()> {
    if !confirmed {
        bail!("this deletes every setting and all SEO metadata, pass --yes to confirm");
    }

    let removed = uninstall(&mut session.store);
    session.persist()?;
    log!("store"; "removed {} options and {} metadata entries", removed.options, removed.meta);
    Ok(())
}
