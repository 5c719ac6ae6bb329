//! `seomark meta`.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use std::path::Path;

use super::args::{MetaAction, SaveArgs};
use super::common::{Session, load_page};
use crate::admin::{
    META_BOX_ACTION, MetaBoxForm, SaveOutcome, SaveRequest, UserId, meta_box, meta_box_post_types,
    save_meta_box,
};
use crate::store::{DocId, MemoryStore, keys};
use crate::{debug, log};

pub fn run(session: &mut Session, action: &MetaAction) -> Result<()> {
    match action {
        MetaAction::Show { doc } => {
            print!("{}", show(&session.store, DocId(*doc)));
            Ok(())
        }
        MetaAction::Form { page, user } => form(session, page, UserId(user.user)),
        MetaAction::Save { args } => save(session, args),
    }
}

fn show(store: &MemoryStore, doc: DocId) -> String {
    store
        .meta_of(doc)
        .filter(|(key, _)| key.starts_with(keys::META_PREFIX))
        .map(|(key, value)| format!("{} = {:?}\n", key.bold(), value))
        .collect()
}

fn form(session: &Session, page: &Path, user: UserId) -> Result<()> {
    let page = load_page(page)?;
    let Some(doc) = page.document.as_ref() else {
        bail!("page has no [document] to edit");
    };

    let post_types = meta_box_post_types(&session.config.admin, &session.filters);
    if !post_types.iter().any(|t| *t == doc.post_type) {
        bail!("post type `{}` has no SEO meta box", doc.post_type);
    }

    let token = session.nonces().create(META_BOX_ACTION, user);
    debug!("meta"; "token for user {}: {}", user, token);
    print!("{}", meta_box(&session.store, doc.id, &token));
    Ok(())
}

fn save(session: &mut Session, args: &SaveArgs) -> Result<()> {
    let request = SaveRequest {
        doc: DocId(args.doc),
        user: UserId(args.user.user),
        autosave: args.autosave,
        form: MetaBoxForm {
            nonce: args.nonce.clone(),
            post_type: args.post_type.clone(),
            title: args.title.clone(),
            description: args.description.clone(),
            image: args.image.clone(),
            og_type: args.og_type.clone(),
        },
    };

    let nonces = session.nonces();
    let grants = session.grants();
    let (doc, outcome) = save_meta_box(&mut session.store, &request, &nonces, &grants);

    match outcome {
        SaveOutcome::Saved(written) => {
            session.persist()?;
            log!("save"; "document {}: {} fields written", doc, written);
        }
        rejected => log!("save"; "document {}: nothing written ({:?})", doc, rejected),
    }
    println!("{doc}");
    Ok(())
}
