//! Privacy policy commands.

use color_eyre::eyre::Result;

use super::{confirmer, AppContext};
use crate::app::PolicyAction;
use crate::catalog::{Policy, PolicyDraft, PolicyPatch};
use crate::console::table::{pager, policy_table};
use crate::console::{confirm_then, notify, NotifyKind};
use crate::editor::plain_text;
use crate::i18n::{text, Label};
use crate::store::{clamp_page, StoreError};

pub fn run(ctx: &AppContext, action: PolicyAction) -> Result<()> {
    match action {
        PolicyAction::List { search, page } => {
            let store = ctx.open_store::<Policy>()?;
            let total_pages = store.query(&search, 1, ctx.page_size).total_pages;
            let page = clamp_page(page.max(1), total_pages);
            let result = store.query(&search, page, ctx.page_size);
            println!("{}", policy_table(&result.items, ctx.locale));
            if result.total_pages > 1 {
                println!("{}", pager(result.total_pages, page));
            }
            Ok(())
        }
        PolicyAction::Add {
            title,
            language,
            content,
        } => {
            let mut store = ctx.open_store::<Policy>()?;
            let draft = PolicyDraft {
                title,
                language,
                content,
            };
            match store.create(draft) {
                Ok(created) => {
                    tracing::info!(id = %created.id, language = %created.language, "policy added");
                    notify(NotifyKind::Success, text(ctx.locale, Label::AddSuccess));
                }
                Err(err @ StoreError::Validation(_)) => {
                    notify(NotifyKind::Error, &err.to_string());
                }
                Err(err) => return Err(err.into()),
            }
            Ok(())
        }
        PolicyAction::Update {
            id,
            title,
            language,
            content,
        } => {
            let mut store = ctx.open_store::<Policy>()?;
            let patch = PolicyPatch {
                title,
                language,
                content,
            };
            match store.update(id, patch) {
                Ok(_) => notify(NotifyKind::Success, text(ctx.locale, Label::EditSuccess)),
                Err(err @ (StoreError::Validation(_) | StoreError::NotFound(_))) => {
                    notify(NotifyKind::Error, &err.to_string());
                }
                Err(err) => return Err(err.into()),
            }
            Ok(())
        }
        PolicyAction::Delete { id, yes } => {
            let mut store = ctx.open_store::<Policy>()?;
            let executed = confirm_then(
                confirmer(yes).as_ref(),
                text(ctx.locale, Label::DeleteTitle),
                text(ctx.locale, Label::DeleteConfirm),
                || store.delete(id),
            )?;
            if executed {
                notify(NotifyKind::Success, text(ctx.locale, Label::DeleteSuccess));
            }
            Ok(())
        }
        PolicyAction::Show { id, plain } => {
            let store = ctx.open_store::<Policy>()?;
            match store.get(id) {
                Some(policy) => {
                    if plain {
                        println!("{}", plain_text(&policy.content));
                    } else {
                        println!("{}", policy.content);
                    }
                }
                None => notify(NotifyKind::Error, &StoreError::NotFound(id).to_string()),
            }
            Ok(())
        }
    }
}
