//! Manual and guide commands. The two kinds share their shape and
//! actions but live in separate stores.

use color_eyre::eyre::Result;
use tracing::{debug, info};

use super::{confirmer, selected_file_name, AppContext};
use crate::app::FileAction;
use crate::catalog::{Guide, GuideDraft, GuidePatch, Manual, ManualDraft, ManualPatch};
use crate::console::table::{guide_table, manual_table, pager};
use crate::console::{confirm_then, notify, NotifyKind};
use crate::i18n::{text, Label};
use crate::store::{clamp_page, StoreError};

pub fn run_manual(ctx: &AppContext, action: FileAction) -> Result<()> {
    match action {
        FileAction::List { search, page } => {
            let store = ctx.open_store::<Manual>()?;
            let total_pages = store.query(&search, 1, ctx.page_size).total_pages;
            let page = clamp_page(page.max(1), total_pages);
            let result = store.query(&search, page, ctx.page_size);
            println!("{}", manual_table(&result.items, ctx.locale));
            if result.total_pages > 1 {
                println!("{}", pager(result.total_pages, page));
            }
            Ok(())
        }
        FileAction::Add { language, file } => {
            let mut store = ctx.open_store::<Manual>()?;
            let draft = ManualDraft {
                language,
                file_name: selected_file_name(file.as_deref()),
            };
            match store.create(draft) {
                Ok(created) => {
                    info!(id = %created.id, file = %created.file_name, "manual added");
                    notify(NotifyKind::Success, text(ctx.locale, Label::AddSuccess));
                }
                Err(err @ StoreError::Validation(_)) => {
                    notify(NotifyKind::Error, &err.to_string());
                }
                Err(err) => return Err(err.into()),
            }
            Ok(())
        }
        FileAction::Update { id, language, file } => {
            let mut store = ctx.open_store::<Manual>()?;
            let patch = ManualPatch {
                language,
                file_name: selected_file_name(file.as_deref()),
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
        FileAction::Delete { id, yes } => {
            let mut store = ctx.open_store::<Manual>()?;
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
        FileAction::Download { id } => {
            let store = ctx.open_store::<Manual>()?;
            match store.get(id) {
                Some(found) => {
                    info!(file = %found.file_name, "download requested");
                    notify(
                        NotifyKind::Success,
                        text(ctx.locale, Label::DownloadSuccess),
                    );
                }
                None => debug!(%id, "download target missing"),
            }
            Ok(())
        }
    }
}

pub fn run_guide(ctx: &AppContext, action: FileAction) -> Result<()> {
    match action {
        FileAction::List { search, page } => {
            let store = ctx.open_store::<Guide>()?;
            let total_pages = store.query(&search, 1, ctx.page_size).total_pages;
            let page = clamp_page(page.max(1), total_pages);
            let result = store.query(&search, page, ctx.page_size);
            println!("{}", guide_table(&result.items, ctx.locale));
            if result.total_pages > 1 {
                println!("{}", pager(result.total_pages, page));
            }
            Ok(())
        }
        FileAction::Add { language, file } => {
            let mut store = ctx.open_store::<Guide>()?;
            let draft = GuideDraft {
                language,
                file_name: selected_file_name(file.as_deref()),
            };
            match store.create(draft) {
                Ok(created) => {
                    info!(id = %created.id, file = %created.file_name, "guide added");
                    notify(NotifyKind::Success, text(ctx.locale, Label::AddSuccess));
                }
                Err(err @ StoreError::Validation(_)) => {
                    notify(NotifyKind::Error, &err.to_string());
                }
                Err(err) => return Err(err.into()),
            }
            Ok(())
        }
        FileAction::Update { id, language, file } => {
            let mut store = ctx.open_store::<Guide>()?;
            let patch = GuidePatch {
                language,
                file_name: selected_file_name(file.as_deref()),
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
        FileAction::Delete { id, yes } => {
            let mut store = ctx.open_store::<Guide>()?;
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
        FileAction::Download { id } => {
            let store = ctx.open_store::<Guide>()?;
            match store.get(id) {
                Some(found) => {
                    info!(file = %found.file_name, "download requested");
                    notify(
                        NotifyKind::Success,
                        text(ctx.locale, Label::DownloadSuccess),
                    );
                }
                None => debug!(%id, "download target missing"),
            }
            Ok(())
        }
    }
}
