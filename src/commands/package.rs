//! Firmware package commands.

use color_eyre::eyre::Result;
use tracing::{debug, info};

use super::{confirmer, selected_file_name, AppContext};
use crate::app::PackageAction;
use crate::catalog::{Package, PackageDraft, PackagePatch};
use crate::console::table::{package_table, pager};
use crate::console::{confirm_then, notify, NotifyKind};
use crate::i18n::{text, Label, LocalizedText};
use crate::store::{clamp_page, StoreError};

pub fn run(ctx: &AppContext, action: PackageAction) -> Result<()> {
    match action {
        PackageAction::List { search, page } => list(ctx, &search, page),
        PackageAction::Add {
            version,
            description_zh,
            description_en,
            file,
        } => {
            let draft = PackageDraft {
                version,
                description: LocalizedText::new(description_zh, description_en),
                file_name: selected_file_name(file.as_deref()),
            };
            add(ctx, draft)
        }
        PackageAction::Update {
            id,
            version,
            description_zh,
            description_en,
            file,
        } => {
            let mut store = ctx.open_store::<Package>()?;
            let Some(current) = store.get(id).cloned() else {
                notify(NotifyKind::Error, &StoreError::NotFound(id).to_string());
                return Ok(());
            };
            let description = if description_zh.is_some() || description_en.is_some() {
                Some(LocalizedText::new(
                    description_zh.unwrap_or(current.description.zh),
                    description_en.unwrap_or(current.description.en),
                ))
            } else {
                None
            };
            let patch = PackagePatch {
                version,
                description,
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
        PackageAction::Delete { id, yes } => {
            let mut store = ctx.open_store::<Package>()?;
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
        PackageAction::Download { id } => {
            let store = ctx.open_store::<Package>()?;
            match store.get(id) {
                Some(found) => {
                    info!(name = %found.name, file = %found.file_name, "download requested");
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

fn list(ctx: &AppContext, search: &str, page: u32) -> Result<()> {
    let store = ctx.open_store::<Package>()?;
    let total_pages = store.query(search, 1, ctx.page_size).total_pages;
    let page = clamp_page(page.max(1), total_pages);
    let result = store.query(search, page, ctx.page_size);
    println!("{}", package_table(&result.items, ctx.locale));
    if result.total_pages > 1 {
        println!("{}", pager(result.total_pages, page));
    }
    Ok(())
}

fn add(ctx: &AppContext, draft: PackageDraft) -> Result<()> {
    let mut store = ctx.open_store::<Package>()?;
    match store.create(draft) {
        Ok(created) => {
            info!(id = %created.id, version = %created.version, "package added");
            notify(NotifyKind::Success, text(ctx.locale, Label::AddSuccess));
        }
        Err(err @ StoreError::Validation(_)) => notify(NotifyKind::Error, &err.to_string()),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
