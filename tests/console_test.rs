#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing
)]

mod common;

use std::path::PathBuf;

use artifact_console::app::{Command, FileAction, PackageAction, PolicyAction};
use artifact_console::commands::{dispatch, AppContext};
use artifact_console::{
    read_session, write_session, FileStorage, ListStore, Locale, Manual, Package, Policy,
};
use common::create_test_dir;

fn ctx(data_dir: PathBuf) -> AppContext {
    AppContext {
        data_dir,
        locale: Locale::En,
        page_size: 10,
    }
}

fn open<T: artifact_console::Record>(ctx: &AppContext) -> ListStore<T, FileStorage> {
    let storage = FileStorage::open(&ctx.data_dir).unwrap();
    ListStore::open(storage).unwrap()
}

#[test]
fn test_package_add_then_delete_through_dispatch() {
    let dir = create_test_dir();
    let ctx = ctx(dir.path().to_path_buf());

    dispatch(
        &ctx,
        Command::Package {
            action: PackageAction::Add {
                version: "4.2".into(),
                description_zh: "测试".into(),
                description_en: "test build".into(),
                file: Some(PathBuf::from("/tmp/fw-4.2.bin")),
            },
        },
    )
    .unwrap();

    let store = open::<Package>(&ctx);
    assert_eq!(store.len(), 4);
    let added = &store.records()[0];
    assert_eq!(added.name, "Firmware v4.2");
    assert_eq!(added.file_name, "fw-4.2.bin");

    dispatch(
        &ctx,
        Command::Package {
            action: PackageAction::Delete {
                id: added.id,
                yes: true,
            },
        },
    )
    .unwrap();
    assert_eq!(open::<Package>(&ctx).len(), 3);
}

#[test]
fn test_invalid_add_reports_without_aborting() {
    let dir = create_test_dir();
    let ctx = ctx(dir.path().to_path_buf());

    // Three-segment version is rejected; the command still exits cleanly.
    dispatch(
        &ctx,
        Command::Package {
            action: PackageAction::Add {
                version: "4.2.1".into(),
                description_zh: String::new(),
                description_en: String::new(),
                file: Some(PathBuf::from("fw.bin")),
            },
        },
    )
    .unwrap();
    assert_eq!(open::<Package>(&ctx).len(), 3);

    // Policy content that is only markup shell counts as empty.
    dispatch(
        &ctx,
        Command::Policy {
            action: PolicyAction::Add {
                title: String::new(),
                language: "en".into(),
                content: "<p><br></p>".into(),
            },
        },
    )
    .unwrap();
    assert_eq!(open::<Policy>(&ctx).len(), 2);
}

#[test]
fn test_manual_update_keeps_file_when_not_reselected() {
    let dir = create_test_dir();
    let ctx = ctx(dir.path().to_path_buf());

    let id = open::<Manual>(&ctx).records()[0].id;
    dispatch(
        &ctx,
        Command::Manual {
            action: FileAction::Update {
                id,
                language: Some("en".into()),
                file: None,
            },
        },
    )
    .unwrap();

    let store = open::<Manual>(&ctx);
    let updated = store.get(id).unwrap();
    assert_eq!(updated.language, "en");
    assert!(!updated.file_name.is_empty());
}

#[test]
fn test_logout_clears_session_marker() {
    let dir = create_test_dir();
    let ctx = ctx(dir.path().to_path_buf());

    write_session(&ctx.data_dir, "admin").unwrap();
    assert!(read_session(&ctx.data_dir).unwrap().is_some());

    dispatch(&ctx, Command::Logout { yes: true }).unwrap();
    assert!(read_session(&ctx.data_dir).unwrap().is_none());
}
