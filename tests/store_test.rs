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

use std::path::Path;

use artifact_console::{
    FileStorage, Guide, GuideDraft, ListStore, Manual, Package, PackageDraft, PackagePatch,
    Record, SCHEMA_VERSION,
};
use common::create_test_dir;

fn open_packages(dir: &Path) -> ListStore<Package, FileStorage> {
    let storage = FileStorage::open(dir).unwrap();
    ListStore::open(storage).unwrap()
}

#[test]
fn test_first_open_seeds_and_writes_envelope() {
    let dir = create_test_dir();
    let store = open_packages(dir.path());
    assert_eq!(store.len(), 3);

    let file = dir.path().join(format!("{}.json", Package::STORAGE_KEY));
    let raw = std::fs::read_to_string(file).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["schemaVersion"], SCHEMA_VERSION);
    assert_eq!(value["records"].as_array().unwrap().len(), 3);
}

#[test]
fn test_create_survives_reopen() {
    let dir = create_test_dir();
    let created = {
        let mut store = open_packages(dir.path());
        store
            .create(PackageDraft {
                version: "9.9".into(),
                description: artifact_console::LocalizedText::new("新版", "New build"),
                file_name: Some("fw-9.9.bin".into()),
            })
            .unwrap()
    };

    let store = open_packages(dir.path());
    assert_eq!(store.len(), 4);
    let found = store.get(created.id).unwrap();
    assert_eq!(found.name, "Firmware v9.9");
    assert_eq!(found.file_name, "fw-9.9.bin");
    // newest record is listed first
    assert_eq!(store.records()[0].id, created.id);
}

#[test]
fn test_update_and_delete_survive_reopen() {
    let dir = create_test_dir();
    let id = {
        let mut store = open_packages(dir.path());
        let id = store.records()[0].id;
        store
            .update(
                id,
                PackagePatch {
                    version: Some("3.1".into()),
                    ..PackagePatch::default()
                },
            )
            .unwrap();
        id
    };

    {
        let mut store = open_packages(dir.path());
        assert_eq!(store.get(id).unwrap().version, "3.1");
        store.delete(id).unwrap();
    }

    let store = open_packages(dir.path());
    assert_eq!(store.len(), 2);
    assert!(store.get(id).is_none());
}

#[test]
fn test_bare_array_file_is_adopted_and_rewritten() {
    let dir = create_test_dir();
    let file = dir.path().join(format!("{}.json", Manual::STORAGE_KEY));
    std::fs::write(
        &file,
        r#"[{"id": 7, "language": "zh", "fileName": "old.pdf", "status": "active", "uploadDate": "2024-06-01"}]"#,
    )
    .unwrap();

    let storage = FileStorage::open(dir.path()).unwrap();
    let store: ListStore<Manual, FileStorage> = ListStore::open(storage).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].file_name, "old.pdf");

    let raw = std::fs::read_to_string(file).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["schemaVersion"], SCHEMA_VERSION);
}

#[test]
fn test_incompatible_legacy_records_reseed() {
    let dir = create_test_dir();
    let file = dir.path().join(format!("{}.json", Package::STORAGE_KEY));
    std::fs::write(
        &file,
        r#"[{"id": 1, "name": "Firmware v1.0.0", "version": "1.0.0", "size": "10 MB", "description": {"zh": "旧", "en": "old"}, "status": "active", "uploadDate": "2023-01-01"}]"#,
    )
    .unwrap();

    let store = open_packages(dir.path());
    assert_eq!(store.len(), 3);
    assert!(store.records().iter().all(|p| p.version != "1.0.0"));
}

#[test]
fn test_filtered_paging_over_file_store() {
    let dir = create_test_dir();
    let storage = FileStorage::open(dir.path()).unwrap();
    let mut store: ListStore<Guide, FileStorage> = ListStore::open(storage).unwrap();
    for n in 0..5 {
        store
            .create(GuideDraft {
                language: "en".into(),
                file_name: Some(format!("guide-{n}.pdf")),
            })
            .unwrap();
    }

    // 5 new + 2 seeds, filter keeps the English ones only
    let result = store.query("english", 1, 3);
    assert_eq!(result.total_pages, 2);
    assert_eq!(result.items.len(), 3);

    let tail = store.query("english", 2, 3);
    assert_eq!(tail.items.len(), 3);
}
