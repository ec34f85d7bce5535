#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod app;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod console;
pub mod editor;
pub mod i18n;
pub mod logging;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use catalog::{
    Guide, GuideDraft, GuidePatch, Manual, ManualDraft, ManualPatch, Package, PackageDraft,
    PackagePatch, Policy, PolicyDraft, PolicyPatch, Status,
};
pub use config::{load_or_default, read_config, write_config, ConsoleConfig, DEFAULT_PAGE_SIZE};
pub use console::captcha::Captcha;
pub use console::login::{
    clear_session, read_session, validate_login, write_session, LoginDenied, Session,
};
pub use editor::{plain_text, MarkupBuffer, RichText};
pub use i18n::{language_name, text, Label, Locale, LocalizedText};
pub use store::{
    clamp_page, page_window, FileStorage, IdGenerator, ListStore, MemoryStorage, PageLabel,
    PersistenceError, QueryPage, Record, RecordId, Storage, StoreError, SCHEMA_VERSION,
};
