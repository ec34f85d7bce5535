//! Command handlers: thin glue between the CLI surface, the stores,
//! and the rendering collaborators.

mod auth;
mod files;
mod package;
mod policy;

use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;

use crate::app::Command;
use crate::console::Confirmer;
use crate::i18n::Locale;
use crate::store::{FileStorage, ListStore, Record, StoreError};

/// Everything a handler needs besides its own arguments.
pub struct AppContext {
    pub data_dir: PathBuf,
    pub locale: Locale,
    pub page_size: usize,
}

impl AppContext {
    /// Open the kind's store over the shared data directory.
    pub fn open_store<T: Record>(&self) -> Result<ListStore<T, FileStorage>, StoreError> {
        let storage = FileStorage::open(&self.data_dir)?;
        ListStore::open(storage)
    }
}

/// Route a parsed command to its handler.
pub fn dispatch(ctx: &AppContext, command: Command) -> Result<()> {
    match command {
        Command::Package { action } => package::run(ctx, action),
        Command::Manual { action } => files::run_manual(ctx, action),
        Command::Guide { action } => files::run_guide(ctx, action),
        Command::Policy { action } => policy::run(ctx, action),
        Command::Login => auth::login(ctx),
        Command::Logout { yes } => auth::logout(ctx, yes),
    }
}

/// Confirmation source for a destructive action; `--yes` bypasses the
/// prompt for scripted use.
pub(crate) fn confirmer(assume_yes: bool) -> Box<dyn Confirmer> {
    if assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(crate::console::TerminalConfirmer)
    }
}

struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, _title: &str, _message: &str) -> bool {
        true
    }
}

/// The recorded name of a selected file; the bytes are never read.
pub(crate) fn selected_file_name(path: Option<&Path>) -> Option<String> {
    path.and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_file_name_takes_basename() {
        let path = PathBuf::from("/releases/fw/firmware-2.0.bin");
        assert_eq!(
            selected_file_name(Some(&path)),
            Some("firmware-2.0.bin".to_string())
        );
        assert_eq!(selected_file_name(None), None);
    }

    #[test]
    fn test_assume_yes_confirms() {
        assert!(confirmer(true).confirm("t", "m"));
    }
}
