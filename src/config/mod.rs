//! Persisted console preferences.
//!
//! One optional `config.json` in the data directory: the display
//! locale (the console remembers the language choice), the default
//! page size, and log preferences. Missing file means defaults; CLI
//! flags override whatever is read.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::i18n::Locale;
use crate::store::PersistenceError;

/// Name of the config file inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Default records per table page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsoleConfig {
    /// Active display locale.
    pub language: Locale,
    /// Records per table page.
    pub page_size: usize,
    /// Log level directive (`trace`..`error`).
    pub log_level: String,
    /// Emit JSON-formatted logs.
    pub log_json: bool,
    /// Log rotation period: daily, hourly, or never.
    pub log_rotation: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            language: Locale::Zh,
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "info".to_string(),
            log_json: false,
            log_rotation: "daily".to_string(),
        }
    }
}

/// Read the config file, `None` when absent.
pub fn read_config(data_dir: &Path) -> Result<Option<ConsoleConfig>, PersistenceError> {
    let config_path = data_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let config: ConsoleConfig = serde_json::from_str(&content)?;
    Ok(Some(config))
}

/// Write the config file.
pub fn write_config(data_dir: &Path, config: &ConsoleConfig) -> Result<(), PersistenceError> {
    fs::create_dir_all(data_dir)?;
    let content = serde_json::to_string_pretty(config)?;
    fs::write(data_dir.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Read the config, falling back to defaults on absence or unreadable
/// content (logged, never fatal).
#[must_use]
pub fn load_or_default(data_dir: &Path) -> ConsoleConfig {
    match read_config(data_dir) {
        Ok(Some(config)) => config,
        Ok(None) => ConsoleConfig::default(),
        Err(err) => {
            warn!("unreadable config, using defaults: {err}");
            ConsoleConfig::default()
        }
    }
}
