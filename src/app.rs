//! Command-line surface of the console.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::i18n::Locale;
use crate::store::RecordId;

/// Artifact Console - local-first admin console for distributable
/// artifacts with bilingual presentation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Data directory (default: ~/.artifact-console)
    #[arg(long, env = "ARTIFACT_CONSOLE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Display locale: zh or en (default: the persisted choice, then zh)
    #[arg(short, long, env = "ARTIFACT_CONSOLE_LOCALE")]
    pub locale: Option<Locale>,

    /// Records per table page
    #[arg(long, env = "ARTIFACT_CONSOLE_PAGE_SIZE")]
    pub page_size: Option<usize>,

    /// Enable JSON log format (for log aggregation)
    #[arg(long, env = "ARTIFACT_CONSOLE_LOG_JSON", default_value = "false")]
    pub log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "ARTIFACT_CONSOLE_LOG_ROTATION")]
    pub log_rotation: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage firmware packages
    Package {
        #[command(subcommand)]
        action: PackageAction,
    },
    /// Manage product manuals
    Manual {
        #[command(subcommand)]
        action: FileAction,
    },
    /// Manage operation guides
    Guide {
        #[command(subcommand)]
        action: FileAction,
    },
    /// Manage privacy policies
    Policy {
        #[command(subcommand)]
        action: PolicyAction,
    },
    /// Log in (captcha-gated, records a session marker)
    Login,
    /// Log out and clear the session marker
    Logout {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PackageAction {
    /// List packages, optionally filtered and paged
    List {
        /// Free-text filter over name and version
        #[arg(long, default_value = "")]
        search: String,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Add a package (captures the file's name only)
    Add {
        /// Version number, e.g. 1.0
        #[arg(long)]
        version: String,
        /// Description in Chinese
        #[arg(long, default_value = "")]
        description_zh: String,
        /// Description in English
        #[arg(long, default_value = "")]
        description_en: String,
        /// Firmware file to record
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Edit a package; omitted fields keep their stored values
    Update {
        id: RecordId,
        #[arg(long)]
        version: Option<String>,
        #[arg(long)]
        description_zh: Option<String>,
        #[arg(long)]
        description_en: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Delete a package after confirmation
    Delete {
        id: RecordId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Notification-only download of a recorded package
    Download { id: RecordId },
}

/// Shared actions for the file-backed kinds (manuals and guides).
#[derive(Subcommand, Debug)]
pub enum FileAction {
    /// List records, optionally filtered and paged
    List {
        /// Free-text filter over file name and language label
        #[arg(long, default_value = "")]
        search: String,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Add a record (captures the file's name only)
    Add {
        /// Language tag: zh or en
        #[arg(long)]
        language: String,
        /// Document file to record
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Edit a record; omitted fields keep their stored values
    Update {
        id: RecordId,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Delete a record after confirmation
    Delete {
        id: RecordId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Notification-only download of a recorded file
    Download { id: RecordId },
}

#[derive(Subcommand, Debug)]
pub enum PolicyAction {
    /// List policies, optionally filtered and paged
    List {
        /// Free-text filter over title and language label
        #[arg(long, default_value = "")]
        search: String,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Add a policy
    Add {
        /// Optional title
        #[arg(long, default_value = "")]
        title: String,
        /// Language tag: zh or en
        #[arg(long)]
        language: String,
        /// Policy content markup
        #[arg(long)]
        content: String,
    },
    /// Edit a policy; omitted fields keep their stored values
    Update {
        id: RecordId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a policy after confirmation
    Delete {
        id: RecordId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Print a policy's content
    Show {
        id: RecordId,
        /// Print the plain-text view instead of markup
        #[arg(long)]
        plain: bool,
    },
}
