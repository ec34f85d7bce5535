use std::path::{Path, PathBuf};

/// The name of the console data folder
pub const DATA_FOLDER: &str = ".artifact-console";

/// The name of the session marker file
pub const SESSION_FILE: &str = "session.json";

/// Current console version
pub const CONSOLE_VERSION: &str = "0.3.0";

/// Resolve the default data directory (`~/.artifact-console`), falling
/// back to the current directory when no home directory is known.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_FOLDER)
}

/// Get the path to the session marker file
#[must_use]
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE)
}

/// Get the path to the log directory
#[must_use]
pub fn log_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("logs")
}

/// Get current timestamp in ISO 8601 format
#[must_use]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Current date as `YYYY-MM-DD`, the format every record stores
#[must_use]
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_path() {
        let dir = Path::new("/home/user/.artifact-console");
        assert_eq!(
            session_path(dir),
            Path::new("/home/user/.artifact-console/session.json")
        );
    }

    #[test]
    fn test_log_dir() {
        let dir = Path::new("/tmp/data");
        assert_eq!(log_dir(dir), Path::new("/tmp/data/logs"));
    }

    #[test]
    fn test_data_folder_constant() {
        assert_eq!(DATA_FOLDER, ".artifact-console");
    }

    #[test]
    fn test_today_format() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert_eq!(date.matches('-').count(), 2);
    }

    #[test]
    fn test_now_iso_parses() {
        let timestamp = now_iso();
        assert!(chrono::DateTime::parse_from_rfc3339(&timestamp).is_ok());
    }
}
