use tempfile::TempDir;

/// Fresh data directory for one test.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}
