//! Firmware package records.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::Status;
use crate::i18n::LocalizedText;
use crate::store::{Record, RecordId, StoreError};

/// `major.minor`, the only accepted version shape. Anything with more
/// dot-separated segments is the pre-migration format.
#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static VERSION_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^\d+\.\d+$").expect("VERSION_RE is a valid regex literal")
});

/// One distributable firmware package. Only the file name is captured;
/// the bytes never leave the operator's machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: RecordId,
    pub name: String,
    pub version: String,
    pub size: String,
    pub description: LocalizedText,
    #[serde(default)]
    pub file_name: String,
    pub status: Status,
    pub upload_date: String,
}

/// Create-time fields. Version and a selected file are required;
/// descriptions may be blank in either locale.
#[derive(Debug, Default)]
pub struct PackageDraft {
    pub version: String,
    pub description: LocalizedText,
    pub file_name: Option<String>,
}

/// Edit-time fields. `None` keeps the stored value; in particular a
/// missing file selection preserves the existing file name. Status and
/// the derived name are not editable.
#[derive(Debug, Default)]
pub struct PackagePatch {
    pub version: Option<String>,
    pub description: Option<LocalizedText>,
    pub file_name: Option<String>,
}

fn validate_version(version: &str) -> Result<(), StoreError> {
    if version.is_empty() {
        return Err(StoreError::missing_field("version"));
    }
    if !VERSION_RE.is_match(version) {
        return Err(StoreError::Validation(format!(
            "invalid version '{version}', expected major.minor"
        )));
    }
    Ok(())
}

impl Record for Package {
    type Draft = PackageDraft;
    type Patch = PackagePatch;

    const STORAGE_KEY: &'static str = "ota-packages";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(draft: PackageDraft, id: RecordId, date: String) -> Result<Self, StoreError> {
        validate_version(&draft.version)?;
        let file_name = draft
            .file_name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| StoreError::missing_field("file"))?;
        Ok(Package {
            id,
            name: format!("Firmware v{}", draft.version),
            version: draft.version,
            size: "-".to_string(),
            description: draft.description,
            file_name,
            status: Status::Active,
            upload_date: date,
        })
    }

    fn apply_patch(&mut self, patch: PackagePatch) {
        if let Some(version) = patch.version {
            self.version = version;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(file_name) = patch.file_name.filter(|name| !name.is_empty()) {
            self.file_name = file_name;
        }
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.version.clone()]
    }

    fn seed() -> Vec<Self> {
        vec![
            Package {
                id: RecordId::from_raw(1),
                name: "Firmware v1.2".into(),
                version: "1.2".into(),
                size: "-".into(),
                upload_date: "2025-01-15".into(),
                status: Status::Active,
                file_name: String::new(),
                description: LocalizedText::new(
                    "修复了网络连接问题，优化了系统性能",
                    "Fixed network connection issues and optimized system performance",
                ),
            },
            Package {
                id: RecordId::from_raw(2),
                name: "Firmware v1.1".into(),
                version: "1.1".into(),
                size: "-".into(),
                upload_date: "2025-01-10".into(),
                status: Status::Active,
                file_name: String::new(),
                description: LocalizedText::new(
                    "安全更新，修复了多个安全漏洞",
                    "Security update, fixed multiple vulnerabilities",
                ),
            },
            Package {
                id: RecordId::from_raw(3),
                name: "Firmware v1.0".into(),
                version: "1.0".into(),
                size: "-".into(),
                upload_date: "2025-01-05".into(),
                status: Status::Inactive,
                file_name: String::new(),
                description: LocalizedText::new(
                    "主要版本更新，新增多个功能",
                    "Major version update with new features",
                ),
            },
        ]
    }

    /// Pre-migration package data carried three-segment versions (e.g.
    /// `2.1.0`); such sequences are discarded wholesale.
    fn legacy_incompatible(records: &[Self]) -> bool {
        records
            .iter()
            .any(|package| package.version.split('.').count() > 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::today;

    fn draft(version: &str, file: Option<&str>) -> PackageDraft {
        PackageDraft {
            version: version.into(),
            description: LocalizedText::new("描述", "description"),
            file_name: file.map(Into::into),
        }
    }

    #[test]
    fn test_create_derives_name_and_defaults() {
        let id = RecordId::from_raw(100);
        let package =
            Package::from_draft(draft("2.0", Some("fw-2.0.bin")), id, today()).unwrap();
        assert_eq!(package.name, "Firmware v2.0");
        assert_eq!(package.size, "-");
        assert_eq!(package.status, Status::Active);
        assert_eq!(package.file_name, "fw-2.0.bin");
    }

    #[test]
    fn test_create_requires_version_and_file() {
        let id = RecordId::from_raw(100);
        assert!(Package::from_draft(draft("", Some("a.bin")), id, today()).is_err());
        assert!(Package::from_draft(draft("2.0", None), id, today()).is_err());
        assert!(Package::from_draft(draft("2.0", Some("")), id, today()).is_err());
    }

    #[test]
    fn test_create_rejects_three_segment_version() {
        let id = RecordId::from_raw(100);
        let err = Package::from_draft(draft("2.1.0", Some("a.bin")), id, today()).unwrap_err();
        assert!(err.to_string().contains("2.1.0"));
    }

    #[test]
    fn test_patch_keeps_file_when_absent() {
        let id = RecordId::from_raw(100);
        let mut package =
            Package::from_draft(draft("2.0", Some("fw-2.0.bin")), id, today()).unwrap();

        package.apply_patch(PackagePatch {
            version: Some("2.1".into()),
            ..PackagePatch::default()
        });
        assert_eq!(package.version, "2.1");
        assert_eq!(package.file_name, "fw-2.0.bin");

        package.apply_patch(PackagePatch {
            file_name: Some("fw-2.1.bin".into()),
            ..PackagePatch::default()
        });
        assert_eq!(package.file_name, "fw-2.1.bin");
    }

    #[test]
    fn test_legacy_detection_on_segment_count() {
        let mut records = Package::seed();
        assert!(!Package::legacy_incompatible(&records));

        if let Some(first) = records.first_mut() {
            first.version = "2.1.0".into();
        }
        assert!(Package::legacy_incompatible(&records));
    }

    #[test]
    fn test_persisted_shape_is_camel_case() {
        let package = Package::seed().remove(0);
        let json = serde_json::to_string(&package).unwrap();
        assert!(json.contains("\"uploadDate\""));
        assert!(json.contains("\"fileName\""));
        assert!(json.contains("\"status\":\"active\""));
    }
}
