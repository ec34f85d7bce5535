//! Operation guide records. Same shape as manuals, separate store.

use serde::{Deserialize, Serialize};

use super::Status;
use crate::i18n::language_name;
use crate::store::{Record, RecordId, StoreError};

/// One uploaded operation guide, one per language version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub id: RecordId,
    pub language: String,
    pub file_name: String,
    pub status: Status,
    pub upload_date: String,
}

/// Create-time fields; language and a selected file are both required.
#[derive(Debug, Default)]
pub struct GuideDraft {
    pub language: String,
    pub file_name: Option<String>,
}

/// Edit-time fields; a missing file selection keeps the stored name.
#[derive(Debug, Default)]
pub struct GuidePatch {
    pub language: Option<String>,
    pub file_name: Option<String>,
}

impl Record for Guide {
    type Draft = GuideDraft;
    type Patch = GuidePatch;

    const STORAGE_KEY: &'static str = "guide-files";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(draft: GuideDraft, id: RecordId, date: String) -> Result<Self, StoreError> {
        if draft.language.is_empty() {
            return Err(StoreError::missing_field("language"));
        }
        let file_name = draft
            .file_name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| StoreError::missing_field("file"))?;
        Ok(Guide {
            id,
            language: draft.language,
            file_name,
            status: Status::Active,
            upload_date: date,
        })
    }

    fn apply_patch(&mut self, patch: GuidePatch) {
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(file_name) = patch.file_name.filter(|name| !name.is_empty()) {
            self.file_name = file_name;
        }
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.file_name.clone(),
            language_name(&self.language).to_string(),
        ]
    }

    fn seed() -> Vec<Self> {
        vec![
            Guide {
                id: RecordId::from_raw(1),
                language: "zh".into(),
                file_name: "操作手册_中文版.pdf".into(),
                upload_date: "2025-01-15".into(),
                status: Status::Active,
            },
            Guide {
                id: RecordId::from_raw(2),
                language: "en".into(),
                file_name: "Operation_Guide_English.pdf".into(),
                upload_date: "2025-01-10".into(),
                status: Status::Active,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::today;

    #[test]
    fn test_create_defaults_status_active() {
        let guide = Guide::from_draft(
            GuideDraft {
                language: "en".into(),
                file_name: Some("guide.pdf".into()),
            },
            RecordId::from_raw(9),
            today(),
        )
        .unwrap();
        assert_eq!(guide.status, Status::Active);
    }

    #[test]
    fn test_guides_and_manuals_use_distinct_keys() {
        assert_ne!(Guide::STORAGE_KEY, crate::catalog::Manual::STORAGE_KEY);
    }

    #[test]
    fn test_seed_provides_both_language_versions() {
        let seeds = Guide::seed();
        assert_eq!(seeds.len(), 2);
        assert_eq!(
            seeds.first().map(|g| g.file_name.as_str()),
            Some("操作手册_中文版.pdf")
        );
    }
}
