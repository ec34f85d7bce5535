//! Product manual records.

use serde::{Deserialize, Serialize};

use super::Status;
use crate::i18n::language_name;
use crate::store::{Record, RecordId, StoreError};

/// One uploaded product manual, one per language version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manual {
    pub id: RecordId,
    pub language: String,
    pub file_name: String,
    pub status: Status,
    pub upload_date: String,
}

/// Create-time fields; language and a selected file are both required.
#[derive(Debug, Default)]
pub struct ManualDraft {
    pub language: String,
    pub file_name: Option<String>,
}

/// Edit-time fields. A missing file selection keeps the stored file
/// name; status is not editable.
#[derive(Debug, Default)]
pub struct ManualPatch {
    pub language: Option<String>,
    pub file_name: Option<String>,
}

impl Record for Manual {
    type Draft = ManualDraft;
    type Patch = ManualPatch;

    const STORAGE_KEY: &'static str = "manual-files";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(draft: ManualDraft, id: RecordId, date: String) -> Result<Self, StoreError> {
        if draft.language.is_empty() {
            return Err(StoreError::missing_field("language"));
        }
        let file_name = draft
            .file_name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| StoreError::missing_field("file"))?;
        Ok(Manual {
            id,
            language: draft.language,
            file_name,
            status: Status::Active,
            upload_date: date,
        })
    }

    fn apply_patch(&mut self, patch: ManualPatch) {
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
            Manual {
                id: RecordId::from_raw(1),
                language: "zh".into(),
                file_name: "产品说明书_中文版.pdf".into(),
                upload_date: "2025-01-15".into(),
                status: Status::Active,
            },
            Manual {
                id: RecordId::from_raw(2),
                language: "en".into(),
                file_name: "Product_Manual_English.pdf".into(),
                upload_date: "2025-01-10".into(),
                status: Status::Active,
            },
        ]
    }
}
