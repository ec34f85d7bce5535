//! Privacy policy records.
//!
//! Policies carry rich-text markup instead of an uploaded file and have
//! no publication status. Content arrives through the injected
//! rich-text capability; validation checks the plain-text view so a
//! shell of empty tags does not count as content.

use serde::{Deserialize, Serialize};

use crate::editor::plain_text;
use crate::i18n::language_name;
use crate::store::{Record, RecordId, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    pub language: String,
    pub content: String,
    pub update_date: String,
}

/// Create-time fields; language and non-empty content are required,
/// the title is optional.
#[derive(Debug, Default)]
pub struct PolicyDraft {
    pub title: String,
    pub language: String,
    pub content: String,
}

/// Edit-time fields; `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct PolicyPatch {
    pub title: Option<String>,
    pub language: Option<String>,
    pub content: Option<String>,
}

impl Record for Policy {
    type Draft = PolicyDraft;
    type Patch = PolicyPatch;

    const STORAGE_KEY: &'static str = "privacy-policies";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(draft: PolicyDraft, id: RecordId, date: String) -> Result<Self, StoreError> {
        if draft.language.is_empty() {
            return Err(StoreError::missing_field("language"));
        }
        if plain_text(&draft.content).is_empty() {
            return Err(StoreError::missing_field("content"));
        }
        Ok(Policy {
            id,
            title: draft.title,
            language: draft.language,
            content: draft.content,
            update_date: date,
        })
    }

    fn apply_patch(&mut self, patch: PolicyPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            language_name(&self.language).to_string(),
        ]
    }

    fn seed() -> Vec<Self> {
        vec![
            Policy {
                id: RecordId::from_raw(1),
                title: String::new(),
                language: "zh".into(),
                content: "本隐私政策说明了我们如何收集、使用和保护您的个人信息...".into(),
                update_date: "2025-01-15".into(),
            },
            Policy {
                id: RecordId::from_raw(2),
                title: String::new(),
                language: "en".into(),
                content: "This Privacy Policy explains how we collect, use and protect your personal information..."
                    .into(),
                update_date: "2025-01-15".into(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::today;

    #[test]
    fn test_create_rejects_empty_markup_content() {
        let id = RecordId::from_raw(5);
        let hollow = PolicyDraft {
            title: String::new(),
            language: "en".into(),
            content: "<p><br></p>".into(),
        };
        let err = Policy::from_draft(hollow, id, today()).unwrap_err();
        assert!(err.to_string().contains("content"));
    }

    #[test]
    fn test_create_accepts_markup_with_text() {
        let id = RecordId::from_raw(5);
        let draft = PolicyDraft {
            title: "隐私协议".into(),
            language: "zh".into(),
            content: "<p>正文</p>".into(),
        };
        let policy = Policy::from_draft(draft, id, today()).unwrap();
        assert_eq!(policy.title, "隐私协议");
        assert_eq!(policy.content, "<p>正文</p>");
    }

    #[test]
    fn test_patch_preserves_update_date() {
        let mut policy = Policy::seed().remove(0);
        let date = policy.update_date.clone();
        policy.apply_patch(PolicyPatch {
            content: Some("<p>new</p>".into()),
            ..PolicyPatch::default()
        });
        assert_eq!(policy.update_date, date);
        assert_eq!(policy.content, "<p>new</p>");
    }

    #[test]
    fn test_search_uses_title_and_language_label() {
        let mut policy = Policy::seed().remove(1);
        policy.title = "Privacy".into();
        let fields = policy.search_fields();
        assert!(fields.iter().any(|f| f == "Privacy"));
        assert!(fields.iter().any(|f| f == "English"));
    }

    #[test]
    fn test_legacy_shape_without_title_deserializes() {
        let raw = "{\"id\": 1, \"language\": \"zh\", \"content\": \"c\", \"updateDate\": \"2025-01-15\"}";
        let policy: Policy = serde_json::from_str(raw).unwrap();
        assert!(policy.title.is_empty());
    }
}
