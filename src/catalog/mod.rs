//! The four managed record kinds: firmware packages, product manuals,
//! operation guides, and privacy policies. Each kind is a typed record
//! with a typed draft (create options) and patch (update options),
//! managed by one [`ListStore`](crate::store::ListStore) instance.

mod guide;
mod manual;
mod package;
mod policy;

pub use guide::{Guide, GuideDraft, GuidePatch};
pub use manual::{Manual, ManualDraft, ManualPatch};
pub use package::{Package, PackageDraft, PackagePatch};
pub use policy::{Policy, PolicyDraft, PolicyPatch};

use serde::{Deserialize, Serialize};

use crate::i18n::{text, Label, Locale};

/// Publication status carried by packages, manuals, and guides.
/// Defaults to active on create; none of the edit flows change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    /// Localized display label.
    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            Status::Active => text(locale, Label::StatusActive),
            Status::Inactive => text(locale, Label::StatusInactive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_active() {
        assert_eq!(Status::default(), Status::Active);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Active).unwrap(), "\"active\"");
        let back: Status = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(back, Status::Inactive);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::Active.label(Locale::En), "Active");
        assert_eq!(Status::Inactive.label(Locale::Zh), "停用");
    }
}
