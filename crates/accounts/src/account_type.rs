use serde::{Deserialize, Serialize};

use cashdesk_core::{RuleSet, Violations};

/// Maximum length of an account-type label.
pub const MAX_LABEL_LEN: usize = 50;

/// Maximum length of an account-type description.
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Candidate account type (épargne, courant, …).
///
/// The description is optional; when supplied it is still length-bounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTypeDraft {
    pub label: Option<String>,
    pub description: Option<String>,
}

impl AccountTypeDraft {
    /// Validate against the labels of already-persisted account types.
    pub fn validate(&self, existing_labels: &[String]) -> Violations {
        let mut rules = RuleSet::new();
        rules.required("Label", self.label.as_deref());
        rules.max_len("Label", self.label.as_deref(), MAX_LABEL_LEN);
        rules.max_len(
            "Description",
            self.description.as_deref(),
            MAX_DESCRIPTION_LEN,
        );
        rules.unique_label(
            self.label.as_deref(),
            existing_labels.iter().map(String::as_str),
            "An account type with this label already exists.",
        );
        rules.finish()
    }
}
