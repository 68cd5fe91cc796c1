use serde::{Deserialize, Serialize};

use cashdesk_core::{EntityId, RuleSet, Violations};

/// Operation type identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationTypeId(pub EntityId);

impl OperationTypeId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OperationTypeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Maximum length of an operation-type label.
pub const MAX_LABEL_LEN: usize = 100;

/// Candidate operation type (versement, retrait, virement, …).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationTypeDraft {
    pub label: Option<String>,
}

impl OperationTypeDraft {
    /// Validate against the labels of already-persisted operation types.
    pub fn validate(&self, existing_labels: &[String]) -> Violations {
        let mut rules = RuleSet::new();
        rules.required("Label", self.label.as_deref());
        rules.max_len("Label", self.label.as_deref(), MAX_LABEL_LEN);
        rules.unique_label(
            self.label.as_deref(),
            existing_labels.iter().map(String::as_str),
            "An operation type with this label already exists.",
        );
        rules.finish()
    }
}
