use serde::{Deserialize, Serialize};

use cashdesk_core::{RuleSet, Violations};

/// Maximum length of a payment-mode label (short codes: espèces, chèque, …).
pub const MAX_LABEL_LEN: usize = 20;

/// Candidate payment mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentModeDraft {
    pub label: Option<String>,
}

impl PaymentModeDraft {
    /// Validate against the labels of already-persisted payment modes.
    pub fn validate(&self, existing_labels: &[String]) -> Violations {
        let mut rules = RuleSet::new();
        rules.required("Label", self.label.as_deref());
        rules.max_len("Label", self.label.as_deref(), MAX_LABEL_LEN);
        rules.unique_label(
            self.label.as_deref(),
            existing_labels.iter().map(String::as_str),
            "A payment mode with this label already exists.",
        );
        rules.finish()
    }
}
