use serde::{Deserialize, Serialize};

use cashdesk_core::{RuleSet, Violations};

/// Maximum length of a cash-desk label.
pub const MAX_LABEL_LEN: usize = 50;

/// Regulatory ceiling on the physical amount a desk may hold, in currency
/// units. The ceiling is inclusive: exactly 7 000 000 is allowed.
pub const MAX_PHYSICAL_AMOUNT: i64 = 7_000_000;

/// Candidate cash desk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashDeskDraft {
    pub label: Option<String>,
    pub physical_amount: Option<i64>,
}

impl CashDeskDraft {
    /// Validate against the labels of already-persisted cash desks.
    pub fn validate(&self, existing_labels: &[String]) -> Violations {
        let mut rules = RuleSet::new();
        rules.required("Label", self.label.as_deref());
        rules.max_len("Label", self.label.as_deref(), MAX_LABEL_LEN);
        rules.unique_label(
            self.label.as_deref(),
            existing_labels.iter().map(String::as_str),
            "A cash desk with this label already exists.",
        );

        match self.physical_amount {
            None => {
                rules.violation("Physical amount is required.");
            }
            Some(amount) => {
                rules.ensure(amount >= 0, "Physical amount cannot be negative.");
                rules.ensure(
                    amount <= MAX_PHYSICAL_AMOUNT,
                    "Physical amount cannot exceed 7,000,000.",
                );
            }
        }

        rules.finish()
    }
}
