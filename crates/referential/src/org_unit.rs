use serde::{Deserialize, Serialize};

use cashdesk_core::{RuleSet, Violations};

/// Maximum length of an organizational-unit code.
pub const MAX_CODE_LEN: usize = 20;

/// Maximum length of an organizational-unit name.
pub const MAX_NAME_LEN: usize = 100;

/// Candidate organizational unit (agency, branch, department).
///
/// Two required fields: the short code (unique across units) and the
/// display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgUnitDraft {
    pub code: Option<String>,
    pub name: Option<String>,
}

impl OrgUnitDraft {
    /// Validate against the codes of already-persisted units.
    pub fn validate(&self, existing_codes: &[String]) -> Violations {
        let mut rules = RuleSet::new();
        rules.required("Code", self.code.as_deref());
        rules.required("Name", self.name.as_deref());
        rules.max_len("Code", self.code.as_deref(), MAX_CODE_LEN);
        rules.max_len("Name", self.name.as_deref(), MAX_NAME_LEN);
        rules.unique_label(
            self.code.as_deref(),
            existing_codes.iter().map(String::as_str),
            "An organizational unit with this code already exists.",
        );
        rules.finish()
    }
}
