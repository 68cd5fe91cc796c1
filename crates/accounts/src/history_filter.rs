use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cashdesk_core::{RuleSet, Violations};

/// Candidate account-history filter (the search form on the history screen).
///
/// All three fields are required; the date pair must additionally be in
/// chronological order before the query is allowed to run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryFilter {
    pub account_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl HistoryFilter {
    /// Validate the filter. No sibling context: history filters are never
    /// persisted, so there is nothing to be unique against.
    pub fn validate(&self) -> Violations {
        let mut rules = RuleSet::new();
        rules.required("Account number", self.account_number.as_deref());
        rules.ensure(self.start_date.is_some(), "Start date is required.");
        rules.ensure(self.end_date.is_some(), "End date is required.");

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            rules.ensure(start <= end, "Start date cannot be after end date.");
        }

        rules.finish()
    }
}
