//! Account administration: account types and the account-history filter.
//!
//! Pure candidate validation, same contract as the referential crate.

pub mod account_type;
pub mod history_filter;

pub use account_type::AccountTypeDraft;
pub use history_filter::HistoryFilter;
