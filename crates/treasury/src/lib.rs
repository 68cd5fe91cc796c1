//! Treasury: cash desks and their physical-amount bounds.

pub mod cash_desk;

pub use cash_desk::{CashDeskDraft, MAX_PHYSICAL_AMOUNT};
