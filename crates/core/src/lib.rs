//! `cashdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the shared validation rule engine, the domain error model, and typed ids.

pub mod error;
pub mod id;
pub mod validation;

pub use error::{DomainError, DomainResult};
pub use id::EntityId;
pub use validation::{RuleSet, Violations, normalize_label};
