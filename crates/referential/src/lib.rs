//! Referential data for the back office: amount types, operation types,
//! payment modes, periodicities, organizational units, and the association
//! between operation types and amount types.
//!
//! Each entity exposes a draft (the create/update candidate, possibly
//! partial) whose `validate` method maps it — together with the caller's
//! already-persisted siblings — to an ordered list of display-ready
//! violation messages. Pure domain logic: no IO, no storage, no panics.

pub mod amount_type;
pub mod association;
pub mod operation_type;
pub mod org_unit;
pub mod payment_mode;
pub mod periodicity;

pub use amount_type::{AmountTypeDraft, AmountTypeId};
pub use association::{OperationAmountDraft, OperationAmountLink};
pub use operation_type::{OperationTypeDraft, OperationTypeId};
pub use org_unit::OrgUnitDraft;
pub use payment_mode::PaymentModeDraft;
pub use periodicity::PeriodicityDraft;
