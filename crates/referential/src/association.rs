use serde::{Deserialize, Serialize};

use cashdesk_core::{RuleSet, Violations};

use crate::{AmountTypeId, OperationTypeId};

/// An already-persisted operation-type / amount-type association.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationAmountLink {
    pub operation_type_id: OperationTypeId,
    pub amount_type_id: AmountTypeId,
}

/// Candidate association between an operation type and an amount type.
///
/// Uniqueness is a composite-key check: the candidate collides only when
/// BOTH ids match an existing link. Sharing one id with an existing link is
/// fine — that is how one operation type carries several amount types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationAmountDraft {
    pub operation_type_id: Option<OperationTypeId>,
    pub amount_type_id: Option<AmountTypeId>,
}

impl OperationAmountDraft {
    /// Validate against already-persisted links.
    pub fn validate(&self, existing: &[OperationAmountLink]) -> Violations {
        let mut rules = RuleSet::new();
        rules.ensure(
            self.operation_type_id.is_some(),
            "Operation type is required.",
        );
        rules.ensure(self.amount_type_id.is_some(), "Amount type is required.");

        if let (Some(operation), Some(amount)) = (self.operation_type_id, self.amount_type_id) {
            rules.ensure(
                !existing
                    .iter()
                    .any(|link| link.operation_type_id == operation && link.amount_type_id == amount),
                "This operation type / amount type association already exists.",
            );
        }

        rules.finish()
    }
}
