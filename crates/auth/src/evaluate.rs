//! The authorization verdict.

use std::collections::HashSet;

use crate::{GrantSet, Requirement};

/// Evaluate a requirement against a grant set.
///
/// - No IO
/// - No panics
/// - No state (pure predicate over caller-supplied data)
///
/// Each sub-check present on the requirement must pass; absent sub-checks are
/// skipped. Policy edge cases, preserved deliberately:
/// `all_of: []` is vacuously satisfied, `any_of: []` is never satisfied.
pub fn is_authorized(grants: &GrantSet, requirement: &Requirement) -> bool {
    let held: HashSet<&str> = grants.permissions().iter().map(|p| p.as_str()).collect();

    if let Some(role) = &requirement.role {
        if !grants.has_role(role) {
            return false;
        }
    }

    if let Some(permission) = &requirement.permission {
        if !held.contains(permission.as_str()) {
            return false;
        }
    }

    if let Some(all_of) = &requirement.all_of {
        if !all_of.iter().all(|p| held.contains(p.as_str())) {
            return false;
        }
    }

    if let Some(any_of) = &requirement.any_of {
        if !any_of.iter().any(|p| held.contains(p.as_str())) {
            return false;
        }
    }

    true
}
