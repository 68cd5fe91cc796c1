use serde::{Deserialize, Serialize};

use crate::{Permission, Role};

/// Declarative authorization requirement evaluated against a grant set.
///
/// A requirement is a conjunction of up to four independent sub-checks; a
/// sub-check that is not set is skipped, never treated as failing. Guards may
/// therefore demand a role AND a single permission AND an all-of list AND an
/// any-of list in one requirement. With no sub-check set, the requirement
/// authorizes unconditionally.
///
/// The sub-checks are modeled as explicit optional fields (rather than a
/// single enum) because guards genuinely combine them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Principal must hold this role.
    pub role: Option<Role>,

    /// Principal must hold this permission.
    pub permission: Option<Permission>,

    /// Principal must hold every one of these permissions.
    /// An empty list is vacuously satisfied.
    pub all_of: Option<Vec<Permission>>,

    /// Principal must hold at least one of these permissions.
    /// An empty list is never satisfied.
    pub any_of: Option<Vec<Permission>>,
}

impl Requirement {
    /// The empty requirement: every grant set satisfies it.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn require_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn require_permission(mut self, permission: Permission) -> Self {
        self.permission = Some(permission);
        self
    }

    pub fn require_all(mut self, permissions: Vec<Permission>) -> Self {
        self.all_of = Some(permissions);
        self
    }

    pub fn require_any(mut self, permissions: Vec<Permission>) -> Self {
        self.any_of = Some(permissions);
        self
    }

    /// True when no sub-check is set.
    pub fn is_empty(&self) -> bool {
        self.role.is_none()
            && self.permission.is_none()
            && self.all_of.is_none()
            && self.any_of.is_none()
    }
}
