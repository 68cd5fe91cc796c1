use serde::{Deserialize, Serialize};

use crate::{Permission, Role, SessionClaims};

/// The roles and permissions held by a principal at evaluation time.
///
/// This is an authorization boundary object: the caller resolves it fresh
/// (from session claims plus whatever policy source maps roles to
/// permissions) and hands it to [`crate::is_authorized`]. Nothing here is
/// cached between evaluations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantSet {
    roles: Vec<Role>,
    permissions: Vec<Permission>,
}

impl GrantSet {
    pub fn new(roles: Vec<Role>, permissions: Vec<Permission>) -> Self {
        Self { roles, permissions }
    }

    /// Build a grant set straight from validated session claims.
    pub fn from_claims(claims: &SessionClaims) -> Self {
        Self {
            roles: claims.roles.clone(),
            permissions: claims.permissions.clone(),
        }
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }

    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }
}
