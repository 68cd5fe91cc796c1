//! `cashdesk-auth` — pure authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it turns a
//! caller-supplied grant set plus a declarative requirement into an
//! authorized/unauthorized verdict, and nothing else. Guard components and
//! permission-gated controls in the UI layer consume the verdict; they own
//! the presentation policy (block, hide, or disable).

pub mod claims;
pub mod evaluate;
pub mod grants;
pub mod permissions;
pub mod principal;
pub mod requirement;
pub mod roles;

pub use claims::{SessionClaims, TokenValidationError, validate_claims};
pub use evaluate::is_authorized;
pub use grants::GrantSet;
pub use permissions::Permission;
pub use principal::PrincipalId;
pub use requirement::Requirement;
pub use roles::Role;
