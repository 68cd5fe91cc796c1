//! Exercises the authorization surface the way the UI guard layer does:
//! session claims come in, a grant set is derived, and guard requirements
//! (route-level and control-level) are evaluated against it.

use chrono::{Duration, Utc};

use cashdesk_auth::{
    GrantSet, Permission, Requirement, Role, SessionClaims, is_authorized, validate_claims,
};

fn cashier_session() -> SessionClaims {
    let now = Utc::now();
    SessionClaims {
        sub: cashdesk_auth::PrincipalId::new(),
        roles: vec![Role::new("caissier")],
        permissions: vec![
            Permission::new("caisse.ouvrir"),
            Permission::new("caisse.cloturer"),
            Permission::new("comptes.consulter"),
        ],
        issued_at: now - Duration::minutes(1),
        expires_at: now + Duration::minutes(30),
    }
}

#[test]
fn route_guard_admits_cashier_to_cash_desk_routes() {
    cashdesk_observability::init();

    let claims = cashier_session();
    validate_claims(&claims, Utc::now()).expect("freshly minted session should be valid");
    let grants = GrantSet::from_claims(&claims);

    // Route guard: role plus any-of, the usual combination on caisse screens.
    let requirement = Requirement::none()
        .require_role(Role::new("caissier"))
        .require_any(vec![
            Permission::new("caisse.ouvrir"),
            Permission::new("caisse.cloturer"),
        ]);

    assert!(is_authorized(&grants, &requirement));
}

#[test]
fn route_guard_blocks_cashier_from_admin_routes() {
    let grants = GrantSet::from_claims(&cashier_session());

    let requirement = Requirement::none()
        .require_role(Role::new("admin"))
        .require_all(vec![
            Permission::new("agents.creer"),
            Permission::new("agents.supprimer"),
        ]);

    assert!(!is_authorized(&grants, &requirement));
}

#[test]
fn control_guard_with_no_requirement_always_shows_the_control() {
    // Buttons without declared requirements render for everyone, including
    // principals with an empty grant set.
    assert!(is_authorized(&GrantSet::default(), &Requirement::none()));
}

#[test]
fn expired_session_never_reaches_evaluation() {
    let now = Utc::now();
    let mut claims = cashier_session();
    claims.issued_at = now - Duration::hours(10);
    claims.expires_at = now - Duration::hours(9);

    assert!(validate_claims(&claims, now).is_err());
}
