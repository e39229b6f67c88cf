//! Integration test to verify the workspace compiles correctly.

#[test]
fn domain_crate_compiles() {
    // Verify domain types are accessible
    let session = warden_domain::Session::empty();
    assert!(!session.is_authenticated());
    let _target = warden_domain::NavTarget::Login;
    let _key = warden_domain::StoreKey::Token;
}

#[test]
fn application_crate_compiles() {
    // Verify application types are accessible
    let _decision = warden_application::decide(false, "/dashboard");
    let _phase = warden_application::SessionPhase::Unauthenticated;
}

#[test]
fn infrastructure_crate_compiles() {
    // Verify infrastructure adapters are accessible
    let _store = warden_infrastructure::NullSessionStore;
    let _slot = warden_infrastructure::BearerSlot::new();
}
