use crate::tests::identity_with_role;
use crate::{
    AuthState, GuardDecision, HOME_PATH, LOGIN_PATH, Navigator, Role, Router, View,
};

#[test]
fn given_no_identity_when_navigate_protected_then_lands_on_login() {
    let router = Router::default();

    let resolution = router.navigate("/view", &AuthState::Unauthenticated);

    assert_eq!(resolution.view, View::Login);
    assert_eq!(resolution.location.path, LOGIN_PATH);
    assert_eq!(resolution.location.from.as_deref(), Some("/view"));
    assert_eq!(router.current_path(), LOGIN_PATH);
}

#[test]
fn given_user_role_when_navigate_admin_only_then_lands_home_not_login() {
    let router = Router::default();
    let state = AuthState::Authenticated(identity_with_role(Role::User));

    let resolution = router.navigate("/departments/new", &state);

    assert_eq!(resolution.decision, GuardDecision::RedirectHome);
    assert_eq!(resolution.view, View::Home);
    assert_eq!(resolution.location.path, HOME_PATH);
}

#[test]
fn given_allowed_role_when_navigate_then_renders_with_params() {
    let router = Router::default();
    let state = AuthState::Authenticated(identity_with_role(Role::Hr));

    let resolution = router.navigate("/employee/77", &state);

    assert_eq!(resolution.view, View::EditEmployee);
    assert_eq!(resolution.param("id"), Some("77"));
    assert_eq!(router.current_path(), "/employee/77");
}

#[test]
fn given_identity_cleared_while_mounted_when_refresh_then_redirects_to_login() {
    let router = Router::default();
    let state = AuthState::Authenticated(identity_with_role(Role::Admin));
    router.navigate("/departments", &state);

    let resolution = router.refresh(&AuthState::Unauthenticated);

    assert_eq!(resolution.view, View::Login);
    assert_eq!(resolution.location.from.as_deref(), Some("/departments"));
}

#[test]
fn given_redirect_to_login_when_return_path_then_original_location() {
    let router = Router::default();
    router.navigate("/leaves", &AuthState::Unauthenticated);

    assert_eq!(router.return_path("/view"), "/leaves");
}

#[test]
fn given_login_page_with_from_when_refresh_unauthenticated_then_return_target_kept() {
    let router = Router::default();
    router.navigate("/attendance", &AuthState::Unauthenticated);

    router.refresh(&AuthState::Unauthenticated);

    assert_eq!(router.return_path("/view"), "/attendance");
}

#[test]
fn given_direct_navigation_when_return_path_then_fallback() {
    let router = Router::default();
    router.navigate("/login", &AuthState::Unauthenticated);

    assert_eq!(router.return_path("/view"), "/view");
}

#[test]
fn given_bootstrapping_when_navigate_then_suspended_in_place() {
    let router = Router::default();

    let resolution = router.navigate("/view", &AuthState::Bootstrapping);

    assert_eq!(resolution.decision, GuardDecision::Suspend);
    assert_eq!(resolution.location.path, "/view");
}

#[test]
fn given_replace_when_current_path_then_updated_without_guard() {
    let router = Router::default();

    router.replace(LOGIN_PATH);

    assert_eq!(router.current_path(), LOGIN_PATH);
    assert_eq!(router.location().from, None);
}

#[test]
fn given_logout_when_navigate_protected_then_redirected_to_login() {
    let router = Router::default();
    let signed_in = AuthState::Authenticated(identity_with_role(Role::Hr));
    assert_eq!(router.navigate("/view", &signed_in).view, View::Overview);

    let resolution = router.navigate("/leaves", &AuthState::Unauthenticated);

    assert_eq!(resolution.view, View::Login);
}
