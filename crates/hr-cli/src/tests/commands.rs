use crate::Cli;

use hr_auth::{Role, RouteAccess, RouteTable};

use clap::Parser;

fn route_of(args: &[&str]) -> String {
    let mut argv = vec!["hr"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap().command.route()
}

fn access_of(args: &[&str]) -> RouteAccess {
    let table = RouteTable::console();
    let route = route_of(args);
    table.resolve(&route).route.access.clone()
}

#[test]
fn given_auth_commands_when_routed_then_public() {
    assert_eq!(access_of(&["login", "--email", "a@b.c", "--password", "x"]), RouteAccess::Public);
    assert_eq!(
        access_of(&["signup", "--username", "a", "--email", "a@b.c", "--password", "x"]),
        RouteAccess::Public
    );
    assert_eq!(access_of(&["logout"]), RouteAccess::Public);
}

#[test]
fn given_self_service_commands_when_routed_then_any_authenticated_role() {
    for args in [
        &["whoami"][..],
        &["dashboard"],
        &["attendance", "check-in"],
        &["attendance", "history"],
        &["leave", "mine"],
        &["leave", "apply", "--start", "2026-10-20", "--end", "2026-10-21", "--type", "Sick"],
    ] {
        assert_eq!(access_of(args), RouteAccess::authenticated(), "{args:?}");
    }
}

#[test]
fn given_staff_commands_when_routed_then_admin_and_hr() {
    let staff = RouteAccess::roles(&[Role::Admin, Role::Hr]);

    for args in [
        &["employee", "list"][..],
        &["employee", "get", "7"],
        &["employee", "update", "7", "--city", "Oslo"],
        &["department", "list"],
        &["department", "get", "3"],
        &["attendance", "history", "--employee-id", "7"],
        &["attendance", "check-in", "--employee-id", "99"],
        &["attendance", "check-out", "--employee-id", "99"],
        &["attendance", "on-date", "2026-10-15"],
        &["leave", "approve", "12"],
        &["leave", "pending"],
    ] {
        assert_eq!(access_of(args), staff, "{args:?}");
    }
}

#[test]
fn given_department_writes_when_routed_then_admin_only() {
    let admin = RouteAccess::roles(&[Role::Admin]);

    assert_eq!(access_of(&["department", "create", "--name", "Finance"]), admin);
    assert_eq!(access_of(&["department", "update", "3", "--name", "Ops"]), admin);
    assert_eq!(access_of(&["department", "delete", "3"]), admin);
}

#[test]
fn given_employee_get_when_routed_then_personnel_path() {
    assert_eq!(route_of(&["employee", "get", "7"]), "/personnel/7");
    assert_eq!(route_of(&["department", "update", "3"]), "/departments/3/edit");
}

#[test]
fn given_bad_date_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["hr", "attendance", "on-date", "15/10/2026"]);

    assert!(result.is_err());
}

#[test]
fn given_unknown_employee_status_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["hr", "employee", "create", "--name", "A", "--status", "GONE"]);

    assert!(result.is_err());
}
