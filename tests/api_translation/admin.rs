//! Administration permission checks

use crate::test_utils::*;
use sampleservice::{check_admin, AdminPermission, Error, ErrorType};

const FULL: AdminPermission = AdminPermission::Full;
const READ: AdminPermission = AdminPermission::Read;
const NONE: AdminPermission = AdminPermission::None;

fn granted(
    perm: AdminPermission,
    required: AdminPermission,
    user: &str,
    method: &str,
    as_user: Option<&str>,
    expected_log: &str,
) {
    init_tracing();
    let lookup = RecordingLookup::new(perm, user);
    let mut logs: Vec<String> = Vec::new();

    let res = check_admin(
        &lookup,
        "thisisatoken",
        required,
        method,
        |l| logs.push(l.to_string()),
        as_user,
        false,
    );

    assert_eq!(res, Ok(true));
    assert_eq!(*lookup.calls.borrow(), vec!["thisisatoken".to_string()]);
    assert_eq!(logs, vec![expected_log.to_string()]);
}

fn denied(perm: AdminPermission, required: AdminPermission) {
    init_tracing();
    let lookup = RecordingLookup::new(perm, "user1");
    let mut logs: Vec<String> = Vec::new();
    let err = check_admin(&lookup, "t", required, "m", |l| logs.push(l.to_string()), None, false)
        .unwrap_err();

    let msg = "User user1 does not have the necessary administration privileges to run method m";
    assert_eq!(err, Error::unauthorized(msg));
    assert_eq!(err.code(), Some(20000));
    assert_eq!(logs, vec![msg.to_string()]);
}

fn contract(
    token: &str,
    required: AdminPermission,
    method: &str,
    as_user: Option<&str>,
    expected: &str,
) {
    let lookup = RecordingLookup::new(FULL, "u");
    let err = check_admin(&lookup, token, required, method, |_| {}, as_user, false).unwrap_err();
    assert_error(&err, ErrorType::InvalidArgument, expected);
    assert!(lookup.calls.borrow().is_empty());
}

#[test]
fn test_check_admin() {
    granted(
        FULL,
        FULL,
        "user1",
        "somemethod",
        None,
        "User user1 is running method somemethod with administration permission FULL",
    );
    granted(
        FULL,
        FULL,
        "user1",
        "somemethod",
        Some("otheruser"),
        "User user1 is running method somemethod with administration permission FULL as user otheruser",
    );
    granted(
        FULL,
        READ,
        "someuser",
        "a_method",
        None,
        "User someuser is running method a_method with administration permission FULL",
    );
    granted(
        READ,
        READ,
        "user2",
        "m",
        None,
        "User user2 is running method m with administration permission READ",
    );
}

#[test]
fn test_check_admin_skip() {
    let lookup = RecordingLookup::new(FULL, "u");
    let mut logs: Vec<String> = Vec::new();

    let res = check_admin(
        &lookup,
        "thisisatoken",
        FULL,
        "m",
        |l| logs.push(l.to_string()),
        None,
        true,
    );

    assert_eq!(res, Ok(false));
    assert!(lookup.calls.borrow().is_empty());
    assert!(logs.is_empty());
}

#[test]
fn test_check_admin_fail_bad_args() {
    contract("", FULL, "m", None, "token cannot be a value that evaluates to false");
    contract("t", FULL, "", None, "method cannot be a value that evaluates to false");
}

#[test]
fn test_check_admin_fail_none_perm() {
    contract(
        "t",
        NONE,
        "m",
        None,
        "what are you doing calling this method with no permission requirement? \
         That totally makes no sense. Get a brain moran",
    );
}

#[test]
fn test_check_admin_fail_read_with_impersonate() {
    contract(
        "t",
        READ,
        "m",
        Some("user"),
        "as_user is supplied, but permission is not FULL",
    );
}

#[test]
fn test_check_admin_fail_no_admin_perms() {
    denied(READ, FULL);
    denied(NONE, FULL);
    denied(NONE, READ);
}
