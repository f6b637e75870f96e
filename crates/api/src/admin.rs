//! Administration permission checks.

use samples_core::{Error, Result};
use samples_security::{AdminPermission, UserLookup};

/// Check that the token's owner holds at least `perm_required`.
///
/// Returns `Ok(false)` without consulting `user_lookup` when `skip_check` is
/// set, and `Ok(true)` when the check passes. Every decision made by the
/// lookup is reported to `log_fn` as well as to tracing. `as_user` names the
/// user an administrator is acting as and requires [`AdminPermission::Full`].
pub fn check_admin<F>(
    user_lookup: &dyn UserLookup,
    token: &str,
    perm_required: AdminPermission,
    method: &str,
    mut log_fn: F,
    as_user: Option<&str>,
    skip_check: bool,
) -> Result<bool>
where
    F: FnMut(&str),
{
    if skip_check {
        return Ok(false);
    }
    if token.is_empty() {
        return Err(Error::invalid_argument(
            "token cannot be a value that evaluates to false",
        ));
    }
    if method.is_empty() {
        return Err(Error::invalid_argument(
            "method cannot be a value that evaluates to false",
        ));
    }
    if perm_required == AdminPermission::None {
        return Err(Error::invalid_argument(
            "what are you doing calling this method with no permission requirement? \
             That totally makes no sense. Get a brain moran",
        ));
    }
    let as_user = as_user.filter(|u| !u.is_empty());
    if as_user.is_some() && perm_required != AdminPermission::Full {
        return Err(Error::invalid_argument(
            "as_user is supplied, but permission is not FULL",
        ));
    }

    let (granted, user) = user_lookup.is_admin(token)?;
    if granted < perm_required {
        let msg = format!(
            "User {} does not have the necessary administration privileges to run method {}",
            user, method
        );
        log_fn(&msg);
        tracing::warn!(
            target: "samples::admin",
            user = %user,
            method,
            granted = %granted,
            required = %perm_required,
            "admin check denied"
        );
        return Err(Error::unauthorized(msg));
    }

    let mut msg = format!(
        "User {} is running method {} with administration permission {}",
        user, method, granted
    );
    if let Some(as_user) = as_user {
        msg.push_str(&format!(" as user {}", as_user));
    }
    log_fn(&msg);
    tracing::info!(
        target: "samples::admin",
        user = %user,
        method,
        granted = %granted,
        as_user = ?as_user,
        "admin check granted"
    );
    Ok(true)
}
