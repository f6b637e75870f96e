//! Administration permissions for the sample service.
//!
//! This crate provides the [`AdminPermission`] tiers and the [`UserLookup`]
//! capability the translation layer consults before running an admin-only
//! method.

#![warn(missing_docs)]

use samples_core::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Administration permission tier.
///
/// Tiers are linearly ordered: `None < Read < Full`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdminPermission {
    /// No administration rights (default).
    #[default]
    None,
    /// May run read-only administration methods.
    Read,
    /// May run every administration method, including impersonation.
    Full,
}

impl AdminPermission {
    /// Upper case tier name as reported in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminPermission::None => "NONE",
            AdminPermission::Read => "READ",
            AdminPermission::Full => "FULL",
        }
    }
}

impl fmt::Display for AdminPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves tokens to users and their administration permission.
///
/// Implementations typically call out to an authentication service. The
/// translation layer only interprets the returned pair; lookup failures are
/// propagated unchanged.
pub trait UserLookup {
    /// Return the permission held by the token's owner and the owner's
    /// user name.
    fn is_admin(&self, token: &str) -> Result<(AdminPermission, String)>;
}

impl<T: UserLookup + ?Sized> UserLookup for std::sync::Arc<T> {
    fn is_admin(&self, token: &str) -> Result<(AdminPermission, String)> {
        (**self).is_admin(token)
    }
}
