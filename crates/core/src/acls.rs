//! Sample access control lists.
//!
//! An ACL names an owner plus three role lists. User lists keep the order
//! they were supplied in.

use crate::error::Result;
use crate::strings::check_string;
use std::fmt;

/// A role a user can hold on a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AclRole {
    /// May administer the sample's ACLs
    Admin,
    /// May save new versions
    Write,
    /// May read the sample
    Read,
}

impl AclRole {
    /// Wire field name
    pub fn as_str(&self) -> &'static str {
        match self {
            AclRole::Admin => "admin",
            AclRole::Write => "write",
            AclRole::Read => "read",
        }
    }
}

impl fmt::Display for AclRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ACLs without an owner, as supplied in an update request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleAclOwnerless {
    admin: Vec<String>,
    write: Vec<String>,
    read: Vec<String>,
}

impl SampleAclOwnerless {
    pub fn new(admin: Vec<String>, write: Vec<String>, read: Vec<String>) -> Self {
        SampleAclOwnerless { admin, write, read }
    }

    pub fn admin(&self) -> &[String] {
        &self.admin
    }

    pub fn write(&self) -> &[String] {
        &self.write
    }

    pub fn read(&self) -> &[String] {
        &self.read
    }

    /// Users holding `role`
    pub fn users(&self, role: AclRole) -> &[String] {
        match role {
            AclRole::Admin => &self.admin,
            AclRole::Write => &self.write,
            AclRole::Read => &self.read,
        }
    }

    /// Attach an owner, producing a full ACL.
    pub fn with_owner(self, owner: &str) -> Result<SampleAcl> {
        SampleAcl::new(owner, self.admin, self.write, self.read)
    }
}

/// ACLs of a saved sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleAcl {
    owner: String,
    roles: SampleAclOwnerless,
}

impl SampleAcl {
    /// Create an ACL. The owner is trimmed and must be non-empty.
    pub fn new(
        owner: &str,
        admin: Vec<String>,
        write: Vec<String>,
        read: Vec<String>,
    ) -> Result<Self> {
        let owner = check_string(owner, "owner", None)?;
        Ok(SampleAcl {
            owner,
            roles: SampleAclOwnerless::new(admin, write, read),
        })
    }

    /// ACL with an owner and empty role lists
    pub fn owner_only(owner: &str) -> Result<Self> {
        Self::new(owner, Vec::new(), Vec::new(), Vec::new())
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn admin(&self) -> &[String] {
        self.roles.admin()
    }

    pub fn write(&self) -> &[String] {
        self.roles.write()
    }

    pub fn read(&self) -> &[String] {
        self.roles.read()
    }

    /// Users holding `role`
    pub fn users(&self, role: AclRole) -> &[String] {
        self.roles.users(role)
    }
}
