//! ACL encoding and decoding.

use crate::wire::{self, Object};
use samples_core::{AclRole, Error, FieldPath, Result, SampleAcl, SampleAclOwnerless};
use serde_json::{json, Value};

/// Encode ACLs for the wire. User lists keep their order.
pub fn acls_to_dict(acls: &SampleAcl) -> Value {
    json!({
        "owner": acls.owner(),
        "admin": acls.admin(),
        "write": acls.write(),
        "read": acls.read(),
    })
}

/// Decode ACLs from `d["acls"]`.
///
/// Each role list is optional and defaults to empty; a null list counts as
/// absent. Lists are checked in the
/// order read, write, admin.
pub fn acls_from_dict(d: Option<&Value>) -> Result<SampleAclOwnerless> {
    let d = match d {
        Some(Value::Object(d)) if !d.is_empty() => d,
        _ => {
            return Err(Error::invalid_argument(
                "d cannot be a value that evaluates to false",
            ))
        }
    };
    let acls = match d.get("acls") {
        Some(Value::Object(acls)) => acls,
        _ => {
            return Err(Error::illegal_parameter_at(
                "ACLs must be supplied in the acls key and must be a mapping",
                FieldPath::root().key("acls"),
            ))
        }
    };
    let read = user_list(acls, AclRole::Read)?;
    let write = user_list(acls, AclRole::Write)?;
    let admin = user_list(acls, AclRole::Admin)?;
    Ok(SampleAclOwnerless::new(admin, write, read))
}

fn user_list(acls: &Object, role: AclRole) -> Result<Vec<String>> {
    let path = FieldPath::root().key("acls").key(role.as_str());
    match wire::field(acls, role.as_str()) {
        None => Ok(Vec::new()),
        Some(Value::Array(users)) => users
            .iter()
            .enumerate()
            .map(|(i, u)| {
                u.as_str().map(str::to_string).ok_or_else(|| {
                    Error::illegal_parameter_at(
                        format!("Index {} of {} ACL does not contain a string", i, role),
                        path.clone().index(i),
                    )
                })
            })
            .collect(),
        Some(_) => Err(Error::illegal_parameter_at(
            format!("{} ACL must be a list", role),
            path,
        )),
    }
}
