//! Sample id, version, and address extraction.

use crate::wire::{self, Object};
use samples_core::{Error, FieldPath, Result};
use serde_json::Value;
use uuid::Uuid;

/// Read the optional `id` field as a sample UUID.
///
/// An absent structure or absent id is `None` unless `required`, in which
/// case it is a missing parameter.
pub fn get_id_from_object(params: Option<&Value>, required: bool) -> Result<Option<Uuid>> {
    id_from_object(wire::optional_params(params), required, FieldPath::root())
}

pub(crate) fn id_from_object(
    params: Option<&Object>,
    required: bool,
    base: FieldPath,
) -> Result<Option<Uuid>> {
    let Some(raw) = params.and_then(|p| wire::field(p, "id")) else {
        if required {
            return Err(Error::missing_parameter("Sample ID"));
        }
        return Ok(None);
    };
    match raw.as_str().and_then(|s| Uuid::try_parse(s).ok()) {
        Some(id) => Ok(Some(id)),
        None => Err(Error::illegal_parameter_at(
            format!("Sample ID {} must be a UUID string", wire::render(Some(raw))),
            base.key("id"),
        )),
    }
}

/// Read the optional `version` field. Versions are integers greater than 0.
pub fn get_version_from_object(params: Option<&Value>) -> Result<Option<u64>> {
    let params = wire::require_params(params, "params")?;
    let Some(raw) = wire::field(params, "version") else {
        return Ok(None);
    };
    match raw.as_u64() {
        Some(v) if v > 0 => Ok(Some(v)),
        _ => Err(Error::illegal_parameter_at(
            format!("Illegal version argument: {}", wire::render(Some(raw))),
            FieldPath::root().key("version"),
        )),
    }
}

/// Read a sample address: a required id and an optional version.
pub fn get_sample_address_from_object(params: Option<&Value>) -> Result<(Uuid, Option<u64>)> {
    let id = get_id_from_object(params, true)?
        .ok_or_else(|| Error::missing_parameter("Sample ID"))?;
    let version = get_version_from_object(params)?;
    Ok((id, version))
}
