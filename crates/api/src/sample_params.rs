//! Decoding of sample creation requests.
//!
//! The request shape is
//!
//! ```text
//! {
//!   "sample": {
//!     "id": <optional UUID string>,
//!     "name": <optional string>,
//!     "node_tree": [ {"id", "type", "parent", "meta_controlled", "meta_user"}, ... ]
//!   },
//!   "prior_version": <optional integer>
//! }
//! ```
//!
//! Decoding stops at the first violation. Any `version` or `save_date` inside
//! `sample` is ignored; those are assigned by the service.

use crate::ids;
use crate::metadata::metadata_from_value;
use crate::wire::{self, Object};
use samples_core::{
    Error, FieldPath, Limits, MetadataKind, Result, Sample, SampleNode, SubSampleType,
};
use serde_json::Value;
use uuid::Uuid;

/// Decode a sample creation request using the default [`Limits`].
///
/// Returns the sample, the id it should be saved under if one was given, and
/// the version the caller expects to be the current one, if given.
pub fn create_sample_params(params: Option<&Value>) -> Result<(Sample, Option<Uuid>, Option<i64>)> {
    create_sample_params_with_limits(params, &Limits::default())
}

/// Decode a sample creation request.
pub fn create_sample_params_with_limits(
    params: Option<&Value>,
    limits: &Limits,
) -> Result<(Sample, Option<Uuid>, Option<i64>)> {
    let params = wire::require_params(params, "params")?;
    let sample_path = FieldPath::root().key("sample");
    let sample = match wire::field(params, "sample") {
        Some(Value::Object(s)) => s,
        _ => {
            return Err(Error::illegal_parameter_at(
                "params must contain sample key that maps to a structure",
                sample_path,
            ))
        }
    };
    let tree_path = sample_path.clone().key("node_tree");
    let tree = match wire::field(sample, "node_tree") {
        Some(Value::Array(tree)) => tree,
        _ => {
            return Err(Error::illegal_parameter_at(
                "sample node tree must be present and a list",
                tree_path,
            ))
        }
    };
    let name = match wire::field(sample, "name") {
        None => None,
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => {
            return Err(Error::illegal_parameter_at(
                "sample name must be omitted or a string",
                sample_path.key("name"),
            ))
        }
    };

    let nodes = tree
        .iter()
        .enumerate()
        .map(|(i, n)| node_from_value(i, n, tree_path.clone().index(i), limits))
        .collect::<Result<Vec<_>>>()?;

    let id = ids::id_from_object(Some(sample), false, sample_path.clone())?;
    let prior_version = prior_version(params)?;
    let sample = Sample::with_limits(nodes, name, limits).map_err(|e| e.at(sample_path))?;

    tracing::debug!(
        target: "samples::api",
        nodes = sample.nodes().len(),
        id = ?id,
        prior_version = ?prior_version,
        "decoded sample creation request"
    );
    Ok((sample, id, prior_version))
}

fn prior_version(params: &Object) -> Result<Option<i64>> {
    match wire::field(params, "prior_version") {
        None => Ok(None),
        Some(v) => v.as_i64().map(Some).ok_or_else(|| {
            Error::illegal_parameter_at(
                "prior_version must be an integer if supplied",
                FieldPath::root().key("prior_version"),
            )
        }),
    }
}

fn node_from_value(
    index: usize,
    value: &Value,
    path: FieldPath,
    limits: &Limits,
) -> Result<SampleNode> {
    let node = value.as_object().ok_or_else(|| {
        Error::illegal_parameter_at(
            format!("Node at index {} is not a structure", index),
            path.clone(),
        )
    })?;
    let id = match wire::field(node, "id") {
        Some(Value::String(id)) => id.as_str(),
        _ => {
            return Err(Error::illegal_parameter_at(
                format!(
                    "Node at index {} must have an id key that maps to a string",
                    index
                ),
                path.key("id"),
            ))
        }
    };
    let raw_type = wire::field(node, "type");
    let node_type = raw_type
        .and_then(Value::as_str)
        .and_then(|t| t.parse::<SubSampleType>().ok())
        .ok_or_else(|| {
            Error::illegal_parameter_at(
                format!(
                    "Node at index {} has an invalid sample type: {}",
                    index,
                    wire::render(raw_type)
                ),
                path.clone().key("type"),
            )
        })?;
    let parent = match wire::field(node, "parent") {
        Some(Value::String(p)) => Some(p.as_str()),
        None if node_type.is_root() => None,
        _ => {
            return Err(Error::illegal_parameter_at(
                format!(
                    "Node at index {} has a parent entry that is not a string",
                    index
                ),
                path.key("parent"),
            ))
        }
    };
    let meta = |kind: MetadataKind| {
        metadata_from_value(
            node.get(kind.field()),
            kind,
            index,
            path.clone().key(kind.field()),
        )
    };
    let controlled = meta(MetadataKind::Controlled)?;
    let user = meta(MetadataKind::User)?;

    SampleNode::with_limits(id, node_type, parent, controlled, user, limits)
        .map_err(|e| e.with_context(&format!("Error for node at index {}: ", index)).at(path))
}
