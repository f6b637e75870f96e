//! Structural decoding of node metadata.
//!
//! Only shape is checked here: a mapping of mappings of primitives. Key and
//! value content rules (control characters, lengths) belong to the node
//! constructor.

use samples_core::{
    Error, FieldPath, Metadata, MetadataKind, MetadataValue, MetadataValues, Result,
};
use serde_json::Value;

/// Decode one of a node's metadata fields.
///
/// An absent or null field is empty metadata. Keys are visited in wire
/// order, so the reported violation is the first one in the request.
pub(crate) fn metadata_from_value(
    value: Option<&Value>,
    kind: MetadataKind,
    index: usize,
    path: FieldPath,
) -> Result<Metadata> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Ok(Metadata::new());
    };
    let fail = |problem: String, at: FieldPath| {
        Error::illegal_parameter_at(
            format!("Node at index {}'s {} entry {}", index, kind.label(), problem),
            at,
        )
    };
    let outer = value
        .as_object()
        .ok_or_else(|| fail("must be a mapping".to_string(), path.clone()))?;

    let mut meta = Metadata::new();
    for (key, inner) in outer {
        let key_path = path.clone().key(key.as_str());
        let inner = inner.as_object().ok_or_else(|| {
            fail(
                format!("does not have a dict as a value at key {}", key),
                key_path.clone(),
            )
        })?;
        let mut values = MetadataValues::new();
        for (vkey, v) in inner {
            let value = MetadataValue::from_json(v).ok_or_else(|| {
                fail(
                    format!(
                        "does not have a primitive type as the value at {}/{}",
                        key, vkey
                    ),
                    key_path.clone().key(vkey.as_str()),
                )
            })?;
            values.insert(vkey.clone(), value);
        }
        meta.insert(key.clone(), values);
    }
    Ok(meta)
}
