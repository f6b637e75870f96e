//! Saved sample encoding.

use crate::time::datetime_to_epochmilliseconds;
use samples_core::{Metadata, SampleNode, SavedSample};
use serde_json::{json, Map, Value};

/// Encode a saved sample for the wire.
///
/// Nodes keep their tree order. Absent name, version, and parent are encoded
/// as null.
pub fn sample_to_dict(sample: &SavedSample) -> Value {
    let node_tree: Vec<Value> = sample.nodes().iter().map(node_to_dict).collect();
    json!({
        "node_tree": node_tree,
        "id": sample.id().hyphenated().to_string(),
        "user": sample.user(),
        "save_date": datetime_to_epochmilliseconds(&sample.save_date()),
        "name": sample.name(),
        "version": sample.version(),
    })
}

fn node_to_dict(node: &SampleNode) -> Value {
    json!({
        "id": node.id(),
        "type": node.node_type().as_str(),
        "parent": node.parent(),
        "meta_controlled": metadata_to_dict(node.controlled_metadata()),
        "meta_user": metadata_to_dict(node.user_metadata()),
    })
}

fn metadata_to_dict(meta: &Metadata) -> Value {
    Value::Object(
        meta.iter()
            .map(|(key, values)| {
                let inner: Map<String, Value> = values
                    .iter()
                    .map(|(vkey, v)| (vkey.clone(), v.to_json()))
                    .collect();
                (key.clone(), Value::Object(inner))
            })
            .collect(),
    )
}
