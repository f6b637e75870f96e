//! Configured construction limits

use crate::test_utils::*;
use sampleservice::{create_sample_params_with_limits, Limits, LimitsError};
use serde_json::json;

const CONFIG: &str = r#"
[limits]
max_nodes = 2
max_node_id_length = 5
"#;

#[test]
fn test_limits_from_toml() {
    let limits = Limits::from_toml_str(CONFIG).unwrap();
    assert_eq!(limits.max_nodes, 2);
    assert_eq!(limits.max_node_id_length, 5);
    assert_eq!(limits.max_name_length, Limits::DEFAULT_MAX_NAME_LENGTH);
}

#[test]
fn test_limits_reject_zero() {
    let err = Limits::from_toml_str("[limits]\nmax_nodes = 0\n").unwrap_err();
    assert!(matches!(err, LimitsError::Zero { field: "max_nodes" }));
}

#[test]
fn test_configured_limits_apply_to_requests() {
    let limits = Limits::from_toml_str(CONFIG).unwrap();

    let too_many = json!({"sample": {"node_tree": [
        {"id": "a", "type": "BioReplicate"},
        {"id": "b", "type": "TechReplicate", "parent": "a"},
        {"id": "c", "type": "TechReplicate", "parent": "a"}
    ]}});
    assert_illegal(
        &create_sample_params_with_limits(Some(&too_many), &limits).unwrap_err(),
        "At most 2 nodes are allowed per sample",
    );

    let long_id = json!({"sample": {"node_tree": [{"id": "abcdef", "type": "BioReplicate"}]}});
    assert_illegal(
        &create_sample_params_with_limits(Some(&long_id), &limits).unwrap_err(),
        "Error for node at index 0: subsample_id exceeds maximum length of 5",
    );
}
