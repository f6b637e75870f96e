//! Saved sample encoding

use chrono::{TimeZone, Utc};
use sampleservice::{
    create_sample_params, sample_to_dict, Metadata, MetadataValue, MetadataValues, Sample,
    SampleNode, SavedSample, SubSampleType,
};
use serde_json::json;
use uuid::Uuid;

fn id() -> Uuid {
    Uuid::parse_str("f5bd78c3-823e-40b2-9f93-20e78680e41e").unwrap()
}

fn meta(entries: Vec<(&str, Vec<(&str, MetadataValue)>)>) -> Metadata {
    entries
        .into_iter()
        .map(|(k, inner)| {
            let inner: MetadataValues = inner
                .into_iter()
                .map(|(vk, v)| (vk.to_string(), v))
                .collect();
            (k.to_string(), inner)
        })
        .collect()
}

#[test]
fn test_sample_to_dict_minimal() {
    let saved = SavedSample::new(
        id(),
        "user2",
        Sample::new(vec![SampleNode::root("foo").unwrap()], None).unwrap(),
        Utc.timestamp_opt(87, 897_100_000).unwrap(),
        None,
    )
    .unwrap();

    let s = sample_to_dict(&saved);
    assert_eq!(
        s,
        json!({
            "node_tree": [{
                "id": "foo",
                "type": "BioReplicate",
                "meta_controlled": {},
                "meta_user": {},
                "parent": null
            }],
            "id": "f5bd78c3-823e-40b2-9f93-20e78680e41e",
            "user": "user2",
            "save_date": 87897,
            "name": null,
            "version": null
        })
    );
    assert!(serde_json::to_string(&s).is_ok());
}

#[test]
fn test_sample_to_dict_maximal() {
    let saved = SavedSample::new(
        id(),
        "user3",
        Sample::new(
            vec![
                SampleNode::root("foo").unwrap(),
                SampleNode::new(
                    "bar",
                    SubSampleType::TechnicalReplicate,
                    Some("foo"),
                    meta(vec![(
                        "a",
                        vec![("b", MetadataValue::from("c")), ("m", MetadataValue::from(6.7))],
                    )]),
                    meta(vec![
                        ("d", vec![("e", MetadataValue::from(true))]),
                        ("g", vec![("h", MetadataValue::from(1))]),
                    ]),
                )
                .unwrap(),
            ],
            Some("myname"),
        )
        .unwrap(),
        Utc.timestamp_opt(87, 897_100_000).unwrap(),
        Some(23),
    )
    .unwrap();

    assert_eq!(
        sample_to_dict(&saved),
        json!({
            "node_tree": [
                {"id": "foo",
                 "type": "BioReplicate",
                 "meta_controlled": {},
                 "meta_user": {},
                 "parent": null},
                {"id": "bar",
                 "type": "TechReplicate",
                 "meta_controlled": {"a": {"b": "c", "m": 6.7}},
                 "meta_user": {"d": {"e": true}, "g": {"h": 1}},
                 "parent": "foo"}
            ],
            "id": "f5bd78c3-823e-40b2-9f93-20e78680e41e",
            "user": "user3",
            "save_date": 87897,
            "name": "myname",
            "version": 23
        })
    );
}

#[test]
fn test_decoded_tree_encodes_back_in_order() {
    let params = json!({"sample": {"name": "n", "node_tree": [
        {"id": "root", "type": "BioReplicate", "meta_user": {"x": {"y": "z"}}},
        {"id": "t1", "type": "TechReplicate", "parent": "root"},
        {"id": "s1", "type": "SubSample", "parent": "t1",
         "meta_controlled": {"k": {"v": 1.5, "w": -2}}}
    ]}});
    let (sample, _, _) = create_sample_params(Some(&params)).unwrap();
    let saved = SavedSample::new(id(), "u", sample, Utc.timestamp_opt(1, 0).unwrap(), Some(1))
        .unwrap();
    let out = sample_to_dict(&saved);

    let tree = params["sample"]["node_tree"].as_array().unwrap();
    let encoded = out["node_tree"].as_array().unwrap();
    assert_eq!(encoded.len(), tree.len());
    for (sent, got) in tree.iter().zip(encoded) {
        assert_eq!(got["id"], sent["id"]);
        assert_eq!(got["type"], sent["type"]);
        assert_eq!(got["parent"], sent.get("parent").cloned().unwrap_or(json!(null)));
        assert_eq!(
            got["meta_controlled"],
            sent.get("meta_controlled").cloned().unwrap_or(json!({}))
        );
        assert_eq!(
            got["meta_user"],
            sent.get("meta_user").cloned().unwrap_or(json!({}))
        );
    }
    assert_eq!(out["save_date"], json!(1000));
    assert_eq!(out["version"], json!(1));
}

#[test]
fn test_metadata_keys_keep_wire_order() {
    let params = json!({"sample": {"node_tree": [
        {"id": "root", "type": "BioReplicate",
         "meta_user": {"zeta": {"y": 1, "b": 2}, "alpha": {"k": 1}}}
    ]}});
    let (sample, _, _) = create_sample_params(Some(&params)).unwrap();
    let saved = SavedSample::new(id(), "u", sample, Utc.timestamp_opt(1, 0).unwrap(), None)
        .unwrap();
    let out = sample_to_dict(&saved);
    assert_eq!(
        serde_json::to_string(&out["node_tree"][0]["meta_user"]).unwrap(),
        r#"{"zeta":{"y":1,"b":2},"alpha":{"k":1}}"#
    );
}
