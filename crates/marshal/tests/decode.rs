//! Decode suite: populating typed records from a state map.
//!
//! Covers scalar coercion, primitive lists, set-sourced lists, nested
//! record lists to depth three, map fidelity, computed-field skipping,
//! malformed-element tolerance, and both mismatch policies.

mod common;

use std::collections::BTreeMap;

use common::{store, Cluster, Disk, Filesystem, Mount, NodePool, Taint};
use serde_json::json;
use tessera_marshal::{decode, Decoder, MarshalError};

#[test]
fn decodes_top_level_name() {
    let source = store(json!({ "name": "bingo bango" }));
    let mut cluster = Cluster::default();
    decode(&mut cluster, &source).unwrap();
    assert_eq!(
        cluster,
        Cluster {
            name: "bingo bango".to_string(),
            ..Cluster::default()
        }
    );
}

#[test]
fn decodes_top_level_scalars() {
    let source = store(json!({
        "name": "bingo bango",
        "weight": 123.4,
        "replicas": 123,
        "enabled": false,
    }));
    let mut cluster = Cluster::default();
    decode(&mut cluster, &source).unwrap();
    assert_eq!(
        cluster,
        Cluster {
            name: "bingo bango".to_string(),
            weight: 123.4,
            replicas: 123,
            enabled: false,
            ..Cluster::default()
        }
    );
}

#[test]
fn decodes_nested_list() {
    let source = store(json!({
        "node_pool": [{ "name": "first" }],
    }));
    let mut cluster = Cluster::default();
    decode(&mut cluster, &source).unwrap();
    assert_eq!(
        cluster.node_pools,
        vec![NodePool {
            name: "first".to_string(),
            disks: vec![],
        }]
    );
}

#[test]
fn decodes_list_within_list() {
    let source = store(json!({
        "node_pool": [{
            "name": "first",
            "disk": [{ "name": "get-a-mac" }],
        }],
    }));
    let mut cluster = Cluster::default();
    decode(&mut cluster, &source).unwrap();
    assert_eq!(
        cluster.node_pools,
        vec![NodePool {
            name: "first".to_string(),
            disks: vec![Disk {
                name: "get-a-mac".to_string(),
                ..Disk::default()
            }],
        }]
    );
}

#[test]
fn decodes_everything_at_once() {
    // "zones" and "taint" stand in for set-sourced containers: the
    // accessor boundary extracts sets into lists before the engine sees
    // them, so the fixture shape is identical.
    let source = store(json!({
        "name": "bingo bango",
        "weight": 123.4,
        "replicas": 123,
        "enabled": false,
        "regions": ["region1", "region2", "region3"],
        "zones": ["zone1", "zone2", "zone3"],
        "node_pool": [{
            "name": "first",
            "disk": [{ "name": "get-a-mac" }],
        }],
        "taint": [{ "key": "dedicated" }],
    }));
    let mut cluster = Cluster::default();
    decode(&mut cluster, &source).unwrap();
    assert_eq!(
        cluster,
        Cluster {
            name: "bingo bango".to_string(),
            weight: 123.4,
            replicas: 123,
            enabled: false,
            regions: Some(vec![
                "region1".to_string(),
                "region2".to_string(),
                "region3".to_string(),
            ]),
            zones: Some(vec![
                "zone1".to_string(),
                "zone2".to_string(),
                "zone3".to_string(),
            ]),
            node_pools: vec![NodePool {
                name: "first".to_string(),
                disks: vec![Disk {
                    name: "get-a-mac".to_string(),
                    ..Disk::default()
                }],
            }],
            taints: vec![Taint {
                key: "dedicated".to_string(),
            }],
            ..Cluster::default()
        }
    );
}

#[test]
fn decodes_deep_nests() {
    let source = store(json!({
        "node_pool": [
            {
                "name": "first",
                "disk": [{
                    "name": "get-a-mac",
                    "mount": [{ "path": "/data", "read_only": true }],
                    "filesystem": [{ "name": "ext4" }],
                }],
            },
            {
                "name": "second",
                "disk": [{
                    "name": "get-a-mac2",
                    "mount": [{ "path": "/data2", "read_only": true }],
                    "filesystem": [{ "name": "xfs" }],
                }],
            },
        ],
    }));
    let mut cluster = Cluster::default();
    decode(&mut cluster, &source).unwrap();
    assert_eq!(
        cluster.node_pools,
        vec![
            NodePool {
                name: "first".to_string(),
                disks: vec![Disk {
                    name: "get-a-mac".to_string(),
                    mounts: vec![Mount {
                        path: "/data".to_string(),
                        read_only: true,
                    }],
                    filesystems: vec![Filesystem {
                        name: "ext4".to_string(),
                    }],
                }],
            },
            NodePool {
                name: "second".to_string(),
                disks: vec![Disk {
                    name: "get-a-mac2".to_string(),
                    mounts: vec![Mount {
                        path: "/data2".to_string(),
                        read_only: true,
                    }],
                    filesystems: vec![Filesystem {
                        name: "xfs".to_string(),
                    }],
                }],
            },
        ]
    );
}

#[test]
fn decodes_primitive_lists() {
    let source = store(json!({
        "ports": [1, 2, 3],
        "port_weights": [1.1, 2.2, 3.3],
        "feature_flags": [true, false, true],
    }));
    let mut cluster = Cluster::default();
    decode(&mut cluster, &source).unwrap();
    assert_eq!(cluster.ports, Some(vec![1, 2, 3]));
    assert_eq!(cluster.port_weights, Some(vec![1.1, 2.2, 3.3]));
    assert_eq!(cluster.feature_flags, Some(vec![true, false, true]));
}

#[test]
fn decodes_map_exactly() {
    let source = store(json!({
        "labels": { "bingo": "bango" },
    }));
    let mut cluster = Cluster::default();
    decode(&mut cluster, &source).unwrap();
    assert_eq!(
        cluster.labels,
        BTreeMap::from([("bingo".to_string(), "bango".to_string())])
    );
}

#[test]
fn empty_map_leaves_field_untouched() {
    let source = store(json!({ "labels": {} }));
    let mut cluster = Cluster::default();
    decode(&mut cluster, &source).unwrap();
    assert!(cluster.labels.is_empty());
}

#[test]
fn computed_field_is_never_populated() {
    let source = store(json!({
        "name": "bingo bango",
        "endpoint": "https://should-be-ignored.example.com",
    }));
    let mut cluster = Cluster::default();
    decode(&mut cluster, &source).unwrap();
    assert_eq!(cluster.name, "bingo bango");
    assert_eq!(cluster.endpoint, "");
}

#[test]
fn malformed_list_elements_are_dropped() {
    // Output length is strictly less than input length by the count of
    // malformed elements; well-formed elements keep their order.
    let source = store(json!({
        "node_pool": [
            { "name": "first" },
            "not a map",
            7,
            { "name": "second" },
        ],
    }));
    let mut cluster = Cluster::default();
    decode(&mut cluster, &source).unwrap();
    let names: Vec<&str> = cluster.node_pools.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn empty_list_elements_are_dropped() {
    let source = store(json!({
        "node_pool": [{}, { "name": "only" }],
    }));
    let mut cluster = Cluster::default();
    decode(&mut cluster, &source).unwrap();
    assert_eq!(cluster.node_pools.len(), 1);
    assert_eq!(cluster.node_pools[0].name, "only");
}

#[test]
fn permissive_mismatch_leaves_prior_value() {
    let source = store(json!({
        "name": "bingo bango",
        "replicas": "twelve",
    }));
    let mut cluster = Cluster::default();
    decode(&mut cluster, &source).unwrap();
    assert_eq!(cluster.name, "bingo bango");
    assert_eq!(cluster.replicas, 0);
}

#[test]
fn strict_mismatch_names_the_wire_key() {
    let source = store(json!({ "replicas": "twelve" }));
    let mut cluster = Cluster::default();
    let err = Decoder::strict().decode(&mut cluster, &source).unwrap_err();
    assert_eq!(
        err,
        MarshalError::KindMismatch {
            wire_key: "replicas".to_string(),
            expected: "int",
            found: "string",
        }
    );
}

#[test]
fn strict_mismatch_inside_scalar_list() {
    let source = store(json!({ "ports": [1, "two", 3] }));
    let mut cluster = Cluster::default();
    let err = Decoder::strict().decode(&mut cluster, &source).unwrap_err();
    assert_eq!(
        err,
        MarshalError::KindMismatch {
            wire_key: "ports".to_string(),
            expected: "list of ints",
            found: "string",
        }
    );
    // Permissively the same input leaves the whole field unchanged.
    let mut cluster = Cluster::default();
    decode(&mut cluster, &source).unwrap();
    assert_eq!(cluster.ports, None);
}

#[test]
fn strict_malformed_element_names_key_and_index() {
    let source = store(json!({
        "node_pool": [{ "name": "first" }, false],
    }));
    let mut cluster = Cluster::default();
    let err = Decoder::strict().decode(&mut cluster, &source).unwrap_err();
    assert_eq!(
        err,
        MarshalError::MalformedListElement {
            wire_key: "node_pool".to_string(),
            index: 1,
            found: "bool",
        }
    );
}
