//! Shared fixture model: a cluster record exercising every supported
//! field kind, with nesting three levels deep.
#![allow(dead_code)]

use std::collections::BTreeMap;

use tessera_marshal::{FieldDescriptor, Record};
use tessera_state::AttributeStore;
use tessera_value::DynamicValue;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cluster {
    pub name: String,
    pub weight: f64,
    pub replicas: i64,
    pub enabled: bool,
    pub regions: Option<Vec<String>>,
    /// Fed from a set-like source container; surfaces as a list.
    pub zones: Option<Vec<String>>,
    pub ports: Option<Vec<i64>>,
    pub port_weights: Option<Vec<f64>>,
    pub feature_flags: Option<Vec<bool>>,
    pub node_pools: Vec<NodePool>,
    /// Fed from a set of nested blocks.
    pub taints: Vec<Taint>,
    pub labels: BTreeMap<String, String>,
    /// Computed: published by Encode, never populated by Decode.
    pub endpoint: String,
}

impl Record for Cluster {
    fn fields() -> Vec<FieldDescriptor<Cluster>> {
        vec![
            FieldDescriptor::string("name", |c| c.name.clone(), |c, v| c.name = v),
            FieldDescriptor::float("weight", |c| c.weight, |c, v| c.weight = v),
            FieldDescriptor::int("replicas", |c| c.replicas, |c, v| c.replicas = v),
            FieldDescriptor::boolean("enabled", |c| c.enabled, |c, v| c.enabled = v),
            FieldDescriptor::string_list("regions", |c| c.regions.clone(), |c, v| c.regions = v),
            FieldDescriptor::string_list("zones", |c| c.zones.clone(), |c, v| c.zones = v),
            FieldDescriptor::int_list("ports", |c| c.ports.clone(), |c, v| c.ports = v),
            FieldDescriptor::float_list(
                "port_weights",
                |c| c.port_weights.clone(),
                |c, v| c.port_weights = v,
            ),
            FieldDescriptor::bool_list(
                "feature_flags",
                |c| c.feature_flags.clone(),
                |c, v| c.feature_flags = v,
            ),
            FieldDescriptor::nested_list(
                "node_pool",
                |c| c.node_pools.as_slice(),
                |c| &mut c.node_pools,
            ),
            FieldDescriptor::nested_list("taint", |c| c.taints.as_slice(), |c| &mut c.taints),
            FieldDescriptor::string_map("labels", |c| c.labels.clone(), |c, v| c.labels = v),
            FieldDescriptor::string("endpoint", |c: &Cluster| c.endpoint.clone(), |c, v| c.endpoint = v)
                .computed(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePool {
    pub name: String,
    pub disks: Vec<Disk>,
}

impl Record for NodePool {
    fn fields() -> Vec<FieldDescriptor<NodePool>> {
        vec![
            FieldDescriptor::string("name", |p| p.name.clone(), |p, v| p.name = v),
            FieldDescriptor::nested_list("disk", |p| p.disks.as_slice(), |p| &mut p.disks),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Disk {
    pub name: String,
    pub mounts: Vec<Mount>,
    /// Fed from a nested set of blocks.
    pub filesystems: Vec<Filesystem>,
}

impl Record for Disk {
    fn fields() -> Vec<FieldDescriptor<Disk>> {
        vec![
            FieldDescriptor::string("name", |d| d.name.clone(), |d, v| d.name = v),
            FieldDescriptor::nested_list("mount", |d| d.mounts.as_slice(), |d| &mut d.mounts),
            FieldDescriptor::nested_list(
                "filesystem",
                |d| d.filesystems.as_slice(),
                |d| &mut d.filesystems,
            ),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mount {
    pub path: String,
    pub read_only: bool,
}

impl Record for Mount {
    fn fields() -> Vec<FieldDescriptor<Mount>> {
        vec![
            FieldDescriptor::string("path", |m| m.path.clone(), |m, v| m.path = v),
            FieldDescriptor::boolean("read_only", |m| m.read_only, |m, v| m.read_only = v),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filesystem {
    pub name: String,
}

impl Record for Filesystem {
    fn fields() -> Vec<FieldDescriptor<Filesystem>> {
        vec![FieldDescriptor::string(
            "name",
            |f| f.name.clone(),
            |f, v| f.name = v,
        )]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Taint {
    pub key: String,
}

impl Record for Taint {
    fn fields() -> Vec<FieldDescriptor<Taint>> {
        vec![FieldDescriptor::string(
            "key",
            |t| t.key.clone(),
            |t, v| t.key = v,
        )]
    }
}

/// Convert a JSON object literal into a dynamic value.
pub fn dynamic(fixture: serde_json::Value) -> DynamicValue {
    DynamicValue::from_json(&fixture).expect("fixture has no dynamic counterpart")
}

/// Seed an open attribute store from a JSON object literal.
pub fn store(fixture: serde_json::Value) -> AttributeStore {
    let DynamicValue::Map(entries) = dynamic(fixture) else {
        panic!("fixture must be a JSON object");
    };
    AttributeStore::from_entries(entries)
}
