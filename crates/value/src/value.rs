//! The dynamic value union and its kind enumeration.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A loosely-typed attribute value as held by a state map.
///
/// Maps use `BTreeMap` so iteration order is deterministic for
/// reproducible tests. Lists preserve source order exactly; a set-like
/// source container surfaces here as a `List` in whatever order the
/// container yielded its elements.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<DynamicValue>),
    Map(BTreeMap<String, DynamicValue>),
}

impl DynamicValue {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            DynamicValue::String(_) => ValueKind::String,
            DynamicValue::Int(_) => ValueKind::Int,
            DynamicValue::Float(_) => ValueKind::Float,
            DynamicValue::Bool(_) => ValueKind::Bool,
            DynamicValue::List(_) => ValueKind::List,
            DynamicValue::Map(_) => ValueKind::Map,
        }
    }

    /// A human-readable kind name for error messages.
    pub fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            DynamicValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            DynamicValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DynamicValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[DynamicValue]> {
        match self {
            DynamicValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, DynamicValue>> {
        match self {
            DynamicValue::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<&str> for DynamicValue {
    fn from(s: &str) -> Self {
        DynamicValue::String(s.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(s: String) -> Self {
        DynamicValue::String(s)
    }
}

impl From<i64> for DynamicValue {
    fn from(i: i64) -> Self {
        DynamicValue::Int(i)
    }
}

impl From<f64> for DynamicValue {
    fn from(f: f64) -> Self {
        DynamicValue::Float(f)
    }
}

impl From<bool> for DynamicValue {
    fn from(b: bool) -> Self {
        DynamicValue::Bool(b)
    }
}

impl From<Vec<DynamicValue>> for DynamicValue {
    fn from(items: Vec<DynamicValue>) -> Self {
        DynamicValue::List(items)
    }
}

impl From<BTreeMap<String, DynamicValue>> for DynamicValue {
    fn from(entries: BTreeMap<String, DynamicValue>) -> Self {
        DynamicValue::Map(entries)
    }
}

/// The six dynamic value kinds, without payloads.
///
/// Used by attribute schemas to declare what a wire key holds and by
/// error messages to name what was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    Int,
    Float,
    Bool,
    List,
    Map,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::List => "list",
            ValueKind::Map => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
