//! Wire-key schemas and schema merging.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tessera_value::ValueKind;

use crate::error::ResourceError;

/// What one wire key holds and how it participates in the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSchema {
    pub kind: ValueKind,
    pub required: bool,
    pub computed: bool,
}

impl AttributeSchema {
    /// A required argument.
    pub fn required(kind: ValueKind) -> Self {
        AttributeSchema {
            kind,
            required: true,
            computed: false,
        }
    }

    /// An optional argument.
    pub fn optional(kind: ValueKind) -> Self {
        AttributeSchema {
            kind,
            required: false,
            computed: false,
        }
    }

    /// A computed attribute.
    pub fn computed(kind: ValueKind) -> Self {
        AttributeSchema {
            kind,
            required: false,
            computed: true,
        }
    }
}

/// Merge a resource's arguments and attributes into one key→schema map.
///
/// A key appearing on both sides is an error naming the key. Every
/// attribute is forced computed: attributes are published by the
/// resource, never supplied by the caller.
pub fn combine_schema(
    arguments: &BTreeMap<String, AttributeSchema>,
    attributes: &BTreeMap<String, AttributeSchema>,
) -> Result<BTreeMap<String, AttributeSchema>, ResourceError> {
    let mut out = BTreeMap::new();

    for (key, schema) in arguments {
        if out.contains_key(key) {
            return Err(ResourceError::SchemaCollision { key: key.clone() });
        }
        out.insert(key.clone(), *schema);
    }

    for (key, schema) in attributes {
        if out.contains_key(key) {
            return Err(ResourceError::SchemaCollision { key: key.clone() });
        }
        let mut schema = *schema;
        schema.computed = true;
        out.insert(key.clone(), schema);
    }

    Ok(out)
}
