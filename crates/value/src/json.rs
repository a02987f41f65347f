//! Conversions between [`DynamicValue`] and `serde_json::Value`.
//!
//! JSON is the interchange form used by test fixtures and by hosts that
//! persist state maps. The mapping is explicit rather than derived: JSON
//! has one number type where the state map distinguishes ints from
//! floats, and JSON null has no dynamic counterpart.

use std::collections::BTreeMap;

use crate::value::DynamicValue;

impl DynamicValue {
    /// Convert to a `serde_json::Value`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            DynamicValue::String(s) => serde_json::Value::String(s.clone()),
            DynamicValue::Int(i) => serde_json::json!(i),
            DynamicValue::Float(f) => serde_json::json!(f),
            DynamicValue::Bool(b) => serde_json::Value::Bool(*b),
            DynamicValue::List(items) => {
                serde_json::Value::Array(items.iter().map(DynamicValue::to_json).collect())
            }
            DynamicValue::Map(entries) => {
                let mut map = serde_json::Map::new();
                for (k, v) in entries {
                    map.insert(k.clone(), v.to_json());
                }
                serde_json::Value::Object(map)
            }
        }
    }

    /// Convert from a `serde_json::Value`.
    ///
    /// Whole numbers become `Int`, all other numbers `Float`. Returns
    /// `None` for null, for numbers representable neither way, and for
    /// containers holding such a value at any depth.
    pub fn from_json(value: &serde_json::Value) -> Option<DynamicValue> {
        match value {
            serde_json::Value::Null => None,
            serde_json::Value::Bool(b) => Some(DynamicValue::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(DynamicValue::Int(i))
                } else {
                    n.as_f64().map(DynamicValue::Float)
                }
            }
            serde_json::Value::String(s) => Some(DynamicValue::String(s.clone())),
            serde_json::Value::Array(items) => {
                let converted: Option<Vec<DynamicValue>> =
                    items.iter().map(DynamicValue::from_json).collect();
                converted.map(DynamicValue::List)
            }
            serde_json::Value::Object(entries) => {
                let mut map = BTreeMap::new();
                for (k, v) in entries {
                    map.insert(k.clone(), DynamicValue::from_json(v)?);
                }
                Some(DynamicValue::Map(map))
            }
        }
    }
}
