//! Encoding: producing a state-map snapshot from a populated record.
//!
//! The encoder walks the same field metadata as the decoder but does
//! not skip computed fields: encoding is how computed attributes get
//! published. The output covers every declared wire key whether or not
//! the field holds its zero value: absence is never inferred from a
//! zero, and a never-populated sequence normalizes to an empty list
//! rather than an omitted key. That asymmetry against the decode side
//! (absent/empty state → zero field) is deliberate.
//!
//! Unlike decoding there is no permissive mode here: a field kind with
//! no conversion rule is a fatal error naming the wire key, because
//! silently producing incorrect output is worse than refusing.

use std::collections::BTreeMap;

use tessera_state::StateWriter;
use tessera_value::DynamicValue;

use crate::diag::{Diagnostics, NullDiagnostics};
use crate::error::MarshalError;
use crate::schema::{FieldAccess, FieldDescriptor, Record};

/// Encode a record into a key→value snapshot with no diagnostics.
pub fn encode<R: Record>(source: &R) -> Result<BTreeMap<String, DynamicValue>, MarshalError> {
    Encoder::new().encode(source)
}

/// Encode a record and publish it through a state writer, one top-level
/// key at a time.
pub fn encode_into<R: Record>(
    source: &R,
    writer: &mut dyn StateWriter,
) -> Result<(), MarshalError> {
    Encoder::new().encode_into(source, writer)
}

/// The encoding half of the engine.
#[derive(Clone, Copy)]
pub struct Encoder<'d> {
    diagnostics: &'d dyn Diagnostics,
}

impl Encoder<'static> {
    pub fn new() -> Self {
        Encoder {
            diagnostics: &NullDiagnostics,
        }
    }
}

impl Default for Encoder<'static> {
    fn default() -> Self {
        Encoder::new()
    }
}

impl<'d> Encoder<'d> {
    /// Attach a diagnostic sink for per-field visibility.
    pub fn with_diagnostics<'a>(self, diagnostics: &'a dyn Diagnostics) -> Encoder<'a> {
        Encoder { diagnostics }
    }

    /// Produce an independent snapshot covering every declared wire key.
    ///
    /// The snapshot holds no references back into `source`; mutating the
    /// record afterwards does not affect it.
    pub fn encode<R: Record>(
        &self,
        source: &R,
    ) -> Result<BTreeMap<String, DynamicValue>, MarshalError> {
        let mut out = BTreeMap::new();
        for field in R::fields() {
            let value = self.convert(source, &field)?;
            self.diagnostics.info(&format!(
                "encoding {:?} as a {}",
                field.wire_key(),
                value.kind_name()
            ));
            out.insert(field.wire_key().to_string(), value);
        }
        Ok(out)
    }

    /// Encode and publish through `writer`. The first failing key aborts
    /// with that key named; earlier writes may already be visible, since
    /// the write sequence is not transactional.
    pub fn encode_into<R: Record>(
        &self,
        source: &R,
        writer: &mut dyn StateWriter,
    ) -> Result<(), MarshalError> {
        let serialized = self.encode(source)?;
        for (key, value) in serialized {
            if let Err(source) = writer.set(&key, value) {
                return Err(MarshalError::StateWrite {
                    wire_key: key,
                    source,
                });
            }
        }
        Ok(())
    }

    /// Convert one field's current value to a dynamic value.
    fn convert<R: Record>(
        &self,
        source: &R,
        field: &FieldDescriptor<R>,
    ) -> Result<DynamicValue, MarshalError> {
        match field.access() {
            FieldAccess::String { get, .. } => Ok(DynamicValue::String(get(source))),
            FieldAccess::Int { get, .. } => Ok(DynamicValue::Int(get(source))),
            FieldAccess::Float { get, .. } => Ok(DynamicValue::Float(get(source))),
            FieldAccess::Bool { get, .. } => Ok(DynamicValue::Bool(get(source))),
            FieldAccess::StringList { get, .. } => {
                Ok(scalar_list(get(source), DynamicValue::String))
            }
            FieldAccess::IntList { get, .. } => Ok(scalar_list(get(source), DynamicValue::Int)),
            FieldAccess::FloatList { get, .. } => {
                Ok(scalar_list(get(source), DynamicValue::Float))
            }
            FieldAccess::BoolList { get, .. } => Ok(scalar_list(get(source), DynamicValue::Bool)),
            FieldAccess::StringMap { get, .. } => Ok(DynamicValue::Map(
                get(source)
                    .into_iter()
                    .map(|(k, v)| (k, DynamicValue::String(v)))
                    .collect(),
            )),
            FieldAccess::NestedList { encode, .. } => encode(source, self),
            FieldAccess::Opaque { .. } => Err(MarshalError::UnsupportedFieldKind {
                wire_key: field.wire_key().to_string(),
            }),
        }
    }

    /// Encode a nested record sequence into an ordered list of element
    /// maps. An empty sequence yields an empty list, never an omitted
    /// key.
    pub(crate) fn encode_nested_list<N: Record>(
        &self,
        items: &[N],
    ) -> Result<DynamicValue, MarshalError> {
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            out.push(DynamicValue::Map(self.encode(item)?));
        }
        Ok(DynamicValue::List(out))
    }
}

/// A never-populated sequence encodes the same as an empty one: an
/// empty list. Encode always writes a value for every declared field.
fn scalar_list<T>(items: Option<Vec<T>>, wrap: fn(T) -> DynamicValue) -> DynamicValue {
    DynamicValue::List(items.unwrap_or_default().into_iter().map(wrap).collect())
}
