//! Decoding: populating a typed record from a state map.
//!
//! The decoder walks the target's field metadata in declaration order,
//! fetches one raw value per wire key, and dispatches on the runtime
//! kind of the fetched value (not the field's static kind), coercing
//! into the declared field kind. Computed fields are never touched.
//! Nested record lists recurse through the same walk against each
//! element map, to any depth the declared types reach.
//!
//! What happens on a kind mismatch is an explicit policy, not an
//! accident: [`MismatchPolicy::Permissive`] leaves the field at its
//! prior (zero) value and drops malformed list elements, the behavior
//! lenient state stores historically exhibited; [`MismatchPolicy::Strict`]
//! fails fast naming the wire key.

use std::collections::BTreeMap;

use tessera_state::StateAccessor;
use tessera_value::DynamicValue;

use crate::diag::{Diagnostics, NullDiagnostics};
use crate::error::MarshalError;
use crate::schema::{FieldAccess, FieldDescriptor, Record};

/// How Decode treats a state value that does not convert into the
/// field's declared kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Leave the field unchanged and drop malformed nested-list
    /// elements. The baseline-compatible default.
    #[default]
    Permissive,
    /// Fail fast with an error naming the wire key.
    Strict,
}

/// Decode a record from a state accessor with the permissive default
/// policy and no diagnostics.
pub fn decode<R: Record>(target: &mut R, source: &dyn StateAccessor) -> Result<(), MarshalError> {
    Decoder::new().decode(target, source)
}

/// The decoding half of the engine.
#[derive(Clone, Copy)]
pub struct Decoder<'d> {
    policy: MismatchPolicy,
    diagnostics: &'d dyn Diagnostics,
}

impl Decoder<'static> {
    /// Permissive decoder with no diagnostics.
    pub fn new() -> Self {
        Decoder::with_policy(MismatchPolicy::Permissive)
    }

    /// Fail-fast decoder with no diagnostics.
    pub fn strict() -> Self {
        Decoder::with_policy(MismatchPolicy::Strict)
    }

    pub fn with_policy(policy: MismatchPolicy) -> Self {
        Decoder {
            policy,
            diagnostics: &NullDiagnostics,
        }
    }
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Decoder::new()
    }
}

impl<'d> Decoder<'d> {
    /// Attach a diagnostic sink for per-field visibility.
    pub fn with_diagnostics<'a>(self, diagnostics: &'a dyn Diagnostics) -> Decoder<'a> {
        Decoder {
            policy: self.policy,
            diagnostics,
        }
    }

    pub fn policy(&self) -> MismatchPolicy {
        self.policy
    }

    /// Populate `target` from `source`.
    ///
    /// Visits every wire-keyed, non-computed field; absent keys leave
    /// the field at its zero value. Under the permissive policy this
    /// never fails.
    pub fn decode<R: Record>(
        &self,
        target: &mut R,
        source: &dyn StateAccessor,
    ) -> Result<(), MarshalError> {
        self.decode_fields(target, &|key| source.get(key))
    }

    /// One field walk shared by the root (fetching from the accessor)
    /// and every nested level (fetching from an element map).
    fn decode_fields<R: Record>(
        &self,
        target: &mut R,
        fetch: &dyn Fn(&str) -> Option<DynamicValue>,
    ) -> Result<(), MarshalError> {
        for field in R::fields() {
            if field.is_computed() {
                self.diagnostics
                    .info(&format!("skipping computed field {:?}", field.wire_key()));
                continue;
            }
            let raw = fetch(field.wire_key());
            match &raw {
                Some(value) => self.diagnostics.info(&format!(
                    "field {:?}: state holds a {}",
                    field.wire_key(),
                    value.kind_name()
                )),
                None => self
                    .diagnostics
                    .info(&format!("field {:?}: absent", field.wire_key())),
            }
            self.apply(target, &field, raw)?;
        }
        Ok(())
    }

    /// Convert one fetched value into one field.
    fn apply<R: Record>(
        &self,
        target: &mut R,
        field: &FieldDescriptor<R>,
        raw: Option<DynamicValue>,
    ) -> Result<(), MarshalError> {
        let wire_key = field.wire_key();
        // Absent keys leave the field at its zero value.
        let Some(value) = raw else {
            return Ok(());
        };

        match (field.access(), value) {
            (FieldAccess::String { set, .. }, DynamicValue::String(s)) => {
                set(target, s);
                Ok(())
            }
            (FieldAccess::Int { set, .. }, DynamicValue::Int(i)) => {
                set(target, i);
                Ok(())
            }
            (FieldAccess::Float { set, .. }, DynamicValue::Float(f)) => {
                set(target, f);
                Ok(())
            }
            (FieldAccess::Bool { set, .. }, DynamicValue::Bool(b)) => {
                set(target, b);
                Ok(())
            }
            (FieldAccess::StringList { set, .. }, DynamicValue::List(items)) => {
                if let Some(converted) = self.scalar_list(wire_key, "list of strings", &items, |v| {
                    v.as_str().map(str::to_string)
                })? {
                    set(target, converted);
                }
                Ok(())
            }
            (FieldAccess::IntList { set, .. }, DynamicValue::List(items)) => {
                if let Some(converted) =
                    self.scalar_list(wire_key, "list of ints", &items, DynamicValue::as_int)?
                {
                    set(target, converted);
                }
                Ok(())
            }
            (FieldAccess::FloatList { set, .. }, DynamicValue::List(items)) => {
                if let Some(converted) =
                    self.scalar_list(wire_key, "list of floats", &items, DynamicValue::as_float)?
                {
                    set(target, converted);
                }
                Ok(())
            }
            (FieldAccess::BoolList { set, .. }, DynamicValue::List(items)) => {
                if let Some(converted) =
                    self.scalar_list(wire_key, "list of bools", &items, DynamicValue::as_bool)?
                {
                    set(target, converted);
                }
                Ok(())
            }
            (FieldAccess::StringMap { set, .. }, DynamicValue::Map(entries)) => {
                // An empty source map leaves the field untouched.
                if entries.is_empty() {
                    return Ok(());
                }
                let mut out = BTreeMap::new();
                for (key, value) in &entries {
                    match value {
                        DynamicValue::String(s) => {
                            out.insert(key.clone(), s.clone());
                        }
                        // Only string-valued target maps convert in this
                        // version.
                        other => {
                            return self.mismatch(wire_key, "string map", other.kind_name());
                        }
                    }
                }
                set(target, out);
                Ok(())
            }
            (FieldAccess::NestedList { decode, .. }, DynamicValue::List(items)) => {
                decode(target, &items, self)
            }
            (access, value) => self.mismatch(wire_key, access.kind_name(), value.kind_name()),
        }
    }

    /// Convert a list of scalar elements, preserving order and length
    /// exactly. Returns `Ok(None)` when the field should be skipped
    /// (permissive element mismatch); an empty source list converts to
    /// the sequence's zero representation.
    fn scalar_list<T>(
        &self,
        wire_key: &str,
        expected: &'static str,
        items: &[DynamicValue],
        extract: fn(&DynamicValue) -> Option<T>,
    ) -> Result<Option<Option<Vec<T>>>, MarshalError> {
        if items.is_empty() {
            return Ok(Some(None));
        }
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            match extract(item) {
                Some(converted) => out.push(converted),
                None => {
                    self.mismatch(wire_key, expected, item.kind_name())?;
                    return Ok(None);
                }
            }
        }
        Ok(Some(Some(out)))
    }

    /// Decode a list of element maps into a nested record sequence.
    /// Elements that are not maps, or are empty maps, are dropped under
    /// the permissive policy; non-map elements fail under strict.
    pub(crate) fn decode_nested_list<N: Record>(
        &self,
        target: &mut Vec<N>,
        items: &[DynamicValue],
        wire_key: &str,
    ) -> Result<(), MarshalError> {
        let mut out = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match item {
                DynamicValue::Map(entries) => {
                    // Empty element maps carry no data and are dropped.
                    if entries.is_empty() {
                        self.diagnostics.info(&format!(
                            "dropping empty element {index} under {wire_key:?}"
                        ));
                        continue;
                    }
                    let mut element = N::default();
                    self.decode_fields(&mut element, &|key| entries.get(key).cloned())?;
                    out.push(element);
                }
                other => match self.policy {
                    MismatchPolicy::Permissive => {
                        self.diagnostics.warn(&format!(
                            "dropping element {index} under {wire_key:?}: found a {}, not an attribute map",
                            other.kind_name()
                        ));
                    }
                    MismatchPolicy::Strict => {
                        return Err(MarshalError::MalformedListElement {
                            wire_key: wire_key.to_string(),
                            index,
                            found: other.kind_name(),
                        });
                    }
                },
            }
        }
        *target = out;
        Ok(())
    }

    /// Handle a field-level kind mismatch per the configured policy.
    fn mismatch(
        &self,
        wire_key: &str,
        expected: &'static str,
        found: &'static str,
    ) -> Result<(), MarshalError> {
        match self.policy {
            MismatchPolicy::Permissive => {
                self.diagnostics.warn(&format!(
                    "leaving {wire_key:?} unchanged: state holds a {found}, field expects a {expected}"
                ));
                Ok(())
            }
            MismatchPolicy::Strict => Err(MarshalError::KindMismatch {
                wire_key: wire_key.to_string(),
                expected,
                found,
            }),
        }
    }
}
