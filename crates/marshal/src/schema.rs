//! Per-record field metadata.
//!
//! The reflective original walked struct tags at runtime; here every
//! record type declares its field list once, as data. Each
//! [`FieldDescriptor`] carries the wire key, the computed flag, and a
//! typed get/set capability pair, and the engine operates purely
//! against that list. There is no runtime reflection anywhere.
//!
//! Wire-key uniqueness among sibling fields is a precondition of
//! declaring a record, not something checked at runtime. The declared
//! type graph must be acyclic and finite; depth of recursion is bounded
//! only by the shape of the types.

use std::collections::BTreeMap;
use std::fmt;

use tessera_value::DynamicValue;

use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::MarshalError;

/// A typed record participating in marshaling.
///
/// `Default` supplies the zero-valued instance Decode populates and the
/// engine allocates for nested list elements.
pub trait Record: Default {
    /// Field declarations, in declaration order.
    ///
    /// Order does not affect correctness but must be deterministic so
    /// diagnostics and tests are reproducible.
    fn fields() -> Vec<FieldDescriptor<Self>>
    where
        Self: Sized;
}

pub(crate) type NestedDecodeFn<R> =
    Box<dyn Fn(&mut R, &[DynamicValue], &Decoder<'_>) -> Result<(), MarshalError>>;
pub(crate) type NestedEncodeFn<R> =
    Box<dyn Fn(&R, &Encoder<'_>) -> Result<DynamicValue, MarshalError>>;

/// The typed get/set capability for one field.
///
/// Scalar and primitive-sequence variants hold plain function pointers;
/// the nested-record variant holds hooks monomorphized over the element
/// type, which is how recursion crosses the type-erasure boundary
/// without reflection.
pub(crate) enum FieldAccess<R> {
    String {
        get: fn(&R) -> String,
        set: fn(&mut R, String),
    },
    Int {
        get: fn(&R) -> i64,
        set: fn(&mut R, i64),
    },
    Float {
        get: fn(&R) -> f64,
        set: fn(&mut R, f64),
    },
    Bool {
        get: fn(&R) -> bool,
        set: fn(&mut R, bool),
    },
    StringList {
        get: fn(&R) -> Option<Vec<String>>,
        set: fn(&mut R, Option<Vec<String>>),
    },
    IntList {
        get: fn(&R) -> Option<Vec<i64>>,
        set: fn(&mut R, Option<Vec<i64>>),
    },
    FloatList {
        get: fn(&R) -> Option<Vec<f64>>,
        set: fn(&mut R, Option<Vec<f64>>),
    },
    BoolList {
        get: fn(&R) -> Option<Vec<bool>>,
        set: fn(&mut R, Option<Vec<bool>>),
    },
    StringMap {
        get: fn(&R) -> BTreeMap<String, String>,
        set: fn(&mut R, BTreeMap<String, String>),
    },
    NestedList {
        decode: NestedDecodeFn<R>,
        encode: NestedEncodeFn<R>,
    },
    /// A declared wire key whose field type has no dynamic
    /// representation. Encode fails fatally on it; Decode leaves it
    /// untouched under the permissive baseline.
    Opaque { type_name: &'static str },
}

impl<R> FieldAccess<R> {
    /// The declared kind, named for error messages.
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            FieldAccess::String { .. } => "string",
            FieldAccess::Int { .. } => "int",
            FieldAccess::Float { .. } => "float",
            FieldAccess::Bool { .. } => "bool",
            FieldAccess::StringList { .. } => "list of strings",
            FieldAccess::IntList { .. } => "list of ints",
            FieldAccess::FloatList { .. } => "list of floats",
            FieldAccess::BoolList { .. } => "list of bools",
            FieldAccess::StringMap { .. } => "string map",
            FieldAccess::NestedList { .. } => "list of nested records",
            FieldAccess::Opaque { type_name } => type_name,
        }
    }
}

/// One field's out-of-band declaration: wire key, computed flag, typed
/// access capability.
///
/// Build one per participating struct field with the kind constructors,
/// chaining [`computed`](FieldDescriptor::computed) where business logic
/// owns the value:
///
/// ```ignore
/// fn fields() -> Vec<FieldDescriptor<Cluster>> {
///     vec![
///         FieldDescriptor::string("name", |c| c.name.clone(), |c, v| c.name = v),
///         FieldDescriptor::string("endpoint", |c| c.endpoint.clone(), |c, v| c.endpoint = v)
///             .computed(),
///     ]
/// }
/// ```
pub struct FieldDescriptor<R> {
    wire_key: &'static str,
    computed: bool,
    access: FieldAccess<R>,
}

impl<R> FieldDescriptor<R> {
    fn new(wire_key: &'static str, access: FieldAccess<R>) -> Self {
        FieldDescriptor {
            wire_key,
            computed: false,
            access,
        }
    }

    pub fn string(
        wire_key: &'static str,
        get: fn(&R) -> String,
        set: fn(&mut R, String),
    ) -> Self {
        FieldDescriptor::new(wire_key, FieldAccess::String { get, set })
    }

    pub fn int(wire_key: &'static str, get: fn(&R) -> i64, set: fn(&mut R, i64)) -> Self {
        FieldDescriptor::new(wire_key, FieldAccess::Int { get, set })
    }

    pub fn float(wire_key: &'static str, get: fn(&R) -> f64, set: fn(&mut R, f64)) -> Self {
        FieldDescriptor::new(wire_key, FieldAccess::Float { get, set })
    }

    pub fn boolean(wire_key: &'static str, get: fn(&R) -> bool, set: fn(&mut R, bool)) -> Self {
        FieldDescriptor::new(wire_key, FieldAccess::Bool { get, set })
    }

    pub fn string_list(
        wire_key: &'static str,
        get: fn(&R) -> Option<Vec<String>>,
        set: fn(&mut R, Option<Vec<String>>),
    ) -> Self {
        FieldDescriptor::new(wire_key, FieldAccess::StringList { get, set })
    }

    pub fn int_list(
        wire_key: &'static str,
        get: fn(&R) -> Option<Vec<i64>>,
        set: fn(&mut R, Option<Vec<i64>>),
    ) -> Self {
        FieldDescriptor::new(wire_key, FieldAccess::IntList { get, set })
    }

    pub fn float_list(
        wire_key: &'static str,
        get: fn(&R) -> Option<Vec<f64>>,
        set: fn(&mut R, Option<Vec<f64>>),
    ) -> Self {
        FieldDescriptor::new(wire_key, FieldAccess::FloatList { get, set })
    }

    pub fn bool_list(
        wire_key: &'static str,
        get: fn(&R) -> Option<Vec<bool>>,
        set: fn(&mut R, Option<Vec<bool>>),
    ) -> Self {
        FieldDescriptor::new(wire_key, FieldAccess::BoolList { get, set })
    }

    pub fn string_map(
        wire_key: &'static str,
        get: fn(&R) -> BTreeMap<String, String>,
        set: fn(&mut R, BTreeMap<String, String>),
    ) -> Self {
        FieldDescriptor::new(wire_key, FieldAccess::StringMap { get, set })
    }

    /// A sequence of nested records, recursed into by both directions.
    pub fn nested_list<N: Record + 'static>(
        wire_key: &'static str,
        get: fn(&R) -> &[N],
        get_mut: fn(&mut R) -> &mut Vec<N>,
    ) -> Self
    where
        R: 'static,
    {
        FieldDescriptor::new(
            wire_key,
            FieldAccess::NestedList {
                decode: Box::new(move |record, items, decoder| {
                    decoder.decode_nested_list(get_mut(record), items, wire_key)
                }),
                encode: Box::new(move |record, encoder| {
                    encoder.encode_nested_list(get(record))
                }),
            },
        )
    }

    /// A declared wire key backed by a field type the engine cannot
    /// convert. `type_name` appears in diagnostics and error messages.
    pub fn opaque(wire_key: &'static str, type_name: &'static str) -> Self {
        FieldDescriptor::new(wire_key, FieldAccess::Opaque { type_name })
    }

    /// Mark this field computed: its value is produced by business
    /// logic, never populated by Decode, always published by Encode.
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn wire_key(&self) -> &'static str {
        self.wire_key
    }

    pub fn is_computed(&self) -> bool {
        self.computed
    }

    pub(crate) fn access(&self) -> &FieldAccess<R> {
        &self.access
    }
}

impl<R> fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("wire_key", &self.wire_key)
            .field("computed", &self.computed)
            .field("kind", &self.access.kind_name())
            .finish()
    }
}
