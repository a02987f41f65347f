use tessera_state::StateError;

/// All errors the conversion engine can return.
///
/// The decode-target precondition of the reflective original ("target
/// must be an addressable record reference") has no variant here: the
/// typed entry points take `&mut R where R: Record`, which is settable
/// by construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarshalError {
    /// Encode found a declared wire key whose field kind has no dynamic
    /// representation. Encode never silently drops a field; producing
    /// incorrect output is worse than refusing.
    #[error("field kind for {wire_key:?} cannot be represented as a dynamic value")]
    UnsupportedFieldKind { wire_key: String },

    /// Decode, under [`MismatchPolicy::Strict`](crate::MismatchPolicy),
    /// found a state value whose kind does not convert into the field's
    /// declared kind.
    #[error("state holds a {found} for {wire_key:?} but the field expects a {expected}")]
    KindMismatch {
        wire_key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Decode, under [`MismatchPolicy::Strict`](crate::MismatchPolicy),
    /// found a nested-record list element that is not an attribute map.
    #[error("list element {index} under {wire_key:?} is a {found}, not an attribute map")]
    MalformedListElement {
        wire_key: String,
        index: usize,
        found: &'static str,
    },

    /// A state write failed while publishing an encoded snapshot. Writes
    /// before the failing key may already be visible.
    #[error("writing {wire_key:?} to state: {source}")]
    StateWrite {
        wire_key: String,
        source: StateError,
    },
}
