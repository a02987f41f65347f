//! tessera-marshal: Bidirectional conversion between typed records and
//! dynamic state maps.
//!
//! A consumer declares a record type once (a plain struct plus a
//! [`Record::fields`] builder listing each participating field's wire
//! key, computed flag, and get/set capability) and gets both directions
//! for free:
//!
//! - [`Decoder::decode`] populates a zero-valued record from a
//!   [`StateAccessor`](tessera_state::StateAccessor), recursing through
//!   nested record lists at any depth.
//! - [`Encoder::encode`] produces an independent key→value snapshot
//!   covering every declared wire key; [`Encoder::encode_into`] pushes
//!   that snapshot through a
//!   [`StateWriter`](tessera_state::StateWriter) one top-level key at a
//!   time.
//!
//! Computed fields are skipped by Decode (business logic owns them) and
//! always published by Encode. Kind mismatches on the decode path are
//! governed by an explicit [`MismatchPolicy`]; the permissive default
//! reproduces the lenient behavior host frameworks historically relied
//! on, the strict mode fails fast naming the wire key.
//!
//! Both entry points are pure, synchronous, in-memory transformations:
//! no I/O, no blocking, no cancellation. Distinct record instances may
//! be converted concurrently; one instance has a single writer.

pub mod decode;
pub mod diag;
pub mod encode;
pub mod error;
pub mod schema;

pub use decode::{decode, Decoder, MismatchPolicy};
pub use diag::{ConsoleDiagnostics, Diagnostics, NullDiagnostics};
pub use encode::{encode, encode_into, Encoder};
pub use error::MarshalError;
pub use schema::{FieldDescriptor, Record};
