//! tessera-resource: The typed resource lifecycle layer.
//!
//! A resource declares its wire schema (arguments and attributes), its
//! CRUD operations, and an ID validator; the [`ResourceWrapper`] merges
//! the schema, dispatches operations against an attribute store, and
//! re-reads state after every mutation so the published attributes stay
//! current. Operation bodies talk to the store exclusively through an
//! [`OperationContext`], which carries the marshaling conveniences and
//! the diagnostic sink.
//!
//! Timeouts declared on operations are carried as data for a host
//! scheduler to enforce. Nothing in this crate blocks, sleeps, or
//! performs I/O.

pub mod context;
pub mod error;
pub mod registration;
pub mod resource;
pub mod schema;
pub mod wrapper;

pub use context::OperationContext;
pub use error::ResourceError;
pub use registration::{assemble_registry, ServiceRegistration};
pub use resource::{
    DataSource, IdValidation, Resource, ResourceOperation, ResourceWithUpdate,
};
pub use schema::{combine_schema, AttributeSchema};
pub use wrapper::{ResourceTimeouts, ResourceWrapper};
