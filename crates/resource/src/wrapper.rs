//! CRUD dispatch over a typed resource.

use std::collections::BTreeMap;
use std::time::Duration;

use tessera_marshal::{ConsoleDiagnostics, Diagnostics};
use tessera_state::AttributeStore;

use crate::context::OperationContext;
use crate::error::ResourceError;
use crate::resource::{Resource, ResourceOperation, ResourceWithUpdate};
use crate::schema::{combine_schema, AttributeSchema};

/// The declared timeouts of a wrapped resource, as data for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceTimeouts {
    pub create: Duration,
    pub read: Duration,
    pub delete: Duration,
}

/// Dispatches lifecycle operations for one resource against an
/// attribute store.
///
/// Create and update both re-run the read operation afterwards so the
/// published attributes reflect what actually exists: the resource's
/// own read logic is the single source of truth for state.
pub struct ResourceWrapper<R> {
    resource: R,
    diagnostics: Box<dyn Diagnostics>,
}

impl<R: Resource> ResourceWrapper<R> {
    pub fn new(resource: R) -> Self {
        ResourceWrapper {
            resource,
            diagnostics: Box::new(ConsoleDiagnostics),
        }
    }

    pub fn with_diagnostics(resource: R, diagnostics: Box<dyn Diagnostics>) -> Self {
        ResourceWrapper {
            resource,
            diagnostics,
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// The merged argument + attribute schema for this resource.
    pub fn schema(&self) -> Result<BTreeMap<String, AttributeSchema>, ResourceError> {
        combine_schema(&self.resource.arguments(), &self.resource.attributes())
    }

    /// The declared timeouts, for the host scheduler.
    pub fn timeouts(&self) -> ResourceTimeouts {
        ResourceTimeouts {
            create: self.resource.create().timeout(),
            read: self.resource.read().timeout(),
            delete: self.resource.delete().timeout(),
        }
    }

    pub fn create(&self, state: &mut AttributeStore) -> Result<(), ResourceError> {
        self.run(&self.resource.create(), state)?;
        // Still technically inside create, so the create timeout covers
        // the trailing read as well.
        self.run(&self.resource.read(), state)
    }

    pub fn read(&self, state: &mut AttributeStore) -> Result<(), ResourceError> {
        self.run(&self.resource.read(), state)
    }

    pub fn delete(&self, state: &mut AttributeStore) -> Result<(), ResourceError> {
        self.run(&self.resource.delete(), state)
    }

    /// Validate an externally supplied ID, stamp it, and read.
    ///
    /// Validation warnings go to the diagnostic sink; validation errors
    /// are joined into one failure before anything is stamped.
    pub fn import(&self, id: &str, state: &mut AttributeStore) -> Result<(), ResourceError> {
        let validation = self.resource.validate_id(id);
        for warning in &validation.warnings {
            self.diagnostics.warn(warning);
        }
        if !validation.is_valid() {
            return Err(ResourceError::InvalidResourceId {
                id: id.to_string(),
                message: validation.errors.join("; "),
            });
        }
        state.set_id(id);
        self.run(&self.resource.read(), state)
    }

    fn run(
        &self,
        operation: &ResourceOperation,
        state: &mut AttributeStore,
    ) -> Result<(), ResourceError> {
        let mut ctx = OperationContext::new(state, self.diagnostics.as_ref());
        operation.run(&mut ctx)
    }
}

impl<R: ResourceWithUpdate> ResourceWrapper<R> {
    pub fn update(&self, state: &mut AttributeStore) -> Result<(), ResourceError> {
        self.run(&self.resource.update(), state)?;
        // As with create, the update timeout covers the trailing read.
        self.run(&self.resource.read(), state)
    }

    pub fn update_timeout(&self) -> Duration {
        self.resource.update().timeout()
    }
}
