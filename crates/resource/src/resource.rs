//! The typed resource and data source traits.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::context::OperationContext;
use crate::error::ResourceError;
use crate::schema::AttributeSchema;

/// One lifecycle operation: a run function plus its declared timeout.
///
/// The timeout is data for the host scheduler; running the operation
/// here never blocks or enforces it.
pub struct ResourceOperation {
    run: Box<dyn Fn(&mut OperationContext<'_>) -> Result<(), ResourceError>>,
    timeout: Duration,
}

impl ResourceOperation {
    pub fn new(
        timeout: Duration,
        run: impl Fn(&mut OperationContext<'_>) -> Result<(), ResourceError> + 'static,
    ) -> Self {
        ResourceOperation {
            run: Box::new(run),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn run(&self, ctx: &mut OperationContext<'_>) -> Result<(), ResourceError> {
        (self.run)(ctx)
    }
}

impl fmt::Debug for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceOperation")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// The outcome of validating a resource ID before an import-style read.
///
/// Warnings are surfaced through the diagnostic sink; any error makes
/// the ID unusable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl IdValidation {
    /// A clean pass.
    pub fn ok() -> Self {
        IdValidation::default()
    }

    pub fn error(message: impl Into<String>) -> Self {
        IdValidation {
            warnings: Vec::new(),
            errors: vec![message.into()],
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        IdValidation {
            warnings: vec![message.into()],
            errors: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A read-only data source.
pub trait DataSource {
    /// The wire name of this data source type.
    fn resource_type(&self) -> &'static str;

    /// Caller-supplied keys.
    fn arguments(&self) -> BTreeMap<String, AttributeSchema>;

    /// Published keys; forced computed when merged.
    fn attributes(&self) -> BTreeMap<String, AttributeSchema>;

    fn read(&self) -> ResourceOperation;
}

/// A managed resource with a full CRUD lifecycle.
pub trait Resource {
    /// The wire name of this resource type.
    fn resource_type(&self) -> &'static str;

    /// Caller-supplied keys.
    fn arguments(&self) -> BTreeMap<String, AttributeSchema>;

    /// Published keys; forced computed when merged.
    fn attributes(&self) -> BTreeMap<String, AttributeSchema>;

    fn create(&self) -> ResourceOperation;

    fn read(&self) -> ResourceOperation;

    fn delete(&self) -> ResourceOperation;

    /// Validate an externally supplied ID before an import-style read.
    fn validate_id(&self, id: &str) -> IdValidation;
}

/// Implemented by resources that support in-place updates; everything
/// else is replace-on-change.
pub trait ResourceWithUpdate: Resource {
    fn update(&self) -> ResourceOperation;
}
