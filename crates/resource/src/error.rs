use tessera_marshal::MarshalError;
use tessera_state::StateError;

/// All errors the lifecycle layer can return.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResourceError {
    /// A wire key appears in both the argument and attribute schemas.
    #[error("{key:?} already exists in the schema")]
    SchemaCollision { key: String },

    /// Two registered resources claim the same resource type name.
    #[error("{resource_type:?} is registered more than once")]
    DuplicateResourceType { resource_type: String },

    /// The ID supplied for an import failed the resource's validator.
    #[error("invalid resource id {id:?}: {message}")]
    InvalidResourceId { id: String, message: String },

    /// A conversion failed inside an operation.
    #[error(transparent)]
    Marshal(#[from] MarshalError),

    /// A state read or write failed inside an operation.
    #[error(transparent)]
    State(#[from] StateError),

    /// A business-logic failure reported by an operation body.
    #[error("{resource_type} operation failed: {message}")]
    Operation {
        resource_type: String,
        message: String,
    },
}
