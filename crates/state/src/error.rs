/// All errors that can be returned by a state writer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// The key is not part of the store's declared schema.
    #[error("unknown attribute key: {key:?}")]
    UnknownKey { key: String },

    /// A backend-specific write failure (persistence, host framework, etc.).
    #[error("state backend error: {0}")]
    Backend(String),
}
