#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] keyed by slug or id.
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }
}
