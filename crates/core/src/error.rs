#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An unknown state, city, or service slug. Rendered as a 404 page.
    #[error("Not found: {entity} '{key}'")]
    NotFound { entity: &'static str, key: String },

    /// A required input failed validation. Rendered as a 400 response.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A content source (registry, taxonomy) is missing or unparsable.
    ///
    /// Fatal at load time: loaders never return partial results, so this
    /// is not recoverable per-request.
    #[error("Data source unavailable: {source_name}: {reason}")]
    DataUnavailable {
        source_name: &'static str,
        reason: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for the NotFound variant.
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }
}
