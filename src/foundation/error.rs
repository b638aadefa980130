/// Convenience result type used across the crate.
pub type RevealResult<T> = Result<T, RevealError>;

/// Error type returned at the crate's boundaries (config, documents, traces).
///
/// Event handling itself never fails; bad input there is normalized instead.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Invalid configuration or trace data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A document description references elements that do not exist or are malformed.
    #[error("document error: {0}")]
    Document(String),

    /// JSON decode failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::Document`].
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    /// Build a [`RevealError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RevealError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
