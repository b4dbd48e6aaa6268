use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The AI credential is missing. Fatal to the request, never to the process.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// User supplied input that cannot be analyzed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The AI reply could not be turned into a result, whatever strategy was tried.
    #[error("Upstream format error: {0}")]
    UpstreamFormat(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Whether the same request may succeed if sent again unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CoreError::UpstreamFormat(_) | CoreError::ExternalServiceError(_)
        )
    }
}
