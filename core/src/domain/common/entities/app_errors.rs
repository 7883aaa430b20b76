use thiserror::Error;

/// Errors surfaced by the core services. The display strings for
/// `RetrievalFailed` and `ComparisonFailed` are user-facing and shown
/// verbatim by callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Failed to fetch nutritional information from AI. Please try again.")]
    RetrievalFailed,

    #[error("Failed to fetch food comparison data from AI. Please try again.")]
    ComparisonFailed,

    #[error("{0}")]
    InvalidArgument(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
