use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),
}

impl StoreError {
    /// Stable code for callers that key UI messages on the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "NOT_FOUND",
            StoreError::AlreadyExists(_) => "ALREADY_EXISTS",
            StoreError::ValidationError(_) => "VALIDATION_ERROR",
            StoreError::InvalidTransition(_) => "INVALID_TRANSITION",
            StoreError::IntegrityViolation(_) => "INTEGRITY_VIOLATION",
        }
    }
}

impl From<validator::ValidationErrors> for StoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        StoreError::ValidationError(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
