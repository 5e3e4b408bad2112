use serde::{Deserialize, Serialize};

/// Serializable error payload for CLI `--json` output and downstream consumers.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error category (e.g., "validation_error", "not_found")
    pub error: String,
    /// Human-readable error description
    pub message: String,
    /// Field or argument that caused the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

#[derive(Debug, thiserror::Error, Serialize)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ServiceError {
    /// Machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::ValidationError(_) => "validation_error",
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidOperation(_) => "invalid_operation",
            Self::SerializationError(_) => "serialization_error",
            Self::ConfigError(_) => "config_error",
        }
    }

    /// True when the caller supplied bad data, as opposed to a broken environment.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::ValidationError(_)
                | Self::InvalidInput(_)
                | Self::InvalidOperation(_)
        )
    }

    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            Self::NotFound(msg)
            | Self::ValidationError(msg)
            | Self::InvalidInput(msg)
            | Self::InvalidOperation(msg)
            | Self::SerializationError(msg)
            | Self::ConfigError(msg) => msg.clone(),
        };
        ErrorResponse {
            error: self.error_code().to_string(),
            message,
            param: None,
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::SerializationError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(errors.to_string())
    }
}

impl From<config::ConfigError> for ServiceError {
    fn from(err: config::ConfigError) -> Self {
        ServiceError::ConfigError(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
