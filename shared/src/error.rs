use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SharedError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

impl From<url::ParseError> for SharedError {
    fn from(error: url::ParseError) -> Self {
        Self::InvalidUrl(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
