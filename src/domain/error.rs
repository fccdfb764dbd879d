use thiserror::Error;

use super::form::FormValidationError;
use super::link::LinkValidationError;
use super::user::UserValidationError;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<FormValidationError> for DomainError {
    fn from(err: FormValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<LinkValidationError> for DomainError {
    fn from(err: LinkValidationError) -> Self {
        Self::validation(err.to_string())
    }
}
