//! Registration form state and validation outcome

use serde::{Deserialize, Serialize};

use super::validation::FormValidationError;

/// Snapshot of the four registration fields, read fresh from UI state on
/// each submission attempt. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirm-password")]
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

/// Result of one validation pass over a [`RegistrationForm`].
///
/// A failure is terminal for the submission attempt; there is no retry or
/// recovery state, the user simply resubmits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormOutcome {
    /// All four fields are non-empty and the passwords match
    Valid,
    /// Password and confirmation differ
    PasswordMismatch,
    /// One or more fields are empty
    MissingFields,
}

impl FormOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Convert into a `Result` for callers that propagate with `?`
    pub fn into_result(self) -> Result<(), FormValidationError> {
        match self {
            Self::Valid => Ok(()),
            Self::PasswordMismatch => Err(FormValidationError::PasswordMismatch),
            Self::MissingFields => Err(FormValidationError::MissingFields),
        }
    }
}
