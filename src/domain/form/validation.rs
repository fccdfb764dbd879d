//! Client-side form validation
//!
//! The naive pre-submit check applied on every submission attempt. Password
//! mismatch is reported before emptiness, so a mismatched pair of empty
//! passwords still reads as a mismatch. Whitespace-only values pass here;
//! the strict field rules in [`crate::domain::user`] are where trimming
//! happens.

use thiserror::Error;

use super::entity::{FormOutcome, RegistrationForm};

/// Errors that can occur during form validation
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormValidationError {
    #[error("Password and confirmation do not match")]
    PasswordMismatch,

    #[error("One or more required fields are empty")]
    MissingFields,
}

/// Validate a registration form snapshot.
///
/// Rules, in order:
/// - password must equal confirm-password
/// - all four fields must be non-empty
pub fn validate(form: &RegistrationForm) -> FormOutcome {
    if form.password != form.confirm_password {
        return FormOutcome::PasswordMismatch;
    }

    if form.username.is_empty()
        || form.email.is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
    {
        return FormOutcome::MissingFields;
    }

    FormOutcome::Valid
}
