//! User domain
//!
//! Strict field rules for the credential values collected by the
//! registration and login forms.

mod validation;

pub use validation::{
    validate_email, validate_password, UserValidationError, MIN_PASSWORD_LENGTH,
    PASSWORD_SPECIAL_CHARACTERS,
};
