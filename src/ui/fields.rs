//! Field identifiers and form snapshotting

use crate::domain::form::RegistrationForm;

use super::ports::FieldSource;

/// Identifier of the username input
pub const FIELD_USERNAME: &str = "username";

/// Identifier of the email input
pub const FIELD_EMAIL: &str = "email";

/// Identifier of the password input
pub const FIELD_PASSWORD: &str = "password";

/// Identifier of the password confirmation input
pub const FIELD_CONFIRM_PASSWORD: &str = "confirm-password";

/// The four inputs read on every submission, in read order
pub const FORM_FIELDS: [&str; 4] = [
    FIELD_USERNAME,
    FIELD_EMAIL,
    FIELD_PASSWORD,
    FIELD_CONFIRM_PASSWORD,
];

/// Snapshot the four form fields from the given source.
///
/// Missing elements read as empty strings, which the validation pass then
/// reports as missing fields.
pub fn read_form(source: &dyn FieldSource) -> RegistrationForm {
    RegistrationForm {
        username: source.value_or_empty(FIELD_USERNAME),
        email: source.value_or_empty(FIELD_EMAIL),
        password: source.value_or_empty(FIELD_PASSWORD),
        confirm_password: source.value_or_empty(FIELD_CONFIRM_PASSWORD),
    }
}
