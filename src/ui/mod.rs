//! UI layer - field access, alert port, and the submission entry points

pub mod fields;
pub mod handlers;
pub mod ports;

pub use fields::{
    read_form, FIELD_CONFIRM_PASSWORD, FIELD_EMAIL, FIELD_PASSWORD, FIELD_USERNAME, FORM_FIELDS,
};
pub use handlers::{
    handle_login, handle_register, ALERT_LOGIN_SUCCESS, ALERT_MISSING_FIELDS,
    ALERT_PASSWORD_MISMATCH, ALERT_REGISTER_SUCCESS,
};
pub use ports::{FieldSource, Notifier};
