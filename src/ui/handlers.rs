//! Submission entry points
//!
//! The two UI-event handlers behind the register and login buttons. Both
//! read the same four fields and run the same validation pass; they differ
//! only in the success message. Nothing propagates out of a handler: an
//! invalid submission ends with the alert, and the outcome is returned for
//! observability only.

use tracing::info;

use crate::domain::form::{validate, FormOutcome};

use super::fields::read_form;
use super::ports::{FieldSource, Notifier};

/// Alert shown when password and confirmation differ
pub const ALERT_PASSWORD_MISMATCH: &str = "Passwords do not match!";

/// Alert shown when one or more fields are empty
pub const ALERT_MISSING_FIELDS: &str = "Please fill in all fields!";

/// Alert shown after a successful registration submission
pub const ALERT_REGISTER_SUCCESS: &str = "Registration successful!";

/// Alert shown after a successful login submission
pub const ALERT_LOGIN_SUCCESS: &str = "Login successful!";

/// Handle a click on the registration submit button
pub fn handle_register(fields: &dyn FieldSource, notifier: &dyn Notifier) -> FormOutcome {
    submit(fields, notifier, ALERT_REGISTER_SUCCESS)
}

/// Handle a click on the login submit button
pub fn handle_login(fields: &dyn FieldSource, notifier: &dyn Notifier) -> FormOutcome {
    submit(fields, notifier, ALERT_LOGIN_SUCCESS)
}

fn submit(fields: &dyn FieldSource, notifier: &dyn Notifier, success_message: &str) -> FormOutcome {
    let form = read_form(fields);
    let outcome = validate(&form);

    match outcome {
        FormOutcome::PasswordMismatch => notifier.alert(ALERT_PASSWORD_MISMATCH),
        FormOutcome::MissingFields => notifier.alert(ALERT_MISSING_FIELDS),
        FormOutcome::Valid => {
            info!(username = %form.username, "Submitted username");
            info!(email = %form.email, "Submitted email");
            info!(password = %form.password, "Submitted password");

            notifier.alert(success_message);
        }
    }

    outcome
}
