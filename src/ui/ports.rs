//! Side-effect ports for the submission handlers
//!
//! The handlers only ever talk to the UI through these two traits, which
//! keeps the validation path pure and testable.

#[cfg(test)]
use mockall::automock;

/// Read access to named UI input elements
#[cfg_attr(test, automock)]
pub trait FieldSource {
    /// Current value of the input with the given identifier, or `None` if
    /// no such element exists
    fn value(&self, field_id: &str) -> Option<String>;

    /// Current value of the input, with a missing element reading as empty
    fn value_or_empty(&self, field_id: &str) -> String {
        self.value(field_id).unwrap_or_default()
    }
}

/// Blocking modal alert shown to the user
///
/// `alert` does not return until the user has dismissed the dialog, as far
/// as the implementation can enforce that.
#[cfg_attr(test, automock)]
pub trait Notifier {
    fn alert(&self, message: &str);
}
