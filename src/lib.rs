//! LinkSnip Forms
//!
//! Client-side form handling and validation for the LinkSnip URL shortener:
//! - the registration/login form snapshot and its validation pass
//! - strict field rules for emails, passwords, and short-link aliases
//! - random alias generation
//! - the two UI-event submission handlers and their side-effect ports
//!
//! Everything is synchronous and single-threaded: validation runs once per
//! submission attempt, reports through a blocking alert port plus tracing
//! log lines, and keeps no state between attempts.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;

pub use config::AppConfig;
pub use domain::{
    validate, DomainError, FormOutcome, FormValidationError, RegistrationForm,
};
pub use infrastructure::{InMemoryFieldSource, RecordingNotifier, TerminalNotifier};
pub use ui::{handle_login, handle_register, FieldSource, Notifier};
