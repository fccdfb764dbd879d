//! Form domain
//!
//! The registration form snapshot, the client-side validation pass over it,
//! and the discriminated outcome of that pass.

mod entity;
mod validation;

pub use entity::{FormOutcome, RegistrationForm};
pub use validation::{validate, FormValidationError};
