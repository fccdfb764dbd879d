//! Domain layer - Core validation logic and entities

pub mod error;
pub mod form;
pub mod link;
pub mod user;

pub use error::DomainError;
pub use form::{validate, FormOutcome, FormValidationError, RegistrationForm};
pub use link::{
    generate_alias, validate_alias, validate_long_url, AliasGenerator, LinkValidationError,
};
pub use user::{validate_email, validate_password, UserValidationError};
