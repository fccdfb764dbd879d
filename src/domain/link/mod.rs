//! Short-link domain
//!
//! Validation rules for user-chosen aliases and target URLs, plus the
//! random alias generator used when no alias is supplied.

mod generator;
mod validation;

pub use generator::{generate_alias, AliasGenerator, GENERATED_ALIAS_LENGTH};
pub use validation::{
    validate_alias, validate_long_url, LinkValidationError, MAX_ALIAS_LENGTH, MIN_ALIAS_LENGTH,
    RESERVED_ALIASES,
};
