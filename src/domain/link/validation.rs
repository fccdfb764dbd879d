//! Short-link alias and target URL rules

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum length for a user-chosen alias
pub const MIN_ALIAS_LENGTH: usize = 8;

/// Maximum length for a user-chosen alias
pub const MAX_ALIAS_LENGTH: usize = 20;

/// Aliases that collide with application routes and can never be claimed
pub const RESERVED_ALIASES: [&str; 6] = [
    "register",
    "login",
    "logout",
    "create_link",
    "buy",
    "subscriptions",
];

static ALIAS_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

/// Errors that can occur during short-link validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkValidationError {
    #[error("Alias is too short. Minimum length is {0} characters")]
    AliasTooShort(usize),

    #[error("Alias exceeds maximum length of {0} characters")]
    AliasTooLong(usize),

    #[error("Alias contains characters outside a-z, A-Z, 0-9: '{0}'")]
    InvalidAliasFormat(String),

    #[error("Alias '{0}' is reserved and not available")]
    ReservedAlias(String),

    #[error("Target URL cannot be empty")]
    EmptyUrl,

    #[error("Target URL must be absolute (http:// or https://): '{0}'")]
    MissingScheme(String),
}

/// Validate a user-chosen short-link alias
///
/// Rules:
/// - 8 to 20 characters
/// - ASCII alphanumeric only
/// - Not one of the reserved route names
pub fn validate_alias(alias: &str) -> Result<(), LinkValidationError> {
    if alias.chars().count() < MIN_ALIAS_LENGTH {
        return Err(LinkValidationError::AliasTooShort(MIN_ALIAS_LENGTH));
    }

    if alias.chars().count() > MAX_ALIAS_LENGTH {
        return Err(LinkValidationError::AliasTooLong(MAX_ALIAS_LENGTH));
    }

    if !ALIAS_PATTERN.is_match(alias) {
        return Err(LinkValidationError::InvalidAliasFormat(alias.to_string()));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(LinkValidationError::ReservedAlias(alias.to_string()));
    }

    Ok(())
}

/// Validate the long URL a short link points at
///
/// Rules:
/// - Non-empty
/// - Absolute, with an http or https scheme
pub fn validate_long_url(url: &str) -> Result<(), LinkValidationError> {
    if url.is_empty() {
        return Err(LinkValidationError::EmptyUrl);
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(LinkValidationError::MissingScheme(url.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Alias tests
    #[test]
    fn test_valid_aliases() {
        assert!(validate_alias("anyalias").is_ok());
        assert!(validate_alias("Alias123").is_ok());
        assert!(validate_alias("a".repeat(20).as_str()).is_ok());
    }

    #[test]
    fn test_alias_too_short() {
        assert_eq!(
            validate_alias("short1"),
            Err(LinkValidationError::AliasTooShort(MIN_ALIAS_LENGTH))
        );
        assert_eq!(
            validate_alias(""),
            Err(LinkValidationError::AliasTooShort(MIN_ALIAS_LENGTH))
        );
    }

    #[test]
    fn test_alias_too_long() {
        let alias = "a".repeat(21);
        assert_eq!(
            validate_alias(&alias),
            Err(LinkValidationError::AliasTooLong(MAX_ALIAS_LENGTH))
        );
    }

    #[test]
    fn test_alias_with_invalid_characters() {
        assert_eq!(
            validate_alias("any_alias"),
            Err(LinkValidationError::InvalidAliasFormat(
                "any_alias".to_string()
            ))
        );
        assert!(validate_alias("alias-123").is_err());
        assert!(validate_alias("алиасалиас").is_err());
    }

    #[test]
    fn test_reserved_aliases_rejected() {
        // "register" satisfies the length and format rules, so only the
        // reserved-name check can stop it
        assert_eq!(
            validate_alias("register"),
            Err(LinkValidationError::ReservedAlias("register".to_string()))
        );
        assert_eq!(
            validate_alias("subscriptions"),
            Err(LinkValidationError::ReservedAlias(
                "subscriptions".to_string()
            ))
        );
        assert_eq!(
            validate_alias("create_link"),
            Err(LinkValidationError::InvalidAliasFormat(
                "create_link".to_string()
            ))
        );
    }

    // Long URL tests
    #[test]
    fn test_valid_long_urls() {
        assert!(validate_long_url("https://www.gismeteo.ru/weather-moscow-4368/weekend/#dataset").is_ok());
        assert!(validate_long_url("http://example.com").is_ok());
    }

    #[test]
    fn test_empty_long_url() {
        assert_eq!(validate_long_url(""), Err(LinkValidationError::EmptyUrl));
    }

    #[test]
    fn test_long_url_without_scheme() {
        assert_eq!(
            validate_long_url("www.gismeteo.ru/weather-moscow-4368/weekend/#dataset"),
            Err(LinkValidationError::MissingScheme(
                "www.gismeteo.ru/weather-moscow-4368/weekend/#dataset".to_string()
            ))
        );
    }
}
