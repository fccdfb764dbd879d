//! Strict credential field rules
//!
//! The rules applied to email and password once a form passes the naive
//! client-side check. Values are trimmed before evaluation, so
//! whitespace-only input is rejected as empty.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Special characters permitted in passwords
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+[]{}|;:'\",.<>?/`~";

/// ASCII mailbox: local part of alphanumerics plus `._%+-`, domain of
/// dot-separated alphanumeric labels. Unicode addresses are rejected.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .unwrap()
});

/// Errors that can occur during credential validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email is not a valid address: '{0}'")]
    InvalidEmailFormat(String),

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),

    #[error("Password contains invalid character: '{0}'")]
    InvalidPasswordCharacter(char),
}

/// Validate an email address
///
/// Rules:
/// - Non-empty after trimming
/// - ASCII `local@domain` form with a dotted domain
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserValidationError::InvalidEmailFormat(email.to_string()));
    }

    Ok(())
}

/// Validate a password
///
/// Rules:
/// - Non-empty after trimming
/// - Minimum 8 characters
/// - Only ASCII letters, digits, and [`PASSWORD_SPECIAL_CHARACTERS`]
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    let password = password.trim();

    if password.is_empty() {
        return Err(UserValidationError::EmptyPassword);
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    for c in password.chars() {
        if !c.is_ascii_alphanumeric() && !PASSWORD_SPECIAL_CHARACTERS.contains(c) {
            return Err(UserValidationError::InvalidPasswordCharacter(c));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Email tests
    #[test]
    fn test_valid_emails() {
        assert!(validate_email("test_name1@mail.ru").is_ok());
        assert!(validate_email("test_name2@ya.com").is_ok());
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("first.last+tag@sub.example.org").is_ok());
    }

    #[test]
    fn test_email_is_trimmed() {
        assert!(validate_email("  a@x.com  ").is_ok());
    }

    #[test]
    fn test_empty_email() {
        assert_eq!(validate_email(""), Err(UserValidationError::EmptyEmail));
        assert_eq!(
            validate_email("        "),
            Err(UserValidationError::EmptyEmail)
        );
    }

    #[test]
    fn test_email_without_at_sign() {
        assert_eq!(
            validate_email("testname"),
            Err(UserValidationError::InvalidEmailFormat(
                "testname".to_string()
            ))
        );
    }

    #[test]
    fn test_email_with_unicode() {
        assert!(validate_email("юзер@маил.ком").is_err());
    }

    #[test]
    fn test_email_with_invalid_local_characters() {
        assert_eq!(
            validate_email("!?test_name4@ya.com"),
            Err(UserValidationError::InvalidEmailFormat(
                "!?test_name4@ya.com".to_string()
            ))
        );
    }

    #[test]
    fn test_email_without_dotted_domain() {
        assert!(validate_email("user@localhost").is_err());
    }

    // Password tests
    #[test]
    fn test_valid_passwords() {
        assert!(validate_password("qwertyui").is_ok());
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("P@ssw0rd!").is_ok());
    }

    #[test]
    fn test_empty_password() {
        assert_eq!(
            validate_password(""),
            Err(UserValidationError::EmptyPassword)
        );
        assert_eq!(
            validate_password("        "),
            Err(UserValidationError::EmptyPassword)
        );
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(
            validate_password("1234567"),
            Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH))
        );
    }

    #[test]
    fn test_password_with_unicode() {
        assert_eq!(
            validate_password("мойпароль"),
            Err(UserValidationError::InvalidPasswordCharacter('м'))
        );
    }

    #[test]
    fn test_password_with_every_special_character() {
        let password: String = PASSWORD_SPECIAL_CHARACTERS.chars().collect();
        assert!(validate_password(&password).is_ok());
    }

    #[test]
    fn test_password_with_inner_space() {
        assert_eq!(
            validate_password("pass word 12"),
            Err(UserValidationError::InvalidPasswordCharacter(' '))
        );
    }
}
