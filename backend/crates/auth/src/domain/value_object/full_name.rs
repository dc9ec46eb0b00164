//! Full Name Value Object
//!
//! Legal name of the account holder.
//!
//! ## Invariants
//! - 2 to 100 characters after trimming
//! - Whitelist alphabet: ASCII letters, space, comma, period, apostrophe, hyphen
//!
//! Validation runs on the raw input; the accepted value is then
//! canonicalized by HTML-escaping the apostrophe (the only whitelisted
//! character with markup significance), so the stored form is safe to
//! render anywhere.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length for a full name (in characters)
pub const FULL_NAME_MIN_LENGTH: usize = 2;

/// Maximum length for a full name (in characters)
pub const FULL_NAME_MAX_LENGTH: usize = 100;

const ALLOWED_PUNCTUATION: &[char] = &[' ', ',', '.', '\'', '-'];

/// Validated, canonicalized full name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FullName(String);

impl FullName {
    /// Create a new full name: validate first, then canonicalize
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let trimmed = raw.into().trim().to_string();

        let char_count = trimmed.chars().count();
        if char_count < FULL_NAME_MIN_LENGTH || char_count > FULL_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Full name must be {}-{} characters",
                FULL_NAME_MIN_LENGTH, FULL_NAME_MAX_LENGTH
            )));
        }

        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphabetic() || ALLOWED_PUNCTUATION.contains(&c))
        {
            return Err(AppError::bad_request("Invalid full name format"));
        }

        Ok(Self(escape(&trimmed)))
    }

    /// Create from database value (stored canonicalized)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the canonicalized name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// HTML-escape the accepted name. The whitelist already excludes
/// `&<>"/`, so only the apostrophe needs replacing.
fn escape(name: &str) -> String {
    name.replace('\'', "&#x27;")
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(FullName::new("Jane Doe").is_ok());
        assert!(FullName::new("Smith, John Jr.").is_ok());
        assert!(FullName::new("Anne-Marie").is_ok());
        assert!(FullName::new("Jo").is_ok()); // exactly 2 chars
    }

    #[test]
    fn test_invalid_names() {
        assert!(FullName::new("J").is_err()); // too short
        assert!(FullName::new("a".repeat(101)).is_err()); // too long
        assert!(FullName::new("Jane Doe 3rd").is_err()); // digit
        assert!(FullName::new("<script>alert</script>").is_err());
        assert!(FullName::new("Jane_Doe").is_err()); // underscore
        assert!(FullName::new("   ").is_err()); // whitespace only
    }

    #[test]
    fn test_apostrophe_escaped_after_validation() {
        let name = FullName::new("O'Brien").unwrap();
        assert_eq!(name.as_str(), "O&#x27;Brien");
    }

    #[test]
    fn test_trimming() {
        let name = FullName::new("  Jane Doe  ").unwrap();
        assert_eq!(name.as_str(), "Jane Doe");
    }
}
