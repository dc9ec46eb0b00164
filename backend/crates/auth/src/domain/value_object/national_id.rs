//! National ID Value Object
//!
//! Fixed-length numeric national identifier (13 digits), unique per account.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exact number of digits in a national ID
pub const NATIONAL_ID_DIGITS: usize = 13;

/// Validated national identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NationalId(String);

impl NationalId {
    /// Create a new national ID with validation
    ///
    /// Whitelist rule: exactly 13 ASCII digits.
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let value = raw.into().trim().to_string();

        if value.len() != NATIONAL_ID_DIGITS || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::bad_request("ID number must be 13 digits"));
        }

        Ok(Self(value))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for NationalId {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        NationalId::new(s)
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_national_id() {
        assert!(NationalId::new("1234567890123").is_ok());
        assert!(NationalId::new(" 1234567890123 ").is_ok());
    }

    #[test]
    fn test_invalid_national_id() {
        assert!(NationalId::new("123456789012").is_err()); // 12 digits
        assert!(NationalId::new("12345678901234").is_err()); // 14 digits
        assert!(NationalId::new("123456789012a").is_err());
        assert!(NationalId::new("").is_err());
    }
}
