//! Account Number Value Object
//!
//! Bank account numbers are purely numeric, 6 to 20 digits.
//! Customers log in with their own account number; the same format
//! applies to payee account numbers on payment instructions.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum number of digits
pub const ACCOUNT_NUMBER_MIN_DIGITS: usize = 6;

/// Maximum number of digits
pub const ACCOUNT_NUMBER_MAX_DIGITS: usize = 20;

/// Validated account number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Create a new account number with validation
    ///
    /// Whitelist rule: 6-20 ASCII digits, nothing else. Surrounding
    /// whitespace is trimmed before validation.
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let value = raw.into().trim().to_string();

        if value.len() < ACCOUNT_NUMBER_MIN_DIGITS
            || value.len() > ACCOUNT_NUMBER_MAX_DIGITS
            || !value.chars().all(|c| c.is_ascii_digit())
        {
            return Err(AppError::bad_request("Invalid account number format"));
        }

        Ok(Self(value))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the account number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountNumber {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        AccountNumber::new(s)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
