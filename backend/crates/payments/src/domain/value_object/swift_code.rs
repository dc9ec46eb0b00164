//! SWIFT/BIC Code Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// SWIFT/BIC routing code
///
/// Structure: 4-letter bank code + 2-letter country code + 2
/// alphanumeric location characters + optional 3 alphanumeric branch
/// characters (8 or 11 total). Uppercased before the structure check,
/// same as [`super::currency_code::CurrencyCode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwiftCode(String);

impl SwiftCode {
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let canonical = raw.into().trim().to_ascii_uppercase();

        if !Self::structure_ok(&canonical) {
            return Err(AppError::bad_request(
                "SWIFT code must be 8 or 11 characters (e.g. ABSAZAJJ)",
            ));
        }

        Ok(Self(canonical))
    }

    fn structure_ok(code: &str) -> bool {
        let bytes = code.as_bytes();
        if bytes.len() != 8 && bytes.len() != 11 {
            return false;
        }
        // Bank code + country code: letters only
        if !bytes[..6].iter().all(|b| b.is_ascii_uppercase()) {
            return false;
        }
        // Location and branch: alphanumeric
        bytes[6..]
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    }

    /// Restore from database without re-validation
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SwiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
