//! Currency Code Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO-style 3-letter currency code
///
/// Case is not meaningful for currency codes, so input is uppercased
/// first and the format check runs on the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let canonical = raw.into().trim().to_ascii_uppercase();

        if canonical.len() != 3 || !canonical.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(AppError::bad_request(
                "Currency must be a 3-letter code (e.g. ZAR, USD)",
            ));
        }

        Ok(Self(canonical))
    }

    /// Restore from database without re-validation
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_is_canonicalized_then_accepted() {
        let code = CurrencyCode::new("usd").unwrap();
        assert_eq!(code.as_str(), "USD");

        let code = CurrencyCode::new("  zar ").unwrap();
        assert_eq!(code.as_str(), "ZAR");
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(CurrencyCode::new("").is_err());
        assert!(CurrencyCode::new("US").is_err());
        assert!(CurrencyCode::new("USDT").is_err());
        assert!(CurrencyCode::new("U5D").is_err());
        assert!(CurrencyCode::new("U$D").is_err());
    }
}
