//! Amount Value Object

use kernel::error::app_error::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum accepted payment amount
const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Payment amount
///
/// Decimal rather than float so values survive storage round-trips
/// without drift. Bounded to `0 < amount <= 1e9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> AppResult<Self> {
        if value <= Decimal::ZERO {
            return Err(AppError::bad_request("Amount must be positive"));
        }
        if value > MAX_AMOUNT {
            return Err(AppError::bad_request("Amount exceeds the allowed maximum"));
        }
        Ok(Self(value))
    }

    /// Restore from database without re-validation
    pub fn from_db(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
