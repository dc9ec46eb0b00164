//! Provider Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transfer provider tag (free-form short label, e.g. "SWIFT")
///
/// Free text, so it follows the general rule: validate the raw input
/// against a whitelist first, escape afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Provider(String);

impl Provider {
    pub const MAX_LENGTH: usize = 40;

    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let trimmed = raw.into().trim().to_string();

        if trimmed.is_empty() || trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(AppError::bad_request(
                "Provider must be between 1 and 40 characters",
            ));
        }

        let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, ' ' | ',' | '.' | '\'' | '-');
        if !trimmed.chars().all(allowed) {
            return Err(AppError::bad_request("Provider contains invalid characters"));
        }

        Ok(Self(trimmed.replace('\'', "&#x27;")))
    }

    /// Restore from database without re-validation
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
