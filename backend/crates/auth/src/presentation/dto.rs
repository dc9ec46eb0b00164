//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::account::Account;

// ============================================================================
// Register
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub national_id: String,
    pub account_number: String,
    pub email: Option<String>,
    pub password: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account number (customers) or email (staff)
    pub identifier: String,
    pub password: String,
}

// ============================================================================
// Account
// ============================================================================

/// Account info returned to the client
///
/// National ID and password hash never leave the server.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub account_id: String,
    pub full_name: String,
    pub account_number: String,
    pub email: Option<String>,
    pub role: String,
    pub status: String,
    pub last_login_at: Option<i64>,
}

impl AccountResponse {
    pub fn from_account(account: &Account) -> Self {
        Self {
            account_id: account.account_id.to_string(),
            full_name: account.full_name.as_str().to_string(),
            account_number: account.account_number.as_str().to_string(),
            email: account.email.as_ref().map(|e| e.as_str().to_string()),
            role: account.role.code().to_string(),
            status: account.status.code().to_string(),
            last_login_at: account.last_login_at.map(|t| t.timestamp_millis()),
        }
    }
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub account_id: Option<String>,
    pub role: Option<String>,
    pub expires_at_ms: Option<i64>,
}
