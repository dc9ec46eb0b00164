//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! "User not found" and "wrong password" are deliberately the same
//! variant ([`AuthError::InvalidCredentials`]) so callers cannot
//! enumerate registered accounts.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed input rejected by the validation gate
    #[error("{0}")]
    Validation(String),

    /// Account number or national ID already registered
    #[error("An account with this account number or ID number already exists")]
    DuplicateIdentity,

    /// Unknown account or wrong password (indistinguishable on purpose)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Account is temporarily locked after repeated failures
    #[error("Account locked due to failed attempts. Try again in {minutes_remaining} minutes")]
    Locked { minutes_remaining: i64 },

    /// Account has been deactivated
    #[error("Account has been deactivated")]
    Deactivated,

    /// Session token expired
    #[error("Session has expired")]
    SessionExpired,

    /// Session token missing, malformed or badly signed
    #[error("Invalid session token")]
    SessionMalformed,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::DuplicateIdentity => StatusCode::CONFLICT,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Locked { .. } => StatusCode::LOCKED,
            AuthError::Deactivated => StatusCode::FORBIDDEN,
            AuthError::SessionExpired | AuthError::SessionMalformed => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::DuplicateIdentity => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::SessionExpired
            | AuthError::SessionMalformed => ErrorKind::Unauthorized,
            AuthError::Locked { .. } => ErrorKind::Locked,
            AuthError::Deactivated => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Internal detail (database messages) is replaced with an opaque
    /// message; the caller never sees storage errors.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Locked { minutes_remaining } => {
                tracing::warn!(minutes_remaining, "Login attempt on locked account");
            }
            AuthError::Deactivated => {
                tracing::warn!("Login attempt on deactivated account");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.kind() == ErrorKind::BadRequest {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AuthError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::DuplicateIdentity.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Locked {
                minutes_remaining: 15
            }
            .status_code(),
            StatusCode::LOCKED
        );
        assert_eq!(AuthError::Deactivated.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AuthError::SessionExpired.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_internal_errors_are_opaque_to_callers() {
        let err = AuthError::Internal("argon2 parameter error".into());
        let app = err.to_app_error();
        assert_eq!(app.status_code(), 500);
        assert!(!app.message().contains("argon2"));
    }

    #[test]
    fn test_locked_carries_remaining_minutes() {
        let err = AuthError::Locked {
            minutes_remaining: 7,
        };
        assert!(err.to_string().contains("7 minutes"));
    }

    #[test]
    fn test_validation_roundtrip_from_app_error() {
        let err: AuthError = AppError::bad_request("Invalid email format").into();
        assert!(matches!(err, AuthError::Validation(ref m) if m == "Invalid email format"));
    }
}
