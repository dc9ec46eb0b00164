//! Payment Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Payment-specific result type alias
pub type PaymentResult<T> = Result<T, PaymentError>;

/// Payment-specific error variants
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Malformed input rejected by the validation gate
    #[error("{0}")]
    Validation(String),

    /// Payment does not exist, or is not visible to the caller
    ///
    /// Another customer's payment answers exactly like a nonexistent
    /// one, so identifiers cannot be probed.
    #[error("Payment not found")]
    NotFound,

    /// Status transition not allowed (transitions are forward-only)
    #[error("Cannot move payment from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PaymentError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PaymentError::Validation(_) => StatusCode::BAD_REQUEST,
            PaymentError::NotFound => StatusCode::NOT_FOUND,
            PaymentError::InvalidTransition { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            PaymentError::Database(_) | PaymentError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PaymentError::Validation(_) => ErrorKind::BadRequest,
            PaymentError::NotFound => ErrorKind::NotFound,
            PaymentError::InvalidTransition { .. } => ErrorKind::UnprocessableEntity,
            PaymentError::Database(_) | PaymentError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, keeping internal detail out of responses
    pub fn to_app_error(&self) -> AppError {
        match self {
            PaymentError::Database(_) | PaymentError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            PaymentError::Database(e) => {
                tracing::error!(error = %e, "Payment database error");
            }
            PaymentError::Internal(msg) => {
                tracing::error!(message = %msg, "Payment internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Payment error");
            }
        }
    }
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for PaymentError {
    fn from(err: AppError) -> Self {
        if err.kind() == ErrorKind::BadRequest {
            PaymentError::Validation(err.message().to_string())
        } else {
            PaymentError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            PaymentError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(PaymentError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            PaymentError::InvalidTransition {
                from: "completed".into(),
                to: "pending".into()
            }
            .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_internal_errors_are_opaque() {
        let err = PaymentError::Internal("pool exhausted".into());
        let app = err.to_app_error();
        assert_eq!(app.status_code(), 500);
        assert!(!app.message().contains("pool"));
    }
}
