//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::VerifySessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_role::AccountRole;
use crate::error::AuthError;
use crate::presentation::handlers::extract_session_token;
use kernel::id::AccountId;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Authenticated identity stored in request extensions
///
/// Role comes from storage at verification time, not from the token.
#[derive(Clone, Copy)]
pub struct CurrentAccount {
    pub account_id: AccountId,
    pub role: AccountRole,
}

impl CurrentAccount {
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }
}

/// Middleware that requires a valid session
///
/// On success, inserts [`CurrentAccount`] for downstream handlers.
pub async fn require_account<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_token(req.headers(), &state.config.session_cookie_name)
        .ok_or_else(|| AuthError::SessionMalformed.into_response())?;

    let use_case = VerifySessionUseCase::new(state.repo.clone(), state.config.clone());
    let session = use_case
        .execute(&token)
        .await
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(CurrentAccount {
        account_id: session.account.account_id,
        role: session.account.role,
    });

    Ok(next.run(req).await)
}

/// Extractor-style helper: read the current account or fail closed
pub fn current_account(req: &Request<Body>) -> Result<CurrentAccount, Response> {
    req.extensions()
        .get::<CurrentAccount>()
        .copied()
        .ok_or_else(|| AuthError::SessionMalformed.into_response())
}
