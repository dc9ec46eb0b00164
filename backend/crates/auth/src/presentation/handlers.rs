//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::cookie::CookieConfig;

use crate::application::config::AuthConfig;
use crate::application::{
    AuthenticateInput, AuthenticateUseCase, RegisterInput, RegisterUseCase, VerifySessionUseCase,
};
use crate::domain::repository::AccountRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AccountResponse, LoginRequest, RegisterRequest, SessionStatusResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        full_name: req.full_name,
        national_id: req.national_id,
        account_number: req.account_number,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(AccountResponse::from_account(&output.account)),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());

    let input = AuthenticateInput {
        identifier: req.identifier,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = session_cookie_config(&state.config).build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AccountResponse::from_account(&output.account)),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
///
/// Tokens are stateless, so logout only clears the client cookie; the
/// token stays valid until its expiry.
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> impl IntoResponse
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let cookie = session_cookie_config(&state.config).build_delete_cookie();

    (StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)])
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/status
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<SessionStatusResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = VerifySessionUseCase::new(state.repo.clone(), state.config.clone());

    let session = match extract_session_token(&headers, &state.config.session_cookie_name) {
        Some(token) => use_case.execute(&token).await.ok(),
        None => None,
    };

    match session {
        Some(session) => Ok(Json(SessionStatusResponse {
            authenticated: true,
            account_id: Some(session.account.account_id.to_string()),
            role: Some(session.account.role.code().to_string()),
            expires_at_ms: session.claims.expires_at().map(|t| t.timestamp_millis()),
        })),
        None => Ok(Json(SessionStatusResponse {
            authenticated: false,
            account_id: None,
            role: None,
            expires_at_ms: None,
        })),
    }
}

/// GET /api/auth/me
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<AccountResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_token(&headers, &state.config.session_cookie_name)
        .ok_or(crate::error::AuthError::SessionMalformed)?;

    let use_case = VerifySessionUseCase::new(state.repo.clone(), state.config.clone());
    let session = use_case.execute(&token).await?;

    Ok(Json(AccountResponse::from_account(&session.account)))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Session token from the cookie, falling back to a Bearer header
pub fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(token) = platform::cookie::extract_cookie(headers, cookie_name) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|t| t.to_string())
}

fn session_cookie_config(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.token_ttl_seconds()),
    }
}
