//! Verify Session Use Case
//!
//! Validates a session token and re-resolves the account, so role and
//! status changes take effect immediately even for live tokens.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::session_token::{
    SessionClaims, SessionToken, SessionTokenError,
};
use crate::error::{AuthError, AuthResult};

/// A verified session: live claims plus the current account state
#[derive(Debug)]
pub struct VerifiedSession {
    /// Claims from the token
    pub claims: SessionClaims,
    /// Account as currently stored (authoritative for role/status)
    pub account: Account,
}

/// Verify session use case
pub struct VerifySessionUseCase<R>
where
    R: AccountRepository,
{
    account_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> VerifySessionUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(account_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    /// Verify a token and load the account behind it
    pub async fn execute(&self, token: &str) -> AuthResult<VerifiedSession> {
        let claims = SessionToken::decode(token, &self.config.session_secret).map_err(
            |e| match e {
                SessionTokenError::Expired => AuthError::SessionExpired,
                SessionTokenError::Malformed => AuthError::SessionMalformed,
            },
        )?;

        // A valid signature on a deleted account still fails closed
        let account = self
            .account_repo
            .find_by_id(&claims.account_id())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !account.can_login() {
            return Err(AuthError::Deactivated);
        }

        Ok(VerifiedSession { claims, account })
    }
}
