//! Authenticate Use Case
//!
//! Verifies credentials, drives the lockout state machine, and issues a
//! signed session token on success.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_number::AccountNumber, account_password::RawPassword, email::Email,
    session_token::SessionToken,
};
use crate::error::{AuthError, AuthResult};

/// Authentication input (raw, untrusted strings)
pub struct AuthenticateInput {
    /// Account number (customers) or email (staff)
    pub identifier: String,
    /// Password as typed
    pub password: String,
}

/// Authentication output
#[derive(Debug)]
pub struct AuthenticateOutput {
    /// Signed session token for the cookie
    pub session_token: String,
    /// The authenticated account
    pub account: Account,
}

/// Authenticate use case
pub struct AuthenticateUseCase<R>
where
    R: AccountRepository,
{
    account_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> AuthenticateUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(account_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    /// Execute authentication
    ///
    /// Check order is fixed and security-relevant:
    /// 1. identifier shape (malformed input never reaches storage)
    /// 2. account existence (collapsed into InvalidCredentials)
    /// 3. deactivation (wins over lockout)
    /// 4. lockout
    /// 5. password comparison
    pub async fn execute(&self, input: AuthenticateInput) -> AuthResult<AuthenticateOutput> {
        let account = if input.identifier.contains('@') {
            // Staff sign in by email
            let email =
                Email::new(&input.identifier).map_err(|_| AuthError::InvalidCredentials)?;
            self.account_repo.find_by_email(&email).await?
        } else {
            let account_number = AccountNumber::new(&input.identifier)
                .map_err(|_| AuthError::InvalidCredentials)?;
            self.account_repo
                .find_by_account_number(&account_number)
                .await?
        };

        // Unknown identifier and wrong password are indistinguishable
        let mut account = account.ok_or(AuthError::InvalidCredentials)?;

        if !account.can_login() {
            return Err(AuthError::Deactivated);
        }

        if account.is_locked() {
            return Err(AuthError::Locked {
                minutes_remaining: account.lock_remaining_minutes(),
            });
        }

        let raw_password = RawPassword::for_login(input.password);
        if !account.password_hash.verify(&raw_password, self.config.pepper()) {
            account.record_failure(self.config.lockout_threshold, self.config.lockout_cooldown);
            self.account_repo.update(&account).await?;

            if account.is_locked() {
                tracing::warn!(
                    account_id = %account.account_id,
                    "Account locked after repeated failed logins"
                );
            }
            // The arming attempt still answers generically; only the
            // next attempt inside the window reports the lockout
            return Err(AuthError::InvalidCredentials);
        }

        account.record_login();
        self.account_repo.update(&account).await?;

        let session_token = SessionToken::issue(
            &account.account_id,
            account.role,
            self.config.token_ttl,
            &self.config.session_secret,
        );

        tracing::info!(
            account_id = %account.account_id,
            role = %account.role,
            "Account signed in"
        );

        Ok(AuthenticateOutput {
            session_token,
            account,
        })
    }
}
