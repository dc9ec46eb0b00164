//! Register Use Case
//!
//! Creates a customer account after the full validation gate passes.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_number::AccountNumber, account_password::{AccountPassword, RawPassword},
    email::Email, full_name::FullName, national_id::NationalId,
};
use crate::error::{AuthError, AuthResult};

/// Registration input (raw, untrusted strings)
pub struct RegisterInput {
    /// Legal full name
    pub full_name: String,
    /// National identifier (13 digits)
    pub national_id: String,
    /// Bank account number (6-20 digits)
    pub account_number: String,
    /// Optional email
    pub email: Option<String>,
    /// Password (policy-checked)
    pub password: String,
}

/// Registration output
#[derive(Debug)]
pub struct RegisterOutput {
    /// The created account
    pub account: Account,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    account_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(account_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    /// Execute registration
    ///
    /// Every field is validated before any storage access. The duplicate
    /// pre-check gives a friendly error, but the database unique
    /// constraints are the authoritative guard against races.
    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let full_name = FullName::new(&input.full_name)?;
        let national_id = NationalId::new(&input.national_id)?;
        let account_number = AccountNumber::new(&input.account_number)?;
        let email = match input.email.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(Email::new(raw)?),
            _ => None,
        };
        let raw_password = RawPassword::new(input.password)?;

        if self
            .account_repo
            .exists_with_identity(&account_number, &national_id, email.as_ref())
            .await?
        {
            return Err(AuthError::DuplicateIdentity);
        }

        let password_hash = AccountPassword::from_raw(&raw_password, self.config.pepper())?;
        let account = Account::new(full_name, national_id, account_number, email, password_hash);

        self.account_repo.create(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            "Account registered"
        );

        Ok(RegisterOutput { account })
    }
}
