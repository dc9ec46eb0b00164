//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::account::Account;
use crate::domain::value_object::{
    account_number::AccountNumber, email::Email, national_id::NationalId,
};
use crate::error::AuthResult;
use kernel::id::AccountId;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Create a new account
    ///
    /// Must fail with a duplicate-identity error if the account number,
    /// national ID or email is already taken (the unique constraint is
    /// authoritative, not the pre-check).
    async fn create(&self, account: &Account) -> AuthResult<()>;

    /// Find account by ID
    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>>;

    /// Find account by account number
    async fn find_by_account_number(
        &self,
        account_number: &AccountNumber,
    ) -> AuthResult<Option<Account>>;

    /// Find account by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>>;

    /// Check whether any identity field is already taken
    async fn exists_with_identity(
        &self,
        account_number: &AccountNumber,
        national_id: &NationalId,
        email: Option<&Email>,
    ) -> AuthResult<bool>;

    /// Persist mutable state (lockout counters, timestamps, status, role)
    async fn update(&self, account: &Account) -> AuthResult<()>;
}
