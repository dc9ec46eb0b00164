//! Use case tests against an in-memory repository

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::application::{
    AuthenticateInput, AuthenticateUseCase, RegisterInput, RegisterUseCase, VerifySessionUseCase,
    config::AuthConfig,
};
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_number::AccountNumber, account_password::{AccountPassword, RawPassword},
    account_role::AccountRole, account_status::AccountStatus, email::Email, full_name::FullName,
    national_id::NationalId,
};
use crate::error::{AuthError, AuthResult};
use kernel::id::AccountId;

#[derive(Clone, Default)]
struct MemoryAccountRepository {
    accounts: Arc<Mutex<HashMap<Uuid, Account>>>,
}

impl MemoryAccountRepository {
    fn get(&self, account_id: &AccountId) -> Option<Account> {
        self.accounts
            .lock()
            .unwrap()
            .get(account_id.as_uuid())
            .cloned()
    }

    fn put(&self, account: Account) {
        self.accounts
            .lock()
            .unwrap()
            .insert(*account.account_id.as_uuid(), account);
    }
}

impl AccountRepository for MemoryAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.accounts.lock().unwrap();
        let duplicate = accounts.values().any(|a| {
            a.account_number == account.account_number
                || a.national_id == account.national_id
                || (a.email.is_some() && a.email == account.email)
        });
        if duplicate {
            return Err(AuthError::DuplicateIdentity);
        }
        accounts.insert(*account.account_id.as_uuid(), account.clone());
        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        Ok(self.get(account_id))
    }

    async fn find_by_account_number(
        &self,
        account_number: &AccountNumber,
    ) -> AuthResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .find(|a| &a.account_number == account_number)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .find(|a| a.email.as_ref() == Some(email))
            .cloned())
    }

    async fn exists_with_identity(
        &self,
        account_number: &AccountNumber,
        national_id: &NationalId,
        email: Option<&Email>,
    ) -> AuthResult<bool> {
        Ok(self.accounts.lock().unwrap().values().any(|a| {
            &a.account_number == account_number
                || &a.national_id == national_id
                || (email.is_some() && a.email.as_ref() == email)
        }))
    }

    async fn update(&self, account: &Account) -> AuthResult<()> {
        self.put(account.clone());
        Ok(())
    }
}

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::development())
}

fn register_input() -> RegisterInput {
    RegisterInput {
        full_name: "Jane O'Neil".to_string(),
        national_id: "9001015009087".to_string(),
        account_number: "1234567890".to_string(),
        email: None,
        password: "Str0ng!Pass".to_string(),
    }
}

async fn register_account(
    repo: &MemoryAccountRepository,
    config: &Arc<AuthConfig>,
) -> Account {
    RegisterUseCase::new(Arc::new(repo.clone()), config.clone())
        .execute(register_input())
        .await
        .unwrap()
        .account
}

fn seed_staff(repo: &MemoryAccountRepository, email: &str, password: &str) -> Account {
    let raw = RawPassword::new(password.to_string()).unwrap();
    let account = Account::new_staff(
        FullName::new("Sam Clerk").unwrap(),
        NationalId::new("8202204800082").unwrap(),
        AccountNumber::new("555000111").unwrap(),
        Email::new(email).unwrap(),
        AccountPassword::from_raw(&raw, None).unwrap(),
        AccountRole::Employee,
    );
    repo.put(account.clone());
    account
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_and_login_roundtrip() {
    let repo = MemoryAccountRepository::default();
    let config = test_config();

    let account = register_account(&repo, &config).await;
    assert_eq!(account.role, AccountRole::Customer);
    // Apostrophe is escaped at the validation gate
    assert_eq!(account.full_name.as_str(), "Jane O&#x27;Neil");

    let output = AuthenticateUseCase::new(Arc::new(repo), config)
        .execute(AuthenticateInput {
            identifier: "1234567890".to_string(),
            password: "Str0ng!Pass".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output.account.account_id, account.account_id);
    assert!(output.account.last_login_at.is_some());
    assert!(!output.session_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_identity() {
    let repo = MemoryAccountRepository::default();
    let config = test_config();
    register_account(&repo, &config).await;

    let use_case = RegisterUseCase::new(Arc::new(repo), config);
    let err = use_case.execute(register_input()).await.unwrap_err();
    assert!(matches!(err, AuthError::DuplicateIdentity));
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    let repo = MemoryAccountRepository::default();
    let use_case = RegisterUseCase::new(Arc::new(repo), test_config());

    let mut input = register_input();
    input.password = "alllowercase1!".to_string();
    let err = use_case.execute(input).await.unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));
}

#[tokio::test]
async fn test_register_rejects_malformed_fields() {
    let repo = MemoryAccountRepository::default();
    let config = test_config();

    // Script injection in the name field
    let mut input = register_input();
    input.full_name = "<script>alert(1)</script>".to_string();
    let err = RegisterUseCase::new(Arc::new(repo.clone()), config.clone())
        .execute(input)
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));

    // National ID must be exactly 13 digits
    let mut input = register_input();
    input.national_id = "12345".to_string();
    let err = RegisterUseCase::new(Arc::new(repo.clone()), config.clone())
        .execute(input)
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));

    // Nothing was stored
    assert!(repo.accounts.lock().unwrap().is_empty());
}

// ============================================================================
// Authentication and lockout
// ============================================================================

#[tokio::test]
async fn test_unknown_account_is_invalid_credentials() {
    let repo = MemoryAccountRepository::default();
    let use_case = AuthenticateUseCase::new(Arc::new(repo), test_config());

    let err = use_case
        .execute(AuthenticateInput {
            identifier: "9999999999".to_string(),
            password: "Str0ng!Pass".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));

    // Malformed identifier gives the same generic answer
    let repo = MemoryAccountRepository::default();
    let use_case = AuthenticateUseCase::new(Arc::new(repo), test_config());
    let err = use_case
        .execute(AuthenticateInput {
            identifier: "not-a-number!".to_string(),
            password: "whatever".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_lockout_cycle() {
    let repo = MemoryAccountRepository::default();
    let config = test_config();
    let account = register_account(&repo, &config).await;

    let use_case = AuthenticateUseCase::new(Arc::new(repo.clone()), config.clone());
    let wrong = || AuthenticateInput {
        identifier: "1234567890".to_string(),
        password: "Wr0ng!Pass".to_string(),
    };

    // All five failures answer generically; the fifth arms the lock
    for _ in 0..5 {
        let err = use_case.execute(wrong()).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    // Counter was reset when the lock armed
    let stored = repo.get(&account.account_id).unwrap();
    assert_eq!(stored.failed_login_attempts, 0);
    assert!(stored.is_locked());

    // The sixth attempt reports the lockout, even with the correct password
    let err = use_case
        .execute(AuthenticateInput {
            identifier: "1234567890".to_string(),
            password: "Str0ng!Pass".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Locked { minutes_remaining } if minutes_remaining == 15));

    // A locked-out attempt must not touch the counter
    let stored = repo.get(&account.account_id).unwrap();
    assert_eq!(stored.failed_login_attempts, 0);
    assert!(stored.is_locked());
}

#[tokio::test]
async fn test_expired_lock_allows_fresh_cycle() {
    let repo = MemoryAccountRepository::default();
    let config = test_config();
    let account = register_account(&repo, &config).await;

    let mut stored = repo.get(&account.account_id).unwrap();
    stored.lock_until = Some(Utc::now() - Duration::seconds(1));
    repo.put(stored);

    // Correct password works immediately after expiry
    let use_case = AuthenticateUseCase::new(Arc::new(repo.clone()), config.clone());
    let output = use_case
        .execute(AuthenticateInput {
            identifier: "1234567890".to_string(),
            password: "Str0ng!Pass".to_string(),
        })
        .await
        .unwrap();
    assert!(output.account.lock_until.is_none());
    assert_eq!(output.account.failed_login_attempts, 0);
}

#[tokio::test]
async fn test_deactivated_wins_over_lockout() {
    let repo = MemoryAccountRepository::default();
    let config = test_config();
    let account = register_account(&repo, &config).await;

    let mut stored = repo.get(&account.account_id).unwrap();
    stored.set_status(AccountStatus::Deactivated);
    stored.lock_until = Some(Utc::now() + Duration::minutes(10));
    repo.put(stored);

    let use_case = AuthenticateUseCase::new(Arc::new(repo), config);
    let err = use_case
        .execute(AuthenticateInput {
            identifier: "1234567890".to_string(),
            password: "Str0ng!Pass".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Deactivated));
}

#[tokio::test]
async fn test_staff_login_by_email() {
    let repo = MemoryAccountRepository::default();
    let config = test_config();
    seed_staff(&repo, "clerk@example.com", "Empl0yee!Pw");

    let use_case = AuthenticateUseCase::new(Arc::new(repo), config);
    let output = use_case
        .execute(AuthenticateInput {
            identifier: "Clerk@Example.com".to_string(),
            password: "Empl0yee!Pw".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output.account.role, AccountRole::Employee);
}

// ============================================================================
// Session verification
// ============================================================================

#[tokio::test]
async fn test_verify_session_roundtrip() {
    let repo = MemoryAccountRepository::default();
    let config = test_config();
    let account = register_account(&repo, &config).await;

    let auth = AuthenticateUseCase::new(Arc::new(repo.clone()), config.clone());
    let output = auth
        .execute(AuthenticateInput {
            identifier: "1234567890".to_string(),
            password: "Str0ng!Pass".to_string(),
        })
        .await
        .unwrap();

    let verify = VerifySessionUseCase::new(Arc::new(repo), config);
    let session = verify.execute(&output.session_token).await.unwrap();
    assert_eq!(session.account.account_id, account.account_id);
    assert_eq!(session.claims.sub, *account.account_id.as_uuid());
}

#[tokio::test]
async fn test_verify_session_rejects_garbage_and_expired() {
    let repo = MemoryAccountRepository::default();
    let mut config = AuthConfig::development();
    config.token_ttl = Duration::seconds(-1);
    let config = Arc::new(config);
    register_account(&repo, &config).await;

    let auth = AuthenticateUseCase::new(Arc::new(repo.clone()), config.clone());
    let output = auth
        .execute(AuthenticateInput {
            identifier: "1234567890".to_string(),
            password: "Str0ng!Pass".to_string(),
        })
        .await
        .unwrap();

    let verify = VerifySessionUseCase::new(Arc::new(repo), config);

    let err = verify.execute(&output.session_token).await.unwrap_err();
    assert!(matches!(err, AuthError::SessionExpired));

    let err = verify.execute("not.a.token").await.unwrap_err();
    assert!(matches!(err, AuthError::SessionMalformed));
}

#[tokio::test]
async fn test_verify_session_deactivated_account() {
    let repo = MemoryAccountRepository::default();
    let config = test_config();
    let account = register_account(&repo, &config).await;

    let auth = AuthenticateUseCase::new(Arc::new(repo.clone()), config.clone());
    let output = auth
        .execute(AuthenticateInput {
            identifier: "1234567890".to_string(),
            password: "Str0ng!Pass".to_string(),
        })
        .await
        .unwrap();

    // Deactivation takes effect even for an already issued token
    let mut stored = repo.get(&account.account_id).unwrap();
    stored.set_status(AccountStatus::Deactivated);
    repo.put(stored);

    let verify = VerifySessionUseCase::new(Arc::new(repo), config);
    let err = verify.execute(&output.session_token).await.unwrap_err();
    assert!(matches!(err, AuthError::Deactivated));
}
