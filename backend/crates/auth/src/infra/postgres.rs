//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_number::AccountNumber, account_password::AccountPassword, account_role::AccountRole,
    account_status::AccountStatus, email::Email, full_name::FullName, national_id::NationalId,
};
use crate::error::{AuthError, AuthResult};
use kernel::id::AccountId;

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    account_id,
    full_name,
    national_id,
    account_number,
    email,
    password_hash,
    account_role,
    account_status,
    failed_login_attempts,
    lock_until,
    last_login_at,
    created_at,
    updated_at
"#;

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                full_name,
                national_id,
                account_number,
                email,
                password_hash,
                account_role,
                account_status,
                failed_login_attempts,
                lock_until,
                last_login_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.full_name.as_str())
        .bind(account.national_id.as_str())
        .bind(account.account_number.as_str())
        .bind(account.email.as_ref().map(|e| e.as_str()))
        .bind(account.password_hash.as_phc_string())
        .bind(account.role.id())
        .bind(account.status.id())
        .bind(account.failed_login_attempts as i16)
        .bind(account.lock_until)
        .bind(account.last_login_at)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await;

        // The unique constraints on account_number / national_id / email are
        // the authoritative duplicate guard; the pre-check can race.
        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AuthError::DuplicateIdentity)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM accounts WHERE account_id = $1"
        ))
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_by_account_number(
        &self,
        account_number: &AccountNumber,
    ) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM accounts WHERE account_number = $1"
        ))
        .bind(account_number.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM accounts WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn exists_with_identity(
        &self,
        account_number: &AccountNumber,
        national_id: &NationalId,
        email: Option<&Email>,
    ) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM accounts
                WHERE account_number = $1
                   OR national_id = $2
                   OR ($3::text IS NOT NULL AND email = $3)
            )
            "#,
        )
        .bind(account_number.as_str())
        .bind(national_id.as_str())
        .bind(email.map(|e| e.as_str()))
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, account: &Account) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE accounts SET
                full_name = $2,
                email = $3,
                password_hash = $4,
                account_role = $5,
                account_status = $6,
                failed_login_attempts = $7,
                lock_until = $8,
                last_login_at = $9,
                updated_at = $10
            WHERE account_id = $1
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.full_name.as_str())
        .bind(account.email.as_ref().map(|e| e.as_str()))
        .bind(account.password_hash.as_phc_string())
        .bind(account.role.id())
        .bind(account.status.id())
        .bind(account.failed_login_attempts as i16)
        .bind(account.lock_until)
        .bind(account.last_login_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    full_name: String,
    national_id: String,
    account_number: String,
    email: Option<String>,
    password_hash: String,
    account_role: i16,
    account_status: i16,
    failed_login_attempts: i16,
    lock_until: Option<DateTime<Utc>>,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        let password_hash = AccountPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

        let role = AccountRole::from_id(self.account_role)
            .ok_or_else(|| AuthError::Internal(format!("Invalid role id: {}", self.account_role)))?;

        // An unknown status must not decode as Active: the deactivation
        // guard would fail open
        let status = AccountStatus::from_id(self.account_status).ok_or_else(|| {
            AuthError::Internal(format!("Invalid status id: {}", self.account_status))
        })?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            full_name: FullName::from_db(self.full_name),
            national_id: NationalId::from_db(self.national_id),
            account_number: AccountNumber::from_db(self.account_number),
            email: self.email.map(Email::from_db),
            password_hash,
            role,
            status,
            failed_login_attempts: self.failed_login_attempts as u16,
            lock_until: self.lock_until,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
