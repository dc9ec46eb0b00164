//! Account Entity
//!
//! One record per registered party: identity, credential and lockout
//! state live together because every authentication decision needs all
//! three in a single read.

use chrono::{DateTime, Duration, Utc};
use kernel::id::AccountId;

use crate::domain::value_object::{
    account_number::AccountNumber, account_password::AccountPassword, account_role::AccountRole,
    account_status::AccountStatus, email::Email, full_name::FullName, national_id::NationalId,
};

/// Account entity
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// Legal name (canonicalized)
    pub full_name: FullName,
    /// National identifier (13 digits, unique)
    pub national_id: NationalId,
    /// Bank account number (6-20 digits, unique)
    pub account_number: AccountNumber,
    /// Email, required for staff, optional for customers (unique if present)
    pub email: Option<Email>,
    /// Hashed password (Argon2id PHC string)
    pub password_hash: AccountPassword,
    /// Role (Customer, Employee, Admin)
    pub role: AccountRole,
    /// Status (Active, Deactivated)
    pub status: AccountStatus,
    /// Consecutive failed login attempts
    pub failed_login_attempts: u16,
    /// Account locked until (temporary lockout after failures)
    pub lock_until: Option<DateTime<Utc>>,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new customer account
    ///
    /// The public registration path only ever creates customers; staff
    /// accounts are provisioned administratively via [`Account::new_staff`].
    pub fn new(
        full_name: FullName,
        national_id: NationalId,
        account_number: AccountNumber,
        email: Option<Email>,
        password_hash: AccountPassword,
    ) -> Self {
        let now = Utc::now();
        Self {
            account_id: AccountId::new(),
            full_name,
            national_id,
            account_number,
            email,
            password_hash,
            role: AccountRole::Customer,
            status: AccountStatus::Active,
            failed_login_attempts: 0,
            lock_until: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a staff account (employee/admin provisioning path)
    pub fn new_staff(
        full_name: FullName,
        national_id: NationalId,
        account_number: AccountNumber,
        email: Email,
        password_hash: AccountPassword,
        role: AccountRole,
    ) -> Self {
        let mut account = Self::new(full_name, national_id, account_number, Some(email), password_hash);
        account.role = role;
        account
    }

    /// Check if the account is currently locked
    ///
    /// A lock in the past does not count; lock state is re-evaluated on
    /// every attempt, never cached.
    pub fn is_locked(&self) -> bool {
        match self.lock_until {
            Some(lock_until) => Utc::now() < lock_until,
            None => false,
        }
    }

    /// Whole minutes until the lock expires (at least 1 while locked)
    pub fn lock_remaining_minutes(&self) -> i64 {
        match self.lock_until {
            Some(lock_until) => {
                let remaining = lock_until - Utc::now();
                let secs = remaining.num_seconds();
                if secs <= 0 { 0 } else { (secs + 59) / 60 }
            }
            None => 0,
        }
    }

    /// Record a failed login attempt
    ///
    /// A stale (already expired) lock is discarded first, so the attempt
    /// counts as the start of a fresh cycle. When the counter reaches
    /// `threshold`, the lock is armed for `cooldown` and the counter
    /// resets to 0 immediately; after the lock expires the next cycle
    /// starts from a clean count.
    pub fn record_failure(&mut self, threshold: u16, cooldown: Duration) {
        let now = Utc::now();

        if let Some(lock_until) = self.lock_until
            && now >= lock_until
        {
            self.lock_until = None;
        }

        self.failed_login_attempts += 1;
        if self.failed_login_attempts >= threshold {
            self.lock_until = Some(now + cooldown);
            self.failed_login_attempts = 0;
        }
        self.updated_at = now;
    }

    /// Record a successful login: clear lockout state, stamp last login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.failed_login_attempts = 0;
        self.lock_until = None;
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// Check if the account status allows login
    pub fn can_login(&self) -> bool {
        self.status.can_login()
    }

    /// Update status (administrative path)
    pub fn set_status(&mut self, status: AccountStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Update role (administrative path; never reachable via self-service)
    pub fn set_role(&mut self, role: AccountRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }
}
