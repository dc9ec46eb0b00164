//! Payment Entity

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, PaymentId};

use auth::domain::value_object::account_number::AccountNumber;

use crate::domain::value_object::{
    amount::Amount, currency_code::CurrencyCode, payment_status::PaymentStatus,
    provider::Provider, swift_code::SwiftCode,
};
use crate::error::{PaymentError, PaymentResult};

/// Payment entity
///
/// Owner is always the account that submitted the instruction, bound
/// from the verified session at creation and immutable afterwards.
/// Review happens through a separate back-office path; this entity
/// only enforces that its status never moves backward.
#[derive(Debug, Clone)]
pub struct Payment {
    /// Internal UUID identifier
    pub payment_id: PaymentId,
    /// Submitting account (from the session, never from the payload)
    pub owner_id: AccountId,
    /// Amount to transfer
    pub amount: Amount,
    /// Currency code
    pub currency: CurrencyCode,
    /// Payee account number
    pub payee_account: AccountNumber,
    /// SWIFT/BIC routing code
    pub swift: SwiftCode,
    /// Transfer provider tag
    pub provider: Provider,
    /// Lifecycle status
    pub status: PaymentStatus,
    /// When the payment passed review
    pub verified_at: Option<DateTime<Utc>>,
    /// Reviewing account
    pub verified_by: Option<AccountId>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// Create a new pending payment for an owner
    pub fn new(
        owner_id: AccountId,
        amount: Amount,
        currency: CurrencyCode,
        payee_account: AccountNumber,
        swift: SwiftCode,
        provider: Provider,
    ) -> Self {
        let now = Utc::now();
        Self {
            payment_id: PaymentId::new(),
            owner_id,
            amount,
            currency,
            payee_account,
            swift,
            provider,
            status: PaymentStatus::Pending,
            verified_at: None,
            verified_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether an account owns this payment
    pub fn is_owned_by(&self, account_id: &AccountId) -> bool {
        &self.owner_id == account_id
    }

    /// Mark as verified by a reviewer
    pub fn mark_verified(&mut self, reviewer: AccountId) -> PaymentResult<()> {
        self.transition_to(PaymentStatus::Verified)?;
        self.verified_at = Some(Utc::now());
        self.verified_by = Some(reviewer);
        Ok(())
    }

    /// Mark as rejected
    pub fn mark_rejected(&mut self) -> PaymentResult<()> {
        self.transition_to(PaymentStatus::Rejected)
    }

    /// Mark as completed (settled)
    pub fn mark_completed(&mut self) -> PaymentResult<()> {
        self.transition_to(PaymentStatus::Completed)
    }

    /// Move to a new status, enforcing forward-only transitions
    fn transition_to(&mut self, next: PaymentStatus) -> PaymentResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(PaymentError::InvalidTransition {
                from: self.status.code().to_string(),
                to: next.code().to_string(),
            });
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}
