//! Submit Payment Use Case
//!
//! Validates and persists a payment instruction for an authenticated
//! owner.

use std::sync::Arc;

use auth::domain::value_object::account_number::AccountNumber;
use kernel::id::AccountId;
use rust_decimal::Decimal;

use crate::domain::entity::payment::Payment;
use crate::domain::repository::PaymentRepository;
use crate::domain::value_object::{
    amount::Amount, currency_code::CurrencyCode, provider::Provider, swift_code::SwiftCode,
};
use crate::error::PaymentResult;

/// Submission input (raw, untrusted values)
///
/// There is deliberately no owner field here; ownership comes from the
/// session.
pub struct SubmitPaymentInput {
    pub amount: Decimal,
    pub currency: String,
    pub payee_account: String,
    pub swift: String,
    pub provider: String,
}

/// Submit payment use case
pub struct SubmitPaymentUseCase<R>
where
    R: PaymentRepository,
{
    payment_repo: Arc<R>,
}

impl<R> SubmitPaymentUseCase<R>
where
    R: PaymentRepository,
{
    pub fn new(payment_repo: Arc<R>) -> Self {
        Self { payment_repo }
    }

    /// Execute submission for the verified session owner
    ///
    /// All field checks run before any storage access; the first
    /// failing rule is the reported reason.
    pub async fn execute(
        &self,
        owner_id: AccountId,
        input: SubmitPaymentInput,
    ) -> PaymentResult<Payment> {
        let amount = Amount::new(input.amount)?;
        let currency = CurrencyCode::new(&input.currency)?;
        let payee_account = AccountNumber::new(&input.payee_account)?;
        let swift = SwiftCode::new(&input.swift)?;
        let provider = Provider::new(&input.provider)?;

        let payment = Payment::new(owner_id, amount, currency, payee_account, swift, provider);

        self.payment_repo.create(&payment).await?;

        tracing::info!(
            payment_id = %payment.payment_id,
            owner_id = %payment.owner_id,
            currency = %payment.currency,
            "Payment submitted"
        );

        Ok(payment)
    }
}
