//! List / Get Payment Use Cases
//!
//! Customers only ever see their own payments.

use std::sync::Arc;

use kernel::id::{AccountId, PaymentId};

use crate::domain::entity::payment::Payment;
use crate::domain::repository::PaymentRepository;
use crate::error::{PaymentError, PaymentResult};

/// List payments use case
pub struct ListPaymentsUseCase<R>
where
    R: PaymentRepository,
{
    payment_repo: Arc<R>,
}

impl<R> ListPaymentsUseCase<R>
where
    R: PaymentRepository,
{
    pub fn new(payment_repo: Arc<R>) -> Self {
        Self { payment_repo }
    }

    /// Payments owned by the caller, newest first
    pub async fn execute(&self, owner_id: &AccountId) -> PaymentResult<Vec<Payment>> {
        self.payment_repo.list_by_owner(owner_id).await
    }
}

/// Get single payment use case
pub struct GetPaymentUseCase<R>
where
    R: PaymentRepository,
{
    payment_repo: Arc<R>,
}

impl<R> GetPaymentUseCase<R>
where
    R: PaymentRepository,
{
    pub fn new(payment_repo: Arc<R>) -> Self {
        Self { payment_repo }
    }

    /// Fetch one payment, enforcing ownership
    ///
    /// A foreign payment answers NotFound, identical to a nonexistent
    /// identifier, so guessed IDs reveal nothing.
    pub async fn execute(
        &self,
        payment_id: &PaymentId,
        owner_id: &AccountId,
    ) -> PaymentResult<Payment> {
        self.payment_repo
            .find_for_owner(payment_id, owner_id)
            .await?
            .ok_or(PaymentError::NotFound)
    }
}
