//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::payment::Payment;
use crate::error::PaymentResult;
use kernel::id::{AccountId, PaymentId};

/// Payment repository trait
///
/// Reads are owner-scoped at the interface: there is no way to fetch
/// a payment without naming the owner.
#[trait_variant::make(PaymentRepository: Send)]
pub trait LocalPaymentRepository {
    /// Create a new payment
    async fn create(&self, payment: &Payment) -> PaymentResult<()>;

    /// Find a payment by ID, restricted to its owner
    async fn find_for_owner(
        &self,
        payment_id: &PaymentId,
        owner_id: &AccountId,
    ) -> PaymentResult<Option<Payment>>;

    /// List payments owned by an account, newest first
    async fn list_by_owner(&self, owner_id: &AccountId) -> PaymentResult<Vec<Payment>>;
}
