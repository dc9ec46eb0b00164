//! Use case tests against an in-memory repository

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::application::{
    GetPaymentUseCase, ListPaymentsUseCase, SubmitPaymentInput, SubmitPaymentUseCase,
};
use crate::domain::entity::payment::Payment;
use crate::domain::repository::PaymentRepository;
use crate::domain::value_object::payment_status::PaymentStatus;
use crate::error::{PaymentError, PaymentResult};
use kernel::id::{AccountId, PaymentId};

#[derive(Clone, Default)]
struct MemoryPaymentRepository {
    payments: Arc<Mutex<HashMap<Uuid, Payment>>>,
}

impl PaymentRepository for MemoryPaymentRepository {
    async fn create(&self, payment: &Payment) -> PaymentResult<()> {
        self.payments
            .lock()
            .unwrap()
            .insert(*payment.payment_id.as_uuid(), payment.clone());
        Ok(())
    }

    async fn find_for_owner(
        &self,
        payment_id: &PaymentId,
        owner_id: &AccountId,
    ) -> PaymentResult<Option<Payment>> {
        Ok(self
            .payments
            .lock()
            .unwrap()
            .get(payment_id.as_uuid())
            .filter(|p| &p.owner_id == owner_id)
            .cloned())
    }

    async fn list_by_owner(&self, owner_id: &AccountId) -> PaymentResult<Vec<Payment>> {
        let mut payments: Vec<Payment> = self
            .payments
            .lock()
            .unwrap()
            .values()
            .filter(|p| &p.owner_id == owner_id)
            .cloned()
            .collect();
        payments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(payments)
    }
}

fn valid_input() -> SubmitPaymentInput {
    SubmitPaymentInput {
        amount: Decimal::from(500),
        currency: "USD".to_string(),
        payee_account: "2000000002".to_string(),
        swift: "ABSAZAJJ".to_string(),
        provider: "SWIFT".to_string(),
    }
}

async fn submit(repo: &MemoryPaymentRepository, owner: AccountId) -> Payment {
    SubmitPaymentUseCase::new(Arc::new(repo.clone()))
        .execute(owner, valid_input())
        .await
        .unwrap()
}

// ============================================================================
// Submission
// ============================================================================

#[tokio::test]
async fn test_submit_creates_pending_payment_bound_to_owner() {
    let repo = MemoryPaymentRepository::default();
    let owner = AccountId::new();

    let payment = submit(&repo, owner).await;

    assert_eq!(payment.owner_id, owner);
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.amount.as_decimal(), Decimal::from(500));
}

#[tokio::test]
async fn test_submit_rejects_negative_amount() {
    let repo = MemoryPaymentRepository::default();
    let use_case = SubmitPaymentUseCase::new(Arc::new(repo.clone()));

    let mut input = valid_input();
    input.amount = Decimal::from(-5);
    let err = use_case.execute(AccountId::new(), input).await.unwrap_err();

    assert!(matches!(err, PaymentError::Validation(_)));
    assert!(repo.payments.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_canonicalizes_lowercase_currency_and_swift() {
    let repo = MemoryPaymentRepository::default();
    let use_case = SubmitPaymentUseCase::new(Arc::new(repo));

    let mut input = valid_input();
    input.currency = "usd".to_string();
    input.swift = "absazajj".to_string();
    let payment = use_case.execute(AccountId::new(), input).await.unwrap();

    assert_eq!(payment.currency.as_str(), "USD");
    assert_eq!(payment.swift.as_str(), "ABSAZAJJ");
}

#[tokio::test]
async fn test_submit_rejects_malformed_fields() {
    let repo = MemoryPaymentRepository::default();
    let use_case = SubmitPaymentUseCase::new(Arc::new(repo.clone()));

    let mut input = valid_input();
    input.payee_account = "12".to_string();
    assert!(matches!(
        use_case.execute(AccountId::new(), input).await.unwrap_err(),
        PaymentError::Validation(_)
    ));

    let mut input = valid_input();
    input.swift = "NOPE".to_string();
    assert!(matches!(
        use_case.execute(AccountId::new(), input).await.unwrap_err(),
        PaymentError::Validation(_)
    ));

    assert!(repo.payments.lock().unwrap().is_empty());
}

// ============================================================================
// Ownership
// ============================================================================

#[tokio::test]
async fn test_customers_only_see_their_own_payments() {
    let repo = MemoryPaymentRepository::default();
    let alice = AccountId::new();
    let bob = AccountId::new();

    submit(&repo, alice).await;
    let bobs_payment = submit(&repo, bob).await;

    let list = ListPaymentsUseCase::new(Arc::new(repo.clone()));
    let alices_view = list.execute(&alice).await.unwrap();
    assert_eq!(alices_view.len(), 1);
    assert_eq!(alices_view[0].owner_id, alice);

    // Guessing another customer's payment ID answers NotFound
    let get = GetPaymentUseCase::new(Arc::new(repo));
    let err = get
        .execute(&bobs_payment.payment_id, &alice)
        .await
        .unwrap_err();
    assert!(matches!(err, PaymentError::NotFound));
}

#[tokio::test]
async fn test_owner_reads_back_own_payment() {
    let repo = MemoryPaymentRepository::default();
    let owner = AccountId::new();

    let payment = submit(&repo, owner).await;

    let get = GetPaymentUseCase::new(Arc::new(repo));
    let fetched = get.execute(&payment.payment_id, &owner).await.unwrap();
    assert_eq!(fetched.payment_id, payment.payment_id);
    assert_eq!(fetched.owner_id, owner);
}

#[tokio::test]
async fn test_missing_payment_answers_not_found() {
    let repo = MemoryPaymentRepository::default();
    let get = GetPaymentUseCase::new(Arc::new(repo));

    let err = get
        .execute(&PaymentId::new(), &AccountId::new())
        .await
        .unwrap_err();
    assert!(matches!(err, PaymentError::NotFound));
}
