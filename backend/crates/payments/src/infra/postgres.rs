//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use auth::domain::value_object::account_number::AccountNumber;
use kernel::id::{AccountId, PaymentId};

use crate::domain::entity::payment::Payment;
use crate::domain::repository::PaymentRepository;
use crate::domain::value_object::{
    amount::Amount, currency_code::CurrencyCode, payment_status::PaymentStatus,
    provider::Provider, swift_code::SwiftCode,
};
use crate::error::{PaymentError, PaymentResult};

/// PostgreSQL-backed payment repository
#[derive(Clone)]
pub struct PgPaymentRepository {
    pool: PgPool,
}

impl PgPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    payment_id,
    owner_id,
    amount,
    currency,
    payee_account,
    swift,
    provider,
    payment_status,
    verified_at,
    verified_by,
    created_at,
    updated_at
"#;

impl PaymentRepository for PgPaymentRepository {
    async fn create(&self, payment: &Payment) -> PaymentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO payments (
                payment_id,
                owner_id,
                amount,
                currency,
                payee_account,
                swift,
                provider,
                payment_status,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(payment.payment_id.as_uuid())
        .bind(payment.owner_id.as_uuid())
        .bind(payment.amount.as_decimal())
        .bind(payment.currency.as_str())
        .bind(payment.payee_account.as_str())
        .bind(payment.swift.as_str())
        .bind(payment.provider.as_str())
        .bind(payment.status.id())
        .bind(payment.created_at)
        .bind(payment.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_for_owner(
        &self,
        payment_id: &PaymentId,
        owner_id: &AccountId,
    ) -> PaymentResult<Option<Payment>> {
        // Owner lives in the WHERE clause: a foreign ID is
        // indistinguishable from a missing one
        let row = sqlx::query_as::<_, PaymentRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM payments WHERE payment_id = $1 AND owner_id = $2"
        ))
        .bind(payment_id.as_uuid())
        .bind(owner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_payment()).transpose()
    }

    async fn list_by_owner(&self, owner_id: &AccountId) -> PaymentResult<Vec<Payment>> {
        let rows = sqlx::query_as::<_, PaymentRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM payments WHERE owner_id = $1 ORDER BY created_at DESC"
        ))
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_payment()).collect()
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PaymentRow {
    payment_id: Uuid,
    owner_id: Uuid,
    amount: Decimal,
    currency: String,
    payee_account: String,
    swift: String,
    provider: String,
    payment_status: i16,
    verified_at: Option<DateTime<Utc>>,
    verified_by: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PaymentRow {
    fn into_payment(self) -> PaymentResult<Payment> {
        let status = PaymentStatus::from_id(self.payment_status).ok_or_else(|| {
            PaymentError::Internal(format!("Invalid status id: {}", self.payment_status))
        })?;

        Ok(Payment {
            payment_id: PaymentId::from_uuid(self.payment_id),
            owner_id: AccountId::from_uuid(self.owner_id),
            amount: Amount::from_db(self.amount),
            currency: CurrencyCode::from_db(self.currency),
            payee_account: AccountNumber::from_db(self.payee_account),
            swift: SwiftCode::from_db(self.swift),
            provider: Provider::from_db(self.provider),
            status,
            verified_at: self.verified_at,
            verified_by: self.verified_by.map(AccountId::from_uuid),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
