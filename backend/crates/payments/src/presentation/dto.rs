//! API DTOs (Data Transfer Objects)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entity::payment::Payment;

// ============================================================================
// Submit
// ============================================================================

/// Payment submission request
///
/// No owner field: ownership is taken from the session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPaymentRequest {
    pub amount: Decimal,
    pub currency: String,
    pub payee_account: String,
    pub swift: String,
    pub provider: String,
}

// ============================================================================
// Payment
// ============================================================================

/// Payment returned to the client
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub payment_id: String,
    pub owner_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub payee_account: String,
    pub swift: String,
    pub provider: String,
    pub status: String,
    pub created_at: i64,
}

impl PaymentResponse {
    pub fn from_payment(payment: &Payment) -> Self {
        Self {
            payment_id: payment.payment_id.to_string(),
            owner_id: payment.owner_id.to_string(),
            amount: payment.amount.as_decimal(),
            currency: payment.currency.as_str().to_string(),
            payee_account: payment.payee_account.as_str().to_string(),
            swift: payment.swift.as_str().to_string(),
            provider: payment.provider.as_str().to_string(),
            status: payment.status.code().to_string(),
            created_at: payment.created_at.timestamp_millis(),
        }
    }
}
