//! HTTP Handlers
//!
//! All routes here sit behind the auth middleware; the verified
//! identity arrives as a [`CurrentAccount`] request extension and is
//! the only source of ownership.

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use auth::middleware::CurrentAccount;
use kernel::id::PaymentId;

use crate::application::{
    GetPaymentUseCase, ListPaymentsUseCase, SubmitPaymentInput, SubmitPaymentUseCase,
};
use crate::domain::repository::PaymentRepository;
use crate::error::PaymentResult;
use crate::presentation::dto::{PaymentResponse, SubmitPaymentRequest};

/// Shared state for payment handlers
#[derive(Clone)]
pub struct PaymentAppState<R>
where
    R: PaymentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /api/payments
pub async fn submit_payment<R>(
    State(state): State<PaymentAppState<R>>,
    Extension(current): Extension<CurrentAccount>,
    Json(req): Json<SubmitPaymentRequest>,
) -> PaymentResult<impl IntoResponse>
where
    R: PaymentRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitPaymentUseCase::new(state.repo.clone());

    let input = SubmitPaymentInput {
        amount: req.amount,
        currency: req.currency,
        payee_account: req.payee_account,
        swift: req.swift,
        provider: req.provider,
    };

    let payment = use_case.execute(current.account_id, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(PaymentResponse::from_payment(&payment)),
    ))
}

/// GET /api/payments
pub async fn list_payments<R>(
    State(state): State<PaymentAppState<R>>,
    Extension(current): Extension<CurrentAccount>,
) -> PaymentResult<Json<Vec<PaymentResponse>>>
where
    R: PaymentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPaymentsUseCase::new(state.repo.clone());
    let payments = use_case.execute(&current.account_id).await?;

    Ok(Json(
        payments.iter().map(PaymentResponse::from_payment).collect(),
    ))
}

/// GET /api/payments/{id}
pub async fn get_payment<R>(
    State(state): State<PaymentAppState<R>>,
    Extension(current): Extension<CurrentAccount>,
    Path(payment_id): Path<Uuid>,
) -> PaymentResult<Json<PaymentResponse>>
where
    R: PaymentRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPaymentUseCase::new(state.repo.clone());
    let payment = use_case
        .execute(&PaymentId::from_uuid(payment_id), &current.account_id)
        .await?;

    Ok(Json(PaymentResponse::from_payment(&payment)))
}
