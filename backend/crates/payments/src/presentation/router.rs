//! Payments Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::PaymentRepository;
use crate::infra::postgres::PgPaymentRepository;
use crate::presentation::handlers::{self, PaymentAppState};

/// Create the Payments router with PostgreSQL repository
///
/// The caller must layer the auth middleware on top; every route here
/// expects a verified session.
pub fn payments_router(repo: PgPaymentRepository) -> Router {
    payments_router_generic(repo)
}

/// Create a generic Payments router for any repository implementation
pub fn payments_router_generic<R>(repo: R) -> Router
where
    R: PaymentRepository + Clone + Send + Sync + 'static,
{
    let state = PaymentAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            post(handlers::submit_payment::<R>).get(handlers::list_payments::<R>),
        )
        .route("/{id}", get(handlers::get_payment::<R>))
        .with_state(state)
}
