//! Application Layer
//!
//! Use cases orchestrating domain logic and repositories.

pub mod list_payments;
pub mod submit_payment;

// Re-exports
pub use list_payments::{GetPaymentUseCase, ListPaymentsUseCase};
pub use submit_payment::{SubmitPaymentInput, SubmitPaymentUseCase};
