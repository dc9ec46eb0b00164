//! Payments Backend Module
//!
//! International payment instructions submitted by authenticated
//! customers.
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Security Model
//! - Every field passes the validation gate before storage is touched
//! - Ownership comes from the verified session, never from the payload
//! - Listing and lookup are owner-scoped; a foreign payment ID answers
//!   exactly like a missing one

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use infra::postgres::PgPaymentRepository;
pub use presentation::router::payments_router;
