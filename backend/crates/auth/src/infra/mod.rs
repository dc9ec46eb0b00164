//! Infrastructure Layer
//!
//! Database-backed repository implementations.

pub mod postgres;

pub use postgres::PgAccountRepository;
