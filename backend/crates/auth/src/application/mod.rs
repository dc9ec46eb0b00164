//! Application Layer
//!
//! Use cases orchestrating domain logic and repositories.

pub mod authenticate;
pub mod config;
pub mod register;
pub mod verify_session;

// Re-exports
pub use authenticate::{AuthenticateInput, AuthenticateOutput, AuthenticateUseCase};
pub use config::AuthConfig;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use verify_session::{VerifiedSession, VerifySessionUseCase};
