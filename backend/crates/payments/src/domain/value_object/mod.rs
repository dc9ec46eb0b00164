//! Value Object Module

pub mod amount;
pub mod currency_code;
pub mod payment_status;
pub mod provider;
pub mod swift_code;
