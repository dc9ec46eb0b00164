//! Entity Module

pub mod payment;
