//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, Base64, random bytes)
//! - Password hashing (Argon2id) and the password strength policy
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
