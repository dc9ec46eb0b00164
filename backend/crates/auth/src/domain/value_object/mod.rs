//! Value Object Module

pub mod account_id;
pub mod account_number;
pub mod account_password;
pub mod account_role;
pub mod account_status;
pub mod email;
pub mod full_name;
pub mod national_id;
pub mod session_token;
