pub mod error;
pub mod reset_password;
