pub mod not_found;
pub mod reset_password;

pub use not_found::NotFound;
pub use reset_password::ResetPassword;
