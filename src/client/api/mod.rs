pub mod auth;
pub mod category;
pub mod client;
pub mod helper;
pub mod transport;
pub mod user;

#[cfg(test)]
pub(crate) mod test;

pub use client::ApiClient;

#[cfg(feature = "web")]
pub use client::BrowserApiClient;
