use crate::client::{constant::DEFAULT_API_BASE_URL, model::error::ConfigError};

/// Runtime settings for the API client.
///
/// The browser has no process environment, so the backend URL is baked in at
/// build time through `API_BASE_URL`.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    /// Validates and normalizes a backend base URL.
    ///
    /// Trailing slashes are removed so endpoint paths can be appended as-is.
    ///
    /// # Returns
    /// - `Ok(ClientConfig)` - URL uses http or https
    /// - `Err(ConfigError::InvalidBaseUrl)` - URL is empty or uses another scheme
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = base_url.trim().trim_end_matches('/');

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            base_url: base_url.to_string(),
        })
    }

    /// Reads `API_BASE_URL` captured at compile time, falling back to the local default.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Absolute URL for an endpoint path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
