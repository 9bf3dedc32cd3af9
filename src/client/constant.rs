pub const SITE_NAME: &str = "Grocery Admin";

/// Local storage slot holding the bearer token written at login.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Used when `API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

pub const NETWORK_ERROR_MESSAGE: &str =
    "Unable to connect to the server. Please check your internet connection.";

pub const DEFAULT_ERROR_MESSAGE: &str = "Request failed";

pub const MIN_PASSWORD_LENGTH: usize = 8;
