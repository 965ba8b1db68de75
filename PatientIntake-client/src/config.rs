//! Configuration for the backend API client.

/// Base URL used when no configuration is provided.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Settings for talking to the patient intake backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the backend, without a trailing slash
    pub base_url: String,
}

impl ClientConfig {
    /// Creates a configuration pointing at the given base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        // Trailing slashes would produce double slashes when paths are joined
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Builds a configuration from the environment.
    ///
    /// Reads `BACKEND_URL` and falls back to the default when it is unset.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        Self::with_base_url(base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BACKEND_URL)
    }
}
