//! API endpoint configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when nothing else is configured (local API server).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Where the inventory API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config, trimming whitespace and trailing slashes from `base_url`.
    /// Blank input falls back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Config baked in at build time from `INVENTORY_API_URL`.
    ///
    /// The browser bundle has no process environment, so this is how the
    /// WASM build is pointed at a deployment.
    #[must_use]
    pub fn from_compile_env() -> Self {
        Self::new(option_env!("INVENTORY_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Absolute URL for an API path such as `/inventory`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
