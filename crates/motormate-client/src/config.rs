// Configuration for MotormateHttpClient

/// Which front end's error interceptor table applies.
///
/// The admin panel and the storefront react differently to the same statuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// 400 flattens validation errors and shows `message`, 401 shows `title`,
    /// 403/404/409 show `message`, 500 shows `message` and navigates away.
    #[default]
    Admin,
    /// 400 shows the first validation error, 401/403/404 show `title`,
    /// 500 navigates away silently.
    Storefront,
}

/// Configuration for the HTTP client
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// Backend base URL (e.g. "https://api.motormate.vn/")
    pub base_url: String,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 30000)
    pub read_timeout_ms: u64,
    /// Error interceptor table
    pub error_policy: ErrorPolicy,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
            error_policy: ErrorPolicy::Admin,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    /// Set the error interceptor table
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpClientConfig::default();
        assert_eq!(config.connect_timeout_ms, 5000);
        assert_eq!(config.read_timeout_ms, 30000);
        assert_eq!(config.error_policy, ErrorPolicy::Admin);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpClientConfig::new("http://localhost:8080")
            .with_timeouts(1000, 2000)
            .with_error_policy(ErrorPolicy::Storefront);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.connect_timeout_ms, 1000);
        assert_eq!(config.read_timeout_ms, 2000);
        assert_eq!(config.error_policy, ErrorPolicy::Storefront);
    }
}
