//! Client configuration options.

use std::sync::Arc;
use std::time::Duration;

use crate::validation::SchemaCache;

/// Configuration for the USPS client.
///
/// Explicit settings override the defaults; anything left untouched
/// keeps its default value.
///
/// # Example
///
/// ```
/// use usps_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_test_mode(true)
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// Production API origin
    pub base_url: String,
    /// Test environment origin
    pub test_url: String,
    /// Route calls to the test environment instead of production
    pub test_mode: bool,
    /// Request timeout
    pub timeout: Duration,
    /// Validate requests against the schema documents before dispatch
    pub validate_requests: bool,
    /// Optional external cache consulted for schema documents
    pub schema_cache: Option<Arc<dyn SchemaCache>>,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://apis.usps.com".to_string(),
            test_url: "https://apis-tem.usps.com".to_string(),
            test_mode: false,
            timeout: Duration::from_secs(30),
            validate_requests: true,
            schema_cache: None,
            user_agent: format!("usps-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// The origin requests are sent to, honoring the test-mode flag.
    pub fn resolved_base_url(&self) -> &str {
        if self.test_mode {
            &self.test_url
        } else {
            &self.base_url
        }
    }

    /// Set the production API origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the test environment origin.
    pub fn with_test_url(mut self, test_url: impl Into<String>) -> Self {
        self.test_url = test_url.into();
        self
    }

    /// Route calls to the test environment instead of production.
    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable request validation.
    pub fn with_validate_requests(mut self, enabled: bool) -> Self {
        self.validate_requests = enabled;
        self
    }

    /// Provide an external cache for schema documents.
    pub fn with_schema_cache(mut self, cache: Arc<dyn SchemaCache>) -> Self {
        self.schema_cache = Some(cache);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("test_url", &self.test_url)
            .field("test_mode", &self.test_mode)
            .field("timeout", &self.timeout)
            .field("validate_requests", &self.validate_requests)
            .field("schema_cache", &self.schema_cache.is_some())
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://apis.usps.com");
        assert_eq!(config.test_url, "https://apis-tem.usps.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.test_mode);
        assert!(config.validate_requests);
        assert!(config.schema_cache.is_none());
    }

    #[test]
    fn test_resolved_base_url_honors_test_mode() {
        let config = ClientConfig::default();
        assert_eq!(config.resolved_base_url(), "https://apis.usps.com");

        let config = config.with_test_mode(true);
        assert_eq!(config.resolved_base_url(), "https://apis-tem.usps.com");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(5))
            .with_validate_requests(false)
            .with_user_agent("custom-agent/2.0");

        assert_eq!(config.resolved_base_url(), "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.validate_requests);
        assert_eq!(config.user_agent, "custom-agent/2.0");
    }
}
