//! Client configuration options.

use std::time::Duration;

use super::paginated::DEFAULT_PAGE_SIZE;

/// Configuration for the Amplify client.
///
/// # Example
///
/// ```
/// use amplify_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_page_size(100)
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// `limit` sent with each page request of a paginated endpoint
    pub page_size: u32,
    /// Return JSON error bodies of non-2xx responses as data instead of
    /// failing with [`Error::Api`](crate::Error::Api).
    ///
    /// Off by default. Only useful for callers that relied on the old
    /// pass-through behaviour.
    pub accept_error_payloads: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("amplify-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            page_size: DEFAULT_PAGE_SIZE,
            accept_error_payloads: false,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the page size used by paginated endpoints. Zero is clamped to one.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Enable or disable pass-through of non-2xx JSON bodies.
    pub fn with_accept_error_payloads(mut self, enabled: bool) -> Self {
        self.accept_error_payloads = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.page_size, 50);
        assert!(!config.accept_error_payloads);
        assert!(config.user_agent.starts_with("amplify-rs/"));
    }

    #[test]
    fn test_page_size_never_zero() {
        assert_eq!(ClientConfig::new().with_page_size(0).page_size, 1);
        assert_eq!(ClientConfig::new().with_page_size(200).page_size, 200);
    }
}
