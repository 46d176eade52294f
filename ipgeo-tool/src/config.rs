//! Configuration for the geolocation client.

use std::time::Duration;

/// Base URL of the geolocation provider. The IP address is appended as the
/// only path segment.
pub const IPWHOIS_API_BASE: &str = "https://ipwho.is";

/// Transport settings for [`IpGeoClient`](crate::IpGeoClient).
///
/// No timeout is applied unless one is set here; the lookup is otherwise
/// bounded only by the transport's own defaults.
#[derive(Debug, Clone, Default)]
pub struct IpGeoConfig {
    /// Override of the provider base URL, used to point the client at a stub.
    pub base_url: Option<String>,
    /// Whole-request timeout.
    pub timeout: Option<Duration>,
}

impl IpGeoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a whole-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(IPWHOIS_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_provider() {
        let config = IpGeoConfig::default();
        assert_eq!(config.base_url(), "https://ipwho.is");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = IpGeoConfig::new()
            .with_base_url("http://127.0.0.1:9999")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.base_url(), "http://127.0.0.1:9999");
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    }
}
