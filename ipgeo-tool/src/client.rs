//! Geolocation lookup client.

use crate::config::IpGeoConfig;
use crate::record::{GeoRecord, parse_body};
use ipgeo_core::{IpGeoError, Result};
use ipgeo_telemetry::geo_lookup_span;
use reqwest::Client;
use tracing::{Instrument, debug, info, warn};

/// Client for the ipwho.is geolocation API.
///
/// Each [`lookup`](IpGeoClient::lookup) performs exactly one GET request and
/// keeps no state between calls. Clones share the underlying connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use ipgeo_tool::IpGeoClient;
///
/// let client = IpGeoClient::ipwhois()?;
/// let record = client.lookup("1.1.1.1").await?;
/// ```
#[derive(Debug, Clone)]
pub struct IpGeoClient {
    client: Client,
    config: IpGeoConfig,
}

impl IpGeoClient {
    pub fn new(config: IpGeoConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| IpGeoError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create a client for the public provider endpoint.
    pub fn ipwhois() -> Result<Self> {
        Self::new(IpGeoConfig::default())
    }

    pub fn config(&self) -> &IpGeoConfig {
        &self.config
    }

    /// The request URL for `ip`. The input is embedded as given; the provider
    /// decides what to do with anything that is not an address.
    pub fn lookup_url(&self, ip: &str) -> String {
        format!("{}/{}", self.config.base_url().trim_end_matches('/'), ip)
    }

    /// Fetch and validate the geolocation of `ip`.
    ///
    /// The HTTP status is not consulted: the provider reports failures such as
    /// an invalid query inside the JSON body, so every body goes through the
    /// same parse-and-validate path.
    ///
    /// # Errors
    ///
    /// - [`IpGeoError::Transport`] if the request or body read fails
    /// - [`IpGeoError::Parse`] if the body is not JSON
    /// - [`IpGeoError::SchemaValidation`] if the JSON is not a complete record
    pub async fn lookup(&self, ip: &str) -> Result<GeoRecord> {
        let url = self.lookup_url(ip);

        async {
            debug!(%url, "requesting geolocation");

            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| IpGeoError::Transport(format!("request to {} failed: {}", url, e)))?;

            let status = response.status();
            let body = response.text().await.map_err(|e| {
                IpGeoError::Transport(format!("failed to read response body: {}", e))
            })?;

            let record = parse_body(&body).inspect_err(|e| {
                warn!(%status, error = %e, "geolocation response rejected");
            })?;

            info!(
                %status,
                success = record.success,
                country = %record.country_code,
                "geolocation lookup complete"
            );
            Ok::<_, IpGeoError>(record)
        }
        .instrument(geo_lookup_span(ip))
        .await
    }
}
