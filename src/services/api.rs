use crate::config::Config;
use crate::models::{
    error::SpotHintaError,
    prices::PriceList,
    region::{Region, Resolution},
};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use std::time::Duration;
use tracing::{debug, warn};

// API CONFIGURATION
/// Configuration for the spot-hinta.fi API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    region: Region,
    resolution: Resolution,
    timeout: Duration,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the region prices are fetched for by default.
    pub fn region(&self) -> Region {
        self.region
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Returns the timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Constructs the full URL for the today-and-tomorrow prices endpoint.
    pub fn prices_url(&self, region: Region, resolution: Resolution) -> String {
        format!(
            "{}{}?region={}&priceResolution={}",
            self.base_url.trim_end_matches('/'),
            Config::PRICES_PATH,
            region.code(),
            resolution.minutes()
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    region: Option<Region>,
    resolution: Option<Resolution>,
    timeout: Option<Duration>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    /// Overrides the default 10 second request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| Config::BASE_URL.to_string()),
            region: self.region.unwrap_or_default(),
            resolution: self.resolution.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(Config::DEFAULT_TIMEOUT),
        }
    }
}

// SPOT-HINTA CLIENT
/// HTTP client for the spot-hinta.fi API.
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SpotHintaClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl SpotHintaClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, SpotHintaError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client, owning its own HTTP connection pool.
    pub fn with_config(config: ApiConfig) -> Result<Self, SpotHintaError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| SpotHintaError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Creates a client on top of an existing `reqwest::Client`.
    ///
    /// The client is only used to issue requests; the configured timeout is
    /// applied per request.
    pub fn with_http_client(http: reqwest::Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches prices for the configured region and resolution.
    pub async fn energy_prices(&self) -> Result<PriceList, SpotHintaError> {
        self.energy_prices_for(self.config.region, self.config.resolution)
            .await
    }

    /// Fetches prices for today and, once published, tomorrow.
    pub async fn energy_prices_for(
        &self,
        region: Region,
        resolution: Resolution,
    ) -> Result<PriceList, SpotHintaError> {
        let url = self.config.prices_url(region, resolution);
        let body = self.fetch(&url).await?;

        let prices = PriceList::from_json(&body, region.time_zone(), resolution)?;
        if prices.is_empty() {
            return Err(SpotHintaError::NoData);
        }

        debug!(%region, count = prices.len(), "Parsed energy prices");
        Ok(prices)
    }

    /// Executes a single request and returns the JSON body.
    async fn fetch(&self, url: &str) -> Result<String, SpotHintaError> {
        debug!(url, "Requesting energy prices");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, Config::USER_AGENT)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "spot-hinta.fi returned an error status");
            return Err(SpotHintaError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_error(e))?;

        if !content_type.contains("application/json") {
            return Err(SpotHintaError::UnexpectedContentType { content_type, body });
        }

        Ok(body)
    }

    /// Converts a reqwest error into the matching `SpotHintaError`.
    fn classify_error(&self, error: reqwest::Error) -> SpotHintaError {
        if error.is_timeout() {
            SpotHintaError::Timeout(self.config.timeout)
        } else if error.is_connect() {
            SpotHintaError::Connection(format!("Failed to connect: {error}"))
        } else if error.is_body() || error.is_decode() {
            SpotHintaError::Connection(format!("Failed to read response: {error}"))
        } else {
            SpotHintaError::Connection(format!("Request error: {error}"))
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches prices for Finland using default configuration.
pub async fn fetch_prices() -> Result<PriceList, SpotHintaError> {
    SpotHintaClient::new()?.energy_prices().await
}

/// Fetches hourly prices for a specific region.
pub async fn fetch_prices_for_region(region: Region) -> Result<PriceList, SpotHintaError> {
    let config = ApiConfig::builder().region(region).build();
    SpotHintaClient::with_config(config)?.energy_prices().await
}
