use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use crate::constants::{
    CURRENT_FIELDS, DAILY_FIELDS, FORECAST_API_BASE, GEOCODING_API_BASE, REQUEST_TIMEOUT_SECS,
    USER_AGENT,
};

/// Uniform failure signal returned by the fetcher
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, or timeout failure before a response arrived
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status
    #[error("request failed with status {0}")]
    Status(StatusCode),

    /// The response body could not be read or was not valid JSON
    #[error("invalid response body: {0}")]
    Body(String),
}

/// Fetcher configuration
///
/// Base URLs default to the production Open-Meteo endpoints; tests point them
/// at a local mock server.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub forecast_base: String,
    pub geocoding_base: String,
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            forecast_base: FORECAST_API_BASE.to_string(),
            geocoding_base: GEOCODING_API_BASE.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Shared HTTP request/response normalization routine used by all tools
#[derive(Debug)]
pub struct WeatherFetcher {
    client: Client,
    config: FetcherConfig,
}

impl WeatherFetcher {
    /// Creates a fetcher with the given configuration
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Creates a fetcher targeting the production Open-Meteo endpoints
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(FetcherConfig::default())
    }

    /// Builds the current-conditions URL for a coordinate pair
    pub fn current_weather_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current={}",
            self.config.forecast_base, latitude, longitude, CURRENT_FIELDS
        )
    }

    /// Builds the daily-forecast URL, silently clamping `days` into [1, 16]
    pub fn forecast_url(&self, latitude: f64, longitude: f64, days: i64) -> String {
        let days = days.clamp(1, 16);
        format!(
            "{}/forecast?latitude={}&longitude={}&daily={}&forecast_days={}&timezone=auto",
            self.config.forecast_base, latitude, longitude, DAILY_FIELDS, days
        )
    }

    /// Builds the geocoding search URL, percent-encoding the free-text name
    pub fn location_url(&self, location: &str) -> String {
        format!(
            "{}/search?name={}&count=5&language=en&format=json",
            self.config.geocoding_base,
            urlencoding::encode(location)
        )
    }

    /// Performs one GET request and returns the response body as a canonical
    /// JSON string.
    ///
    /// The body is parsed and re-serialized so callers always receive a
    /// well-formed JSON text value. Transport failures, non-success statuses,
    /// and unparseable bodies all surface as [`FetchError`]; nothing panics or
    /// propagates past this boundary.
    pub async fn fetch_json(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url = %url, "Sending GET request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let value = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        serde_json::to_string(&value).map_err(|e| FetchError::Body(e.to_string()))
    }
}
