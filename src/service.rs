use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::constants::{
    CURRENT_WEATHER_UNAVAILABLE, FORECAST_UNAVAILABLE, LOCATION_UNAVAILABLE,
};
use crate::fetch::WeatherFetcher;
use crate::models::{GetCurrentWeatherRequest, GetForecastRequest, GetLocationRequest};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct WeatherService {
    fetcher: Arc<WeatherFetcher>,
    tool_router: ToolRouter<Self>,
}

impl WeatherService {
    /// Creates a service targeting the production Open-Meteo endpoints
    pub fn new() -> Result<Self> {
        Ok(Self::with_fetcher(WeatherFetcher::with_defaults()?))
    }

    /// Creates a service around an existing fetcher
    pub fn with_fetcher(fetcher: WeatherFetcher) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            tool_router: Self::tool_router(),
        }
    }

    /// Fetches current conditions, mapping any failure to a fixed message
    pub async fn current_weather_text(&self, latitude: f64, longitude: f64) -> String {
        let url = self.fetcher.current_weather_url(latitude, longitude);
        match self.fetcher.fetch_json(&url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Current weather request failed: {}", e);
                CURRENT_WEATHER_UNAVAILABLE.to_string()
            }
        }
    }

    /// Fetches the daily forecast, mapping any failure to a fixed message
    pub async fn forecast_text(&self, latitude: f64, longitude: f64, days: i64) -> String {
        let url = self.fetcher.forecast_url(latitude, longitude, days);
        match self.fetcher.fetch_json(&url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Forecast request failed: {}", e);
                FORECAST_UNAVAILABLE.to_string()
            }
        }
    }

    /// Searches for a location by name, mapping any failure to a fixed message
    pub async fn location_text(&self, location: &str) -> String {
        let url = self.fetcher.location_url(location);
        match self.fetcher.fetch_json(&url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Location search failed: {}", e);
                LOCATION_UNAVAILABLE.to_string()
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for WeatherService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "open-meteo-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the Open-Meteo API. \
                Use 'get_location' to look up coordinates for a place name, then \
                'get_current_weather' or 'get_forecast' with those coordinates. \
                All tools return raw JSON from the upstream API."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl WeatherService {
    /// Gets current weather conditions for a coordinate pair
    #[tool(description = "Get current weather conditions for a location. Provide latitude and longitude (e.g., latitude: 52.52, longitude: 13.41 for Berlin). Returns temperature, humidity, precipitation, wind, pressure, and weather code as JSON.")]
    async fn get_current_weather(
        &self,
        Parameters(request): Parameters<GetCurrentWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting current weather for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let text = self
            .current_weather_text(request.latitude, request.longitude)
            .await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Gets the daily forecast for a coordinate pair
    #[tool(description = "Get a daily weather forecast for a location. Provide latitude and longitude, and optionally the number of days (1-16, default 7). Returns min/max temperature, precipitation, wind, sunrise/sunset, and UV index as JSON with timestamps local to the location.")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting {}-day forecast for coordinates: {}, {}",
            request.days,
            request.latitude,
            request.longitude
        );

        let text = self
            .forecast_text(request.latitude, request.longitude, request.days)
            .await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Searches for locations matching a free-text name
    #[tool(description = "Search for a location by name to get its coordinates. Provide a place name such as 'New York' or 'Paris'. Returns up to 5 matching locations with coordinates as JSON.")]
    async fn get_location(
        &self,
        Parameters(request): Parameters<GetLocationRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Searching for location: {}", request.location);

        let text = self.location_text(&request.location).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
