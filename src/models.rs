use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetCurrentWeatherRequest {
    #[schemars(description = "Latitude coordinate (-90 to 90)")]
    pub latitude: f64,
    #[schemars(description = "Longitude coordinate (-180 to 180)")]
    pub longitude: f64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    #[schemars(description = "Latitude coordinate (-90 to 90)")]
    pub latitude: f64,
    #[schemars(description = "Longitude coordinate (-180 to 180)")]
    pub longitude: f64,
    /// Number of forecast days; out-of-range values are clamped to 1-16
    #[serde(default = "default_forecast_days")]
    #[schemars(description = "Number of forecast days (1-16, default: 7)")]
    pub days: i64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetLocationRequest {
    #[schemars(description = "Location name to search for, e.g. 'New York' or 'Paris'")]
    pub location: String,
}

fn default_forecast_days() -> i64 {
    7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_request_days_defaults_to_seven() {
        let request: GetForecastRequest =
            serde_json::from_str(r#"{"latitude": 52.52, "longitude": 13.41}"#)
                .expect("should deserialize");
        assert_eq!(request.days, 7);
    }

    #[test]
    fn test_forecast_request_days_explicit() {
        let request: GetForecastRequest =
            serde_json::from_str(r#"{"latitude": 52.52, "longitude": 13.41, "days": 3}"#)
                .expect("should deserialize");
        assert_eq!(request.days, 3);
    }
}
