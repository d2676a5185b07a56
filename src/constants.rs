/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-app/1.0";

/// Open-Meteo forecast API base URL
pub const FORECAST_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Open-Meteo geocoding API base URL
pub const GEOCODING_API_BASE: &str = "https://geocoding-api.open-meteo.com/v1";

/// Total per-request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Fields requested from the current-conditions endpoint
pub const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
is_day,precipitation,rain,showers,snowfall,weather_code,cloud_cover,pressure_msl,\
surface_pressure,wind_speed_10m,wind_direction_10m,wind_gusts_10m";

/// Fields requested from the daily-forecast endpoint
pub const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,\
precipitation_sum,precipitation_probability_max,wind_speed_10m_max,sunrise,sunset,\
uv_index_max";

/// User-facing message when a current-weather request fails
pub const CURRENT_WEATHER_UNAVAILABLE: &str =
    "Unable to fetch current weather data for this location.";

/// User-facing message when a forecast request fails
pub const FORECAST_UNAVAILABLE: &str = "Unable to fetch forecast data for this location.";

/// User-facing message when a geocoding request fails
pub const LOCATION_UNAVAILABLE: &str =
    "Unable to fetch location data. Please try a different location name.";
