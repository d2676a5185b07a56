//! MCP server exposing the Open-Meteo weather API as callable tools.
//!
//! Three tools are served over a stdio transport: `get_current_weather`,
//! `get_forecast`, and `get_location`. Each issues a single outbound HTTP GET
//! and returns the upstream JSON body as text, or a fixed failure message.

pub mod constants;
pub mod fetch;
pub mod models;
pub mod service;

pub use fetch::{FetchError, FetcherConfig, WeatherFetcher};
pub use service::WeatherService;
