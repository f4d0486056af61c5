//! `AskWeather` - rule-based weather question answering
//!
//! This library turns a free-text weather question into a structured
//! query (metric, locations, time category) and resolves it against the
//! OpenWeatherMap current-conditions API, one lookup per location.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod nlu;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::AskWeatherConfig;
pub use error::AskWeatherError;
pub use models::{LookupFailure, Metric, MetricReading, StructuredQuery, TimeCategory};
pub use nlu::parse_query;
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AskWeatherError>;
