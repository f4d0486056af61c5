//! OpenWeatherMap client for current-conditions lookups
//!
//! Thin plumbing around the provider: one HTTP call per location with
//! retry and backoff for transient failures, and a fan-out helper that
//! resolves a whole location set concurrently, collecting per-location
//! failures instead of aborting sibling lookups.

use crate::config::AskWeatherConfig;
use crate::models::{LookupFailure, Metric, MetricReading};
use crate::{AskWeatherError, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Provider tag reported alongside every reading
pub const PROVIDER: &str = "openweathermap";

/// HTTP client for the OpenWeatherMap current-conditions endpoint
///
/// The client can be constructed without an API key so the extraction
/// endpoints stay usable; every lookup then fails with a configuration
/// error until a key is provided.
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    max_retries: u32,
}

impl WeatherClient {
    /// Create a new client from the application configuration
    pub fn new(config: &AskWeatherConfig) -> Result<Self> {
        let api_key = config.weather.api_key.clone().filter(|key| !key.is_empty());
        if api_key.is_none() {
            warn!("No OpenWeatherMap API key configured; metric lookups will fail");
        }

        let timeout = Duration::from_secs(config.weather.timeout_seconds.into());
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("askweather/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AskWeatherError::provider(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.weather.base_url.trim_end_matches('/').to_string(),
            api_key,
            max_retries: config.weather.max_retries,
        })
    }

    /// Fetch current conditions for one location name
    #[instrument(skip(self))]
    pub async fn current(&self, location: &str) -> Result<CurrentConditions> {
        if location.is_empty() {
            return Err(AskWeatherError::validation("location is empty"));
        }
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AskWeatherError::config(
                "OpenWeatherMap API key is missing. Set weather.api_key or OWM_API_KEY.",
            )
        })?;

        let url = format!(
            "{}/weather?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(location),
            api_key
        );

        debug!("Requesting current conditions for '{}'", location);
        let response = self.send_with_retry(&url, location).await?;

        response.json::<CurrentConditions>().await.map_err(|e| {
            AskWeatherError::provider(format!(
                "Invalid weather data received for '{location}': {e}"
            ))
        })
    }

    /// Resolve a metric for every location concurrently
    ///
    /// Each location gets its own request with its own timeout; a failed
    /// lookup becomes a [`LookupFailure`] entry and never blocks or
    /// cancels the others. Providers only serve current data, so the
    /// caller's time category is accepted upstream and ignored here.
    pub async fn lookup_all(
        &self,
        metric: Metric,
        locations: &[String],
    ) -> (Vec<MetricReading>, Vec<LookupFailure>) {
        let lookups = locations.iter().map(|location| async move {
            match self.current(location).await {
                Ok(conditions) => Ok(MetricReading {
                    metric,
                    location: location.clone(),
                    value: conditions.metric_value(metric),
                    units: metric.units(),
                    provider: PROVIDER,
                }),
                Err(e) => {
                    warn!("Lookup failed for '{}': {}", location, e);
                    Err(LookupFailure {
                        location: location.clone(),
                        error: e.to_string(),
                    })
                }
            }
        });

        let outcomes = futures::future::join_all(lookups).await;

        let mut readings = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(reading) => readings.push(reading),
                Err(failure) => failures.push(failure),
            }
        }

        info!(
            metric = %metric,
            ok = readings.len(),
            failed = failures.len(),
            "resolved location set"
        );
        (readings, failures)
    }

    /// Issue a GET with retry and exponential backoff for transient errors
    async fn send_with_retry(&self, url: &str, location: &str) -> Result<reqwest::Response> {
        let max_attempts = self.max_retries + 1;
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    if status == StatusCode::UNAUTHORIZED {
                        return Err(AskWeatherError::provider(
                            "Invalid API key. Please check your OpenWeatherMap API key.",
                        ));
                    }

                    if status == StatusCode::NOT_FOUND {
                        return Err(AskWeatherError::provider(format!(
                            "Location not found: {location}"
                        )));
                    }

                    // Transient server-side failures are worth retrying.
                    let retryable =
                        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS;
                    if retryable && attempt < max_attempts {
                        let backoff = Duration::from_millis(500 * 2_u64.pow(attempt - 1));
                        warn!(
                            "Provider returned {} for '{}' (attempt {}/{}), retrying in {:.1}s",
                            status,
                            location,
                            attempt,
                            max_attempts,
                            backoff.as_secs_f64()
                        );
                        tokio::time::sleep(backoff).await;
                        continue;
                    }

                    return Err(AskWeatherError::provider(format!(
                        "Provider request failed with status {status}"
                    )));
                }
                Err(e) => {
                    if attempt < max_attempts {
                        let backoff = Duration::from_millis(500 * 2_u64.pow(attempt - 1));
                        warn!(
                            "Network error for '{}' (attempt {}/{}): {}, retrying in {:.1}s",
                            location,
                            attempt,
                            max_attempts,
                            e,
                            backoff.as_secs_f64()
                        );
                        tokio::time::sleep(backoff).await;
                        continue;
                    }

                    return Err(AskWeatherError::provider(format!(
                        "Network error after {max_attempts} attempts: {e}"
                    )));
                }
            }
        }
    }
}

/// Subset of the OpenWeatherMap current-conditions response we read
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    /// Resolved location name as the provider reports it
    pub name: Option<String>,
    pub main: Option<MainConditions>,
    pub wind: Option<WindConditions>,
    pub rain: Option<RainVolume>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainConditions {
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindConditions {
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RainVolume {
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h")]
    pub three_hours: Option<f64>,
}

impl CurrentConditions {
    /// Project the requested metric out of the response
    ///
    /// Rainfall falls back from the 1h volume to the 3h volume and then
    /// to zero: the provider omits the `rain` block entirely when it is
    /// not raining.
    #[must_use]
    pub fn metric_value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Temperature => self.main.as_ref().and_then(|m| m.temp),
            Metric::Humidity => self.main.as_ref().and_then(|m| m.humidity),
            Metric::Pressure => self.main.as_ref().and_then(|m| m.pressure),
            Metric::WindSpeed => self.wind.as_ref().and_then(|w| w.speed),
            Metric::Rainfall => Some(
                self.rain
                    .as_ref()
                    .and_then(|r| r.one_hour.or(r.three_hours))
                    .unwrap_or(0.0),
            ),
        }
    }
}
