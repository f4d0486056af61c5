//! Domain types shared by the extraction core and the lookup layer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AskWeatherError;

/// Canonical weather metric a question can ask about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Temperature,
    Humidity,
    Rainfall,
    WindSpeed,
    Pressure,
}

impl Metric {
    /// Canonical identifier used in API payloads and logs
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
            Metric::Rainfall => "rainfall",
            Metric::WindSpeed => "wind_speed",
            Metric::Pressure => "pressure",
        }
    }

    /// Units the provider reports this metric in (metric system)
    #[must_use]
    pub fn units(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
            Metric::Rainfall => "mm",
            Metric::WindSpeed => "m/s",
            Metric::Pressure => "hPa",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = AskWeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "temperature" => Ok(Metric::Temperature),
            "humidity" => Ok(Metric::Humidity),
            "rainfall" => Ok(Metric::Rainfall),
            "wind_speed" => Ok(Metric::WindSpeed),
            "pressure" => Ok(Metric::Pressure),
            other => Err(AskWeatherError::validation(format!(
                "unsupported metric '{other}'"
            ))),
        }
    }
}

/// Canonical time reference extracted from a question
///
/// Month names all collapse into the generic [`TimeCategory::Month`]
/// category, carrying the canonical month name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeCategory {
    Now,
    Today,
    Yesterday,
    Month(&'static str),
}

impl TimeCategory {
    /// Canonical string form ("now", "today", "yesterday", a month name)
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeCategory::Now => "now",
            TimeCategory::Today => "today",
            TimeCategory::Yesterday => "yesterday",
            TimeCategory::Month(name) => name,
        }
    }
}

impl fmt::Display for TimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TimeCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The structured record produced by the extraction core
///
/// Locations are lowercased, sanitized, and ordered as they appeared in
/// the question. An empty location set is a normal outcome ("what is the
/// wind speed now") that the caller decides how to handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredQuery {
    pub metric: Metric,
    pub locations: Vec<String>,
    pub time: TimeCategory,
}

/// One successful per-location lookup result
#[derive(Debug, Clone, Serialize)]
pub struct MetricReading {
    pub metric: Metric,
    pub location: String,
    /// Numeric value for the metric, absent when the provider omits the field
    pub value: Option<f64>,
    pub units: &'static str,
    pub provider: &'static str,
}

/// Per-location lookup failure marker
///
/// A failed location never aborts sibling lookups; it is reported
/// alongside the successful readings instead.
#[derive(Debug, Clone, Serialize)]
pub struct LookupFailure {
    pub location: String,
    pub error: String,
}
