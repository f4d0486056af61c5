//! The extraction core: free-text question to [`StructuredQuery`]
//!
//! The assembler normalizes the input once, then runs the metric, time,
//! and location extractors independently over the same immutable text.
//! Each extractor is a pure function; there is no shared parsing state
//! and no cross-request state of any kind.

pub mod location;
pub mod metric;
pub mod rules;
pub mod time;

pub use location::{extract_locations, sanitize_candidate, split_location_list};
pub use metric::extract_metric;
pub use time::extract_time;

use crate::models::StructuredQuery;
use crate::{AskWeatherError, Result};

/// Normalize raw question text: lowercase, trim, collapse whitespace
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Assemble a [`StructuredQuery`] from raw question text
///
/// Rejects empty or whitespace-only input as a validation error before
/// extraction runs; every other recognition miss resolves to a default
/// (temperature, "now") or to an empty location set. Idempotent: the
/// same input always yields an equal record.
pub fn parse_query(raw: &str) -> Result<StructuredQuery> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(AskWeatherError::validation("query text is empty"));
    }

    let query = StructuredQuery {
        metric: extract_metric(&normalized),
        locations: extract_locations(&normalized),
        time: extract_time(&normalized),
    };

    tracing::debug!(
        metric = %query.metric,
        time = %query.time,
        locations = query.locations.len(),
        "parsed query"
    );

    Ok(query)
}
