//! HTTP API for extraction and metric lookups
//!
//! Thin plumbing over the extraction core and the weather client. The
//! only non-trivial decisions live in the core; handlers translate its
//! documented outcomes ("invalid query", "no location supplied") into
//! status codes and forward partial lookup failures as-is.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::models::{LookupFailure, Metric, MetricReading, StructuredQuery};
use crate::nlu;
use crate::weather::WeatherClient;

/// Shared handler state
pub type AppState = Arc<WeatherClient>;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    #[serde(flatten)]
    pub query: StructuredQuery,
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub query: StructuredQuery,
    pub results: Vec<MetricReading>,
    pub errors: Vec<LookupFailure>,
}

#[derive(Debug, Deserialize)]
pub struct MetricParams {
    pub metric: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<LookupFailure>,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.into(),
            failures: Vec::new(),
        }),
    )
}

fn all_lookups_failed(failures: Vec<LookupFailure>) -> ApiError {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorBody {
            error: "All location lookups failed".to_string(),
            failures,
        }),
    )
}

pub fn router(client: AppState) -> Router {
    Router::new()
        .route("/extract", post(extract))
        .route("/ask", post(ask))
        .route("/metric", get(get_metric))
        .with_state(client)
}

/// Run the extraction core only: text in, structured query out
async fn extract(Json(request): Json<ExtractRequest>) -> Result<Json<ExtractResponse>, ApiError> {
    let query = nlu::parse_query(&request.text).map_err(|e| bad_request(e.user_message()))?;
    Ok(Json(ExtractResponse {
        query,
        raw_text: request.text,
    }))
}

/// Full pipeline: parse the question, then resolve every location
async fn ask(
    State(client): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    let query = nlu::parse_query(&request.text).map_err(|e| bad_request(e.user_message()))?;

    if query.locations.is_empty() {
        return Err(bad_request(
            "No location supplied. Ask about a place, e.g. \"weather in Chennai\".",
        ));
    }

    let (results, errors) = client.lookup_all(query.metric, &query.locations).await;
    if results.is_empty() && !errors.is_empty() {
        return Err(all_lookups_failed(errors));
    }

    Ok(Json(AskResponse {
        query,
        results,
        errors,
    }))
}

/// Direct lookup: explicit metric plus a raw location list parameter
async fn get_metric(
    State(client): State<AppState>,
    Query(params): Query<MetricParams>,
) -> Result<Json<AskResponse>, ApiError> {
    let metric: Metric = params
        .metric
        .parse()
        .map_err(|e: crate::AskWeatherError| bad_request(e.user_message()))?;

    let raw_location = params.location.unwrap_or_default();
    let locations = nlu::split_location_list(&raw_location);
    if locations.is_empty() {
        return Err(bad_request(
            "The `location` query parameter is required and must name at least one place.",
        ));
    }

    let time = nlu::extract_time(&nlu::normalize(&raw_location));
    let query = StructuredQuery {
        metric,
        locations: locations.clone(),
        time,
    };

    let (results, errors) = client.lookup_all(metric, &locations).await;
    if results.is_empty() && !errors.is_empty() {
        return Err(all_lookups_failed(errors));
    }

    Ok(Json(AskResponse {
        query,
        results,
        errors,
    }))
}
