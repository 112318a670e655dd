pub mod ai_search;
pub mod leads;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;

use sigmavendor_catalog::{
    agency_json_schema, featured_agencies, filter_agencies, llm_agency_response,
    DEFAULT_FEATURED_LIMIT,
};
use sigmavendor_common::AgencyFilterOptions;

use crate::AppState;

// --- Query structs ---

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterParams {
    q: Option<String>,
    region: Option<String>,
    /// Comma-joined service category labels.
    services: Option<String>,
    price_min: Option<String>,
    price_max: Option<String>,
    certification: Option<String>,
}

#[derive(Deserialize)]
pub struct FeaturedParams {
    limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchBody {
    query: Option<String>,
    filters: Option<AgencyFilterOptions>,
}

// --- Helpers ---

/// Translate query-string parameters into filter options. Unknown tags flow
/// through untouched (the filter engine fails open to zero matches);
/// unparsable price numbers are treated as absent.
fn filter_options_from_params(params: FilterParams) -> AgencyFilterOptions {
    AgencyFilterOptions {
        query: params.q,
        region: params.region,
        services: params.services.map(|s| {
            s.split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect()
        }),
        price_min: params.price_min.and_then(|p| p.parse().ok()),
        price_max: params.price_max.and_then(|p| p.parse().ok()),
        certification: params.certification,
    }
}

// --- Handlers ---

pub async fn api_agencies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    let options = filter_options_from_params(params);
    let agencies = filter_agencies(state.catalog.agencies(), &options);
    Json(serde_json::json!({
        "agencies": agencies,
        "meta": { "total": agencies.len() },
    }))
}

pub async fn api_agencies_featured(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FeaturedParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(DEFAULT_FEATURED_LIMIT);
    let agencies = featured_agencies(state.catalog.agencies(), limit);
    Json(serde_json::json!({
        "agencies": agencies,
        "meta": { "total": agencies.len() },
    }))
}

pub async fn api_agency_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    match state.catalog.agency_by_slug(&slug) {
        Some(agency) => Json(serde_json::to_value(agency).unwrap_or_default()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "Agency not found"})),
        )
            .into_response(),
    }
}

/// Structured search over the directory. A top-level `query` wins over
/// `filters.query`; everything else comes from `filters`.
pub async fn api_search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchBody>,
) -> impl IntoResponse {
    let top_query = body.query.filter(|q| !q.is_empty());
    let query_applied = top_query.is_some();
    let mut options = body.filters.unwrap_or_default();
    if top_query.is_some() {
        options.query = top_query;
    }

    let agencies = filter_agencies(state.catalog.agencies(), &options);
    Json(serde_json::json!({
        "agencies": agencies,
        "meta": {
            "total": agencies.len(),
            "queryApplied": query_applied,
        },
    }))
}

/// Schema-plus-items envelope for external LLM tools.
pub async fn api_llm_agencies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    let options = filter_options_from_params(params);
    let agencies = filter_agencies(state.catalog.agencies(), &options);
    Json(llm_agency_response(&agencies))
}

pub async fn api_agency_schema() -> impl IntoResponse {
    Json(agency_json_schema())
}
