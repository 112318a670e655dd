use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use sigmavendor_common::{Lead, LeadSubmission};

/// Accept a contact-form submission. Persistence is intentionally not wired
/// up yet: accepted leads get an id and a structured log line so nothing is
/// silently dropped once storage lands.
pub async fn api_leads(Json(submission): Json<LeadSubmission>) -> impl IntoResponse {
    if !submission.is_valid() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Name, email, and description are required"})),
        )
            .into_response();
    }

    let lead = Lead::new(submission);
    info!(
        lead_id = %lead.id,
        name = %lead.submission.name,
        email = %lead.submission.email,
        company_size = lead.submission.company_size.as_deref().unwrap_or("unspecified"),
        matched_agencies = lead.submission.matched_agencies.len(),
        "lead captured"
    );

    Json(serde_json::json!({
        "success": true,
        "message": "Lead captured successfully",
    }))
    .into_response()
}
