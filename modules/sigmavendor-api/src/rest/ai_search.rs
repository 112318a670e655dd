use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::warn;

use sigmavendor_matcher::{fallback_result, AiSearchRequest, AiSearchResult, ChatTurn};

use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AiSearchBody {
    query: String,
    history: Vec<ChatTurn>,
}

pub async fn api_ai_search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AiSearchBody>,
) -> impl IntoResponse {
    let query = body.query.trim().to_string();
    if query.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Query is required"})),
        )
            .into_response();
    }

    let request = AiSearchRequest {
        query,
        history: body.history,
    };

    match state.matcher.search(&request).await {
        Ok(result) => Json(result_body(&result)).into_response(),
        Err(e) => {
            warn!(error = %e, "AI search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(result_body(&fallback_result())),
            )
                .into_response()
        }
    }
}

/// Response body for the AI search endpoint. Long descriptions are stripped
/// from the matched agencies to keep the payload small.
fn result_body(result: &AiSearchResult) -> serde_json::Value {
    let agencies: Vec<serde_json::Value> = result
        .agencies
        .iter()
        .filter_map(|agency| {
            let mut value = serde_json::to_value(agency).ok()?;
            if let Some(map) = value.as_object_mut() {
                map.remove("longDescription");
            }
            Some(value)
        })
        .collect();

    serde_json::json!({
        "summary": result.summary,
        "agencies": agencies,
        "agencyReasons": result.agency_reasons,
        "followUpQuestions": result.follow_up_questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigmavendor_common::Agency;
    use std::collections::HashMap;

    #[test]
    fn result_body_strips_long_descriptions() {
        let agency: Agency = serde_json::from_value(serde_json::json!({
            "id": "1",
            "slug": "a",
            "name": "A",
            "tagline": "",
            "shortDescription": "short",
            "longDescription": "long",
            "hqLocation": { "country": "Kenya" },
            "deliveryLocations": [],
            "regionsServed": ["Africa"],
            "services": ["Back Office"],
            "languages": ["English"],
            "priceRange": { "minUsdPerHour": 4, "maxUsdPerHour": 7 },
            "certifications": [],
            "isSigmaRemotePartner": false,
            "primaryUseCases": []
        }))
        .unwrap();

        let result = AiSearchResult {
            summary: "s".into(),
            agencies: vec![agency],
            agency_reasons: HashMap::from([("1".to_string(), "fits".to_string())]),
            follow_up_questions: vec![],
        };

        let body = result_body(&result);
        assert!(body["agencies"][0].get("longDescription").is_none());
        assert_eq!(body["agencies"][0]["shortDescription"], "short");
        assert_eq!(body["agencyReasons"]["1"], "fits");
    }

    #[test]
    fn fallback_body_is_complete_and_well_formed() {
        let body = result_body(&fallback_result());
        assert!(body["summary"].as_str().unwrap().contains("filters"));
        assert!(body["agencies"].as_array().unwrap().is_empty());
        assert_eq!(body["followUpQuestions"].as_array().unwrap().len(), 3);
    }
}
