use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use ai_client::{AiError, ChatCompletion, Message};
use sigmavendor_catalog::Catalog;
use sigmavendor_common::Agency;

use crate::context::build_agency_context;
use crate::prompt::build_messages;
use crate::reply::ModelReply;
use crate::types::{AiSearchRequest, AiSearchResult};

#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Provider(#[from] AiError),

    #[error("model reply rejected: {0}")]
    Reply(String),
}

/// Summary used whenever a search degrades to the fallback result.
pub const FALLBACK_SUMMARY: &str =
    "We couldn't run AI search right now. Please use the standard filters on the Agencies page.";

/// The three generic clarifying questions every fallback carries, steering
/// the user toward the deterministic filter UI.
pub const FALLBACK_QUESTIONS: [&str; 3] = [
    "What region are you interested in?",
    "What is your budget per hour?",
    "What type of services do you need?",
];

// =============================================================================
// AiMatcher
// =============================================================================

/// Single-shot request/response orchestrator. Stateless between calls:
/// exactly one outbound provider call per invocation, no retries, no
/// caching, and any conversation context is whatever history the caller
/// resubmits.
#[derive(Clone)]
pub struct AiMatcher {
    model: Arc<dyn ChatCompletion>,
    catalog: Arc<Catalog>,
}

impl AiMatcher {
    pub fn new(model: Arc<dyn ChatCompletion>, catalog: Arc<Catalog>) -> Self {
        Self { model, catalog }
    }

    /// Run the match call end to end. Callers are responsible for rejecting
    /// empty queries before invoking this.
    ///
    /// Errors cover the provider call itself and a reply that fails the
    /// shape contract; use [`AiMatcher::search_or_fallback`] for the
    /// never-fails form.
    pub async fn search(&self, request: &AiSearchRequest) -> Result<AiSearchResult, MatchError> {
        let agencies = self.catalog.agencies();
        let context = build_agency_context(agencies)
            .map_err(|e| MatchError::Reply(format!("context serialization failed: {e}")))?;

        let messages: Vec<Message> = build_messages(&context, &request.history, &request.query);

        let raw = self.model.complete(&messages).await?;
        debug!(bytes = raw.len(), "model reply received");

        let reply =
            ModelReply::parse(&raw).map_err(|e| MatchError::Reply(format!("invalid JSON: {e}")))?;

        Ok(self.reconcile(reply, &request.query))
    }

    /// Like [`AiMatcher::search`] but converts every failure into the safe
    /// fallback result, so callers have exactly one branch to handle.
    pub async fn search_or_fallback(&self, request: &AiSearchRequest) -> AiSearchResult {
        match self.search(request).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "AI search failed, returning fallback");
                fallback_result()
            }
        }
    }

    /// Map the model's proposed ids back onto real catalog records, in the
    /// model's order. Ids the catalog does not know are dropped: the model's
    /// claim that an agency matches is not trusted without catalog
    /// confirmation. Dropped ids indicate the model hallucinated despite
    /// the prompt, so they are counted and logged.
    fn reconcile(&self, reply: ModelReply, query: &str) -> AiSearchResult {
        let by_id: HashMap<&str, &Agency> = self
            .catalog
            .agencies()
            .iter()
            .map(|a| (a.id.as_str(), a))
            .collect();

        let mut agencies = Vec::new();
        let mut agency_reasons = HashMap::new();
        let mut unknown_ids = 0usize;

        for matched in reply.agencies {
            match by_id.get(matched.id.as_str()) {
                Some(agency) => {
                    agencies.push((*agency).clone());
                    if !matched.reason.is_empty() {
                        agency_reasons.insert(matched.id, matched.reason);
                    }
                }
                None => unknown_ids += 1,
            }
        }

        if unknown_ids > 0 {
            warn!(
                dropped = unknown_ids,
                query, "model referenced agency ids not present in the catalog"
            );
        }

        AiSearchResult {
            summary: reply.summary,
            agencies,
            agency_reasons,
            follow_up_questions: reply.follow_up_questions,
        }
    }
}

/// The degraded-but-complete response shape: apologetic summary, nothing
/// matched, and the three generic clarifying questions.
pub fn fallback_result() -> AiSearchResult {
    AiSearchResult {
        summary: FALLBACK_SUMMARY.to_string(),
        agencies: Vec::new(),
        agency_reasons: HashMap::new(),
        follow_up_questions: FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect(),
    }
}

// =============================================================================
// UnconfiguredModel
// =============================================================================

/// Stand-in provider used when no API key is configured. Returns a canned
/// reply in the contracted JSON shape so development installs work without
/// credentials.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredModel;

#[async_trait]
impl ChatCompletion for UnconfiguredModel {
    async fn complete(&self, _messages: &[Message]) -> Result<String, AiError> {
        Ok(serde_json::json!({
            "summary": "AI search is not configured yet. Set OPENAI_API_KEY to enable AI search.",
            "agencies": [],
            "followUpQuestions": [
                "What region do you prefer?",
                "What is your budget per hour?",
                "Do you need sales, support, or back office?"
            ]
        })
        .to_string())
    }
}
