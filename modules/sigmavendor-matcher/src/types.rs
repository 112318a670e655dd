use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use sigmavendor_common::Agency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// One prior turn of the conversation, replayed by the client on every
/// request. There is no server-side session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AiSearchRequest {
    pub query: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

/// The orchestrator's output: a conversational summary, the reconciled
/// shortlist in model order, per-id rationales, and optional clarifying
/// follow-up questions. Built fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AiSearchResult {
    pub summary: String,
    pub agencies: Vec<Agency>,
    pub agency_reasons: HashMap<String, String>,
    pub follow_up_questions: Vec<String>,
}
