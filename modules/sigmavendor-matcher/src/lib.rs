//! AI match orchestration: turn a natural-language need plus a short
//! conversation history into a shortlist of real catalog agencies with
//! per-agency rationales, grounded by id reconciliation so the model can
//! never surface an agency that is not in the catalog.

pub mod context;
pub mod matcher;
pub mod prompt;
pub mod reply;
pub mod types;

pub use matcher::{
    fallback_result, AiMatcher, MatchError, UnconfiguredModel, FALLBACK_QUESTIONS,
    FALLBACK_SUMMARY,
};
pub use types::{AiSearchRequest, AiSearchResult, ChatTurn, TurnRole};
