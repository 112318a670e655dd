//! Strict parsing of the model's reply.
//!
//! The reply is untrusted input: it either matches the contracted shape
//! (three required top-level fields with the right kinds) or the whole
//! call is treated as failed. A missing `reason` on an individual match is
//! tolerated and read as empty.

use serde::Deserialize;

use ai_client::strip_code_blocks;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelReply {
    pub summary: String,
    pub agencies: Vec<ModelMatch>,
    pub follow_up_questions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelMatch {
    pub id: String,
    #[serde(default)]
    pub reason: String,
}

impl ModelReply {
    /// Parse raw model output, tolerating markdown code fences around the
    /// JSON body but nothing else.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(strip_code_blocks(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_reply_parses() {
        let reply = ModelReply::parse(
            r#"{
                "summary": "Two matches.",
                "agencies": [{"id": "1", "reason": "fits region"}],
                "followUpQuestions": ["Budget?"]
            }"#,
        )
        .unwrap();
        assert_eq!(reply.agencies.len(), 1);
        assert_eq!(reply.follow_up_questions, vec!["Budget?"]);
    }

    #[test]
    fn fenced_reply_parses() {
        let raw = "```json\n{\"summary\": \"s\", \"agencies\": [], \"followUpQuestions\": []}\n```";
        assert!(ModelReply::parse(raw).is_ok());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let raw = r#"{"summary": "s", "agencies": []}"#;
        assert!(ModelReply::parse(raw).is_err());
    }

    #[test]
    fn wrong_typed_field_is_rejected() {
        let raw = r#"{"summary": "s", "agencies": "none", "followUpQuestions": []}"#;
        assert!(ModelReply::parse(raw).is_err());
    }

    #[test]
    fn missing_reason_defaults_to_empty() {
        let reply = ModelReply::parse(
            r#"{"summary": "s", "agencies": [{"id": "1"}], "followUpQuestions": []}"#,
        )
        .unwrap();
        assert_eq!(reply.agencies[0].reason, "");
    }
}
