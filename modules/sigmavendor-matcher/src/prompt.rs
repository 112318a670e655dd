//! Prompt assembly for the match call.

use ai_client::Message;

use crate::types::{ChatTurn, TurnRole};

/// Only the most recent turns are forwarded; older context is dropped to
/// bound prompt size.
pub const HISTORY_WINDOW: usize = 6;

pub fn system_message(agency_context: &str) -> Message {
    let content = [
        "You are SigmaVendor AI, an expert assistant that matches users with virtual assistant and outsourcing agencies.",
        "You ONLY use the list of agencies given in the context below. Do not invent agencies.",
        "You MUST answer strictly in valid JSON, with this exact shape:",
        "{",
        "  \"summary\": string,",
        "  \"agencies\": [{\"id\": string, \"reason\": string}],",
        "  \"followUpQuestions\": [string]",
        "}",
        "",
        "The `reason` field explains why that agency is a good match (1-2 sentences).",
        "Do not include fields other than summary, agencies, followUpQuestions.",
        "",
        "Guidelines:",
        "- If the user query is vague or missing important details (e.g. region, budget, service type),",
        "  propose 2-4 follow-up questions in `followUpQuestions`.",
        "- If you cannot find any matching agencies, return an empty agencies array and use",
        "  `summary` to explain why and suggest what they might look for instead.",
        "- Prioritize agencies that match multiple criteria from the user query.",
        "- Consider price range, region, services, and certifications when matching.",
        "",
        "Context agencies JSON:",
        agency_context,
    ]
    .join("\n");

    Message::system(content)
}

pub fn user_message(query: &str) -> Message {
    let content = [
        "User query:",
        query,
        "",
        "Analyze the query and match it to agencies from the context. Return your response as JSON.",
    ]
    .join("\n");

    Message::user(content)
}

/// System instruction, then the bounded history window, then the current
/// query turn.
pub fn build_messages(agency_context: &str, history: &[ChatTurn], query: &str) -> Vec<Message> {
    let recent = &history[history.len().saturating_sub(HISTORY_WINDOW)..];

    let mut messages = Vec::with_capacity(recent.len() + 2);
    messages.push(system_message(agency_context));
    for turn in recent {
        messages.push(match turn.role {
            TurnRole::User => Message::user(&turn.content),
            TurnRole::Assistant => Message::assistant(&turn.content),
        });
    }
    messages.push(user_message(query));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_client::MessageRole;

    fn turn(role: TurnRole, content: &str) -> ChatTurn {
        ChatTurn {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn history_is_bounded_to_most_recent_window() {
        let history: Vec<ChatTurn> = (0..10)
            .map(|i| turn(TurnRole::User, &format!("turn {i}")))
            .collect();

        let messages = build_messages("[]", &history, "current");

        // system + 6 history + current query
        assert_eq!(messages.len(), HISTORY_WINDOW + 2);
        assert_eq!(messages[1].content, "turn 4");
        assert_eq!(messages[HISTORY_WINDOW].content, "turn 9");
        assert_eq!(messages[0].role, MessageRole::System);
        assert!(messages.last().unwrap().content.contains("current"));
    }

    #[test]
    fn assistant_turns_keep_their_role() {
        let history = vec![
            turn(TurnRole::User, "need support"),
            turn(TurnRole::Assistant, "which region?"),
        ];
        let messages = build_messages("[]", &history, "africa");
        assert_eq!(messages[1].role, MessageRole::User);
        assert_eq!(messages[2].role, MessageRole::Assistant);
    }
}
