pub(crate) mod types;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use crate::error::AiError;
use crate::traits::{ChatCompletion, Message};

use types::{ChatRequest, ChatResponse, ResponseFormat, WireMessage};

const OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// Every call is independent; a hung provider surfaces as a timeout error
/// rather than an open-ended wait.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_MODEL: &str = "gpt-4o-mini";

// =============================================================================
// OpenAi Provider
// =============================================================================

#[derive(Debug, Clone)]
pub struct OpenAi {
    api_key: String,
    model: String,
    base_url: String,
    temperature: Option<f32>,
    json_output: bool,
    http: reqwest::Client,
}

impl OpenAi {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: OPENAI_API_URL.to_string(),
            temperature: None,
            json_output: false,
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn from_env() -> Result<Self, AiError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| AiError::Config("OPENAI_API_KEY environment variable not set".into()))?;
        Ok(Self::new(api_key))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Ask the provider for a `json_object` formatted reply.
    pub fn with_json_output(mut self) -> Self {
        self.json_output = true;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn headers(&self) -> Result<HeaderMap, AiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| AiError::Config(e.to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, AiError> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %request.model, "OpenAI chat request");

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AiError::Api(format!(
                "OpenAI API error ({status}): {error_text}"
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ChatCompletion for OpenAi {
    async fn complete(&self, messages: &[Message]) -> Result<String, AiError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: messages.iter().map(WireMessage::from).collect(),
            temperature: self.temperature,
            response_format: self.json_output.then(|| ResponseFormat {
                format_type: "json_object".to_string(),
            }),
        };

        let response = self.chat(&request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AiError::Api("Empty response from OpenAI".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_includes_json_format_only_when_asked() {
        let provider = OpenAi::new("test-key").with_temperature(0.7).with_json_output();
        let request = ChatRequest {
            model: provider.model().to_string(),
            messages: vec![WireMessage::from(&Message::user("hi"))],
            temperature: provider.temperature,
            response_format: provider.json_output.then(|| ResponseFormat {
                format_type: "json_object".to_string(),
            }),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["model"], "gpt-4o-mini");
    }

    #[test]
    fn response_content_extraction() {
        let raw = r#"{"choices": [{"message": {"content": "{\"ok\": true}"}}]}"#;
        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap();
        assert_eq!(content, "{\"ok\": true}");
    }
}
