use crate::catalog::Vocabulary;
use crate::models::Filters;
use crate::nlu::prompt::build_prompt;
use crate::nlu::traits::FilterExtractor;
use crate::nlu::{standardize_keys, ExtractError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Connection settings for an OpenAI-compatible chat completions API
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            api_key: None,
            model: "llama-3.3-70b-versatile".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    response_format: Value,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Filter extraction backed by a hosted LLM
pub struct GroqExtractor {
    client: Client,
    config: GroqConfig,
}

impl GroqExtractor {
    pub fn new(config: GroqConfig) -> Result<Self, ExtractError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Turn the model's message content into a filter object
    fn parse_content(content: &str) -> Result<Filters, ExtractError> {
        let value: Value = serde_json::from_str(content.trim())?;
        let Value::Object(map) = value else {
            return Err(ExtractError::NotAnObject);
        };
        Ok(Filters::from_value(&Value::Object(standardize_keys(map))))
    }
}

#[async_trait]
impl FilterExtractor for GroqExtractor {
    async fn extract(&self, query: &str, vocabulary: &Vocabulary) -> Result<Filters, ExtractError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ExtractError::NotConfigured("GROQ_API_KEY is not set".to_string()))?;

        let prompt = build_prompt(query, vocabulary);
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: 0.0,
            response_format: json!({"type": "json_object"}),
        };

        debug!("Requesting filter extraction from {}", self.config.api_url);

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Extraction API returned status: {}", status);
            return Err(ExtractError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ExtractError::EmptyResponse)?;

        let filters = Self::parse_content(&content)?;
        info!(query, filters = %serde_json::to_string(&filters).unwrap_or_default(), "Extracted filters");
        Ok(filters)
    }

    fn source_name(&self) -> &'static str {
        "groq"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_standardized_into_filters() {
        let filters = GroqExtractor::parse_content(
            r#" {"City": "pune", "bhk": "2bhk", "budget": {"max": 10000000}} "#,
        )
        .unwrap();
        assert_eq!(filters.property_type.as_deref(), Some("2bhk"));
        assert_eq!(filters.budget.and_then(|b| b.max), Some(10_000_000));
        // only unit-type aliases are renamed
        assert!(filters.city.is_none());
    }

    #[test]
    fn non_object_content_is_rejected() {
        assert!(matches!(
            GroqExtractor::parse_content("\"pune\""),
            Err(ExtractError::NotAnObject)
        ));
        assert!(matches!(
            GroqExtractor::parse_content("not json"),
            Err(ExtractError::InvalidJson(_))
        ));
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let extractor = GroqExtractor::new(GroqConfig::default()).unwrap();
        let err = extractor
            .extract("2bhk in pune", &Vocabulary::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::NotConfigured(_)));
    }

    #[test]
    fn request_body_asks_for_json_output() {
        let request = ChatRequest {
            model: "llama-3.3-70b-versatile",
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            temperature: 0.0,
            response_format: json!({"type": "json_object"}),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["temperature"], 0.0);
    }
}
