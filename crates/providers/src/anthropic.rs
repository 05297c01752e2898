use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use mindsum_core::{
    parse_response, prompt, MindsumError, Provider, ProviderKind, SummarizeRequest,
    SummarizeResult,
};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Messages API adapter. The system instruction travels in the
/// request-level `system` field rather than a message.
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: String,
}

impl AnthropicProvider {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
            base_url: "https://api.anthropic.com".to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[derive(Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[async_trait]
impl Provider for AnthropicProvider {
    fn name(&self) -> &str {
        "Anthropic (Claude)"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummarizeResult, MindsumError> {
        let body = MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            system: prompt::MINDMAP_SYSTEM_PROMPT.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt::user_prompt(request),
            }],
        };

        debug!(model = %self.model, "Sending request to Anthropic");

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| MindsumError::Http {
                provider: ProviderKind::Anthropic,
                source: e.into(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MindsumError::Transport {
                provider: ProviderKind::Anthropic,
                status: status.as_u16(),
                body,
            });
        }

        let reply: MessagesResponse = response.json().await.map_err(|e| MindsumError::Http {
            provider: ProviderKind::Anthropic,
            source: e.into(),
        })?;

        let content = reply
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .filter(|t| !t.is_empty())
            .ok_or(MindsumError::MissingContent(ProviderKind::Anthropic))?;

        parse_response(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_travels_in_the_system_field() {
        let body = MessagesRequest {
            model: "claude-3-5-sonnet-20241022".to_string(),
            max_tokens: 1024,
            system: prompt::MINDMAP_SYSTEM_PROMPT.to_string(),
            messages: vec![],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["system"].as_str().unwrap().contains("mindmap"));
        assert!(json.get("response_format").is_none());
    }

    #[test]
    fn content_block_without_text_is_missing_content() {
        let reply: MessagesResponse =
            serde_json::from_str(r#"{"content":[{"type":"tool_use"}]}"#).unwrap();
        assert!(reply.content[0].text.is_none());
    }
}
