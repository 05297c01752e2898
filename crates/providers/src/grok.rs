use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use mindsum_core::{
    parse_response, prompt, MindsumError, Provider, ProviderKind, SummarizeRequest,
    SummarizeResult,
};

/// xAI Grok adapter. The endpoint is OpenAI-compatible but does not accept a
/// `response_format` constraint, so the parser's fence/boundary recovery does
/// the heavy lifting here.
pub struct GrokProvider {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: String,
}

impl GrokProvider {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
            base_url: "https://api.x.ai/v1".to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[async_trait]
impl Provider for GrokProvider {
    fn name(&self) -> &str {
        "xAI (Grok)"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Grok
    }

    async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummarizeResult, MindsumError> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt::MINDMAP_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt::user_prompt(request),
                },
            ],
            max_tokens: self.max_tokens,
            temperature: 0.7,
        };

        debug!(model = %self.model, "Sending request to Grok");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| MindsumError::Http {
                provider: ProviderKind::Grok,
                source: e.into(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MindsumError::Transport {
                provider: ProviderKind::Grok,
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response.json().await.map_err(|e| MindsumError::Http {
            provider: ProviderKind::Grok,
            source: e.into(),
        })?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .ok_or(MindsumError::MissingContent(ProviderKind::Grok))?;

        parse_response(&content)
    }
}
