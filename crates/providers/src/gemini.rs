use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use mindsum_core::{
    parse_response, prompt, MindsumError, Provider, ProviderKind, SummarizeRequest,
    SummarizeResult,
};

/// Google Gemini adapter. Gemini has no separate system role in this API
/// version, so the system and user prompts travel as a single text part; the
/// API key rides in the URL query string.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        "Google (Gemini)"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummarizeResult, MindsumError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(format!(
                        "{}\n\n{}",
                        prompt::MINDMAP_SYSTEM_PROMPT,
                        prompt::user_prompt(request)
                    )),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                max_output_tokens: self.max_tokens,
                response_mime_type: "application/json",
            },
        };

        debug!(model = %self.model, "Sending request to Gemini");

        let response = self
            .client
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| MindsumError::Http {
                provider: ProviderKind::Gemini,
                source: e.into(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MindsumError::Transport {
                provider: ProviderKind::Gemini,
                status: status.as_u16(),
                body,
            });
        }

        let reply: GenerateResponse = response.json().await.map_err(|e| MindsumError::Http {
            provider: ProviderKind::Gemini,
            source: e.into(),
        })?;

        let content = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(MindsumError::MissingContent(ProviderKind::Gemini))?;

        parse_response(&content)
    }
}
