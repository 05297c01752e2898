//! Vendor adapters implementing the [`Provider`] contract, plus the factory
//! that selects one from the configured provider enum. Each adapter is an
//! independent unit: it builds its vendor's wire format around the shared
//! prompt, sends one request, and hands the reply text to the core parser.

pub mod anthropic;
pub mod gemini;
pub mod grok;
pub mod mock;
pub mod openai;

pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use grok::GrokProvider;
pub use mock::MockProvider;
pub use openai::OpenAiProvider;

use std::sync::Arc;

use mindsum_config::Settings;
use mindsum_core::{MindsumError, Provider, ProviderKind};

/// Build the adapter for the provider selected in `settings`.
///
/// Fails with [`MindsumError::MissingApiKey`] before any network attempt when
/// the selected vendor has no key configured.
pub fn create_provider(settings: &Settings) -> Result<Arc<dyn Provider>, MindsumError> {
    let kind = settings.provider;
    let vendor = settings.vendor(kind);
    let api_key = vendor
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .ok_or(MindsumError::MissingApiKey(kind))?;

    let provider: Arc<dyn Provider> = match kind {
        ProviderKind::OpenAi => {
            Arc::new(OpenAiProvider::new(api_key, &vendor.model, settings.max_tokens))
        }
        ProviderKind::Anthropic => {
            Arc::new(AnthropicProvider::new(api_key, &vendor.model, settings.max_tokens))
        }
        ProviderKind::Gemini => {
            Arc::new(GeminiProvider::new(api_key, &vendor.model, settings.max_tokens))
        }
        ProviderKind::Grok => {
            Arc::new(GrokProvider::new(api_key, &vendor.model, settings.max_tokens))
        }
    };

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_fails_before_any_request() {
        let settings = Settings::default();
        assert!(matches!(
            create_provider(&settings),
            Err(MindsumError::MissingApiKey(ProviderKind::Gemini))
        ));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let mut settings = Settings::default();
        settings.gemini.api_key = Some("   ".to_string());
        assert!(matches!(
            create_provider(&settings),
            Err(MindsumError::MissingApiKey(ProviderKind::Gemini))
        ));
    }

    #[tokio::test]
    async fn mock_reply_renders_end_to_end() {
        use mindsum_core::SummarizeRequest;
        use mindsum_render::{render, OutputFormat};

        let reply = r#"Here you go!
```json
{"title":"Photosynthesis","nodes":[
  {"text":"Inputs","children":[{"text":"Light"},{"text":"CO2"}]},
  {"text":"Outputs","children":[{"text":"Glucose"},{"text":"O2"}]}
]}
```"#;
        let provider = MockProvider::new(reply);
        let request = SummarizeRequest::new("photosynthesis notes", "English");
        let result = provider.summarize(&request).await.unwrap();

        let mermaid = render(OutputFormat::Mermaid, &result);
        assert!(mermaid.starts_with("```mermaid\nmindmap\n  root((Photosynthesis))"));
        assert!(mermaid.ends_with("```"));

        let canvas: serde_json::Value =
            serde_json::from_str(&render(OutputFormat::Canvas, &result)).unwrap();
        assert_eq!(canvas["nodes"].as_array().unwrap().len(), 7);
        assert_eq!(canvas["edges"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn configured_key_selects_the_right_adapter() {
        let mut settings = Settings::default();
        settings.provider = ProviderKind::Anthropic;
        settings.anthropic.api_key = Some("sk-ant".to_string());

        let provider = create_provider(&settings).unwrap();
        assert_eq!(provider.kind(), ProviderKind::Anthropic);
        assert_eq!(provider.name(), "Anthropic (Claude)");
    }
}
