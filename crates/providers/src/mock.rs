use async_trait::async_trait;

use mindsum_core::{
    parse_response, MindsumError, Provider, ProviderKind, SummarizeRequest, SummarizeResult,
};

/// A provider that replies with a canned raw payload, run through the real
/// response parser. Lets orchestration and renderer tests exercise the full
/// parse path without a network.
pub struct MockProvider {
    reply: String,
}

impl MockProvider {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "Mock"
    }

    fn kind(&self) -> ProviderKind {
        // Arbitrary; the mock stands in for whichever vendor a test needs.
        ProviderKind::Gemini
    }

    async fn summarize(
        &self,
        _request: &SummarizeRequest,
    ) -> Result<SummarizeResult, MindsumError> {
        parse_response(&self.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_reply_flows_through_the_real_parser() {
        let provider = MockProvider::new("```json\n{\"title\":\"T\",\"nodes\":[]}\n```");
        let request = SummarizeRequest::new("ignored", "English");
        let result = provider.summarize(&request).await.unwrap();
        assert_eq!(result.title, "T");
    }

    #[tokio::test]
    async fn mock_propagates_parse_failures() {
        let provider = MockProvider::new("not json at all");
        let request = SummarizeRequest::new("ignored", "English");
        assert!(matches!(
            provider.summarize(&request).await,
            Err(MindsumError::MalformedResponse { .. })
        ));
    }
}
