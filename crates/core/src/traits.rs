use async_trait::async_trait;

use crate::error::MindsumError;
use crate::types::{ProviderKind, SummarizeRequest, SummarizeResult};

/// Contract every LLM vendor adapter implements.
///
/// An adapter builds a vendor-specific request around the shared prompt,
/// sends it, extracts the vendor's free-text reply field, and hands that text
/// to [`crate::parse::parse_response`]. Exactly one call happens per
/// user-initiated generation; retries and caching are deliberately absent.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Human-readable provider name (e.g. "OpenAI (GPT)").
    fn name(&self) -> &str;

    /// Which vendor this adapter speaks to.
    fn kind(&self) -> ProviderKind;

    /// Summarize the request's text into a mindmap tree.
    async fn summarize(&self, request: &SummarizeRequest)
        -> Result<SummarizeResult, MindsumError>;
}
