use thiserror::Error;

use crate::types::ProviderKind;

/// The recovery stage at which response parsing gave up. Surfaced in the
/// error message so the user can tell whether the reply was not JSON at all
/// or JSON of the wrong shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    /// The narrowed text was not syntactically valid JSON.
    Json,
    /// Valid JSON, but not the expected `{title, nodes[]}` shape
    /// (missing/mistyped field, or a node without a label).
    Structure,
    /// The document deserialized but carried an empty title.
    EmptyTitle,
}

impl std::fmt::Display for ParseStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ParseStage::Json => "invalid JSON",
            ParseStage::Structure => "invalid mindmap structure",
            ParseStage::EmptyTitle => "empty title",
        };
        f.write_str(s)
    }
}

/// Top-level error type for the Mindsum pipeline.
#[derive(Debug, Error)]
pub enum MindsumError {
    #[error("{0} API key is not configured")]
    MissingApiKey(ProviderKind),

    #[error("{provider} API error: {status} - {body}")]
    Transport {
        provider: ProviderKind,
        status: u16,
        body: String,
    },

    #[error("{provider} request failed: {source}")]
    Http {
        provider: ProviderKind,
        #[source]
        source: anyhow::Error,
    },

    #[error("no content in {0} response")]
    MissingContent(ProviderKind),

    #[error("malformed AI response ({stage}): {detail}")]
    MalformedResponse { stage: ParseStage, detail: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl MindsumError {
    pub fn malformed(stage: ParseStage, detail: impl Into<String>) -> Self {
        MindsumError::MalformedResponse {
            stage,
            detail: detail.into(),
        }
    }
}
