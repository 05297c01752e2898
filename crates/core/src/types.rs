use serde::{Deserialize, Serialize};

/// A single labeled node in the mindmap tree.
///
/// Each node is owned exclusively by its parent (or by the result root),
/// so the structure is always a tree: no cycles, no shared ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindmapNode {
    /// Node label. Required: a node without a label is a malformed response.
    pub text: String,
    /// Ordered children. Absent in the wire format means "leaf".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MindmapNode>,
}

impl MindmapNode {
    pub fn leaf(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(text: impl Into<String>, children: Vec<MindmapNode>) -> Self {
        Self {
            text: text.into(),
            children,
        }
    }
}

/// The parsed summary: a title plus an ordered forest of top-level nodes.
///
/// This is the sole interchange value between the provider layer and the
/// renderers. Both fields are structurally required; their absence in a
/// provider reply is a parse failure, not a silent default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResult {
    pub title: String,
    pub nodes: Vec<MindmapNode>,
}

/// The closed set of supported LLM vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
    Gemini,
    Grok,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::OpenAi,
        ProviderKind::Anthropic,
        ProviderKind::Gemini,
        ProviderKind::Grok,
    ];

    /// Stable machine-readable name, used in config files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Gemini => "gemini",
            ProviderKind::Grok => "grok",
        }
    }

    /// Human-readable vendor name for UI output.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI (GPT)",
            ProviderKind::Anthropic => "Anthropic (Claude)",
            ProviderKind::Gemini => "Google (Gemini)",
            ProviderKind::Grok => "xAI (Grok)",
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = crate::MindsumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" => Ok(ProviderKind::Anthropic),
            "gemini" => Ok(ProviderKind::Gemini),
            "grok" => Ok(ProviderKind::Grok),
            other => Err(crate::MindsumError::Config(format!(
                "unknown provider: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One summarization request, composed once per generation cycle.
#[derive(Debug, Clone)]
pub struct SummarizeRequest {
    /// Source note text (full note or a selection).
    pub text: String,
    /// Target output language for all node labels.
    pub language: String,
    /// Extra user instructions appended to the source text.
    pub custom_instructions: Option<String>,
}

impl SummarizeRequest {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            custom_instructions: None,
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        let instructions = instructions.into();
        if !instructions.trim().is_empty() {
            self.custom_instructions = Some(instructions);
        }
        self
    }

    /// Source text with any custom instructions folded in.
    pub fn effective_text(&self) -> String {
        match &self.custom_instructions {
            Some(extra) => format!("{}\n\n[Additional Instructions: {}]", self.text, extra),
            None => self.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_kind_round_trips_through_str() {
        for kind in ProviderKind::ALL {
            assert_eq!(kind.as_str().parse::<ProviderKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_provider_name_is_a_config_error() {
        assert!("mistral".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn node_without_children_deserializes_as_leaf() {
        let node: MindmapNode = serde_json::from_str(r#"{"text":"Leaf"}"#).unwrap();
        assert_eq!(node, MindmapNode::leaf("Leaf"));
    }

    #[test]
    fn custom_instructions_are_appended_to_source_text() {
        let req = SummarizeRequest::new("Some notes", "English")
            .with_instructions("focus on dates");
        assert_eq!(
            req.effective_text(),
            "Some notes\n\n[Additional Instructions: focus on dates]"
        );
    }

    #[test]
    fn blank_instructions_are_dropped() {
        let req = SummarizeRequest::new("Some notes", "English").with_instructions("   ");
        assert_eq!(req.effective_text(), "Some notes");
    }
}
