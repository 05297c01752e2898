//! Shared prompt construction for all vendor adapters.
//!
//! Every provider sends the same system instruction and the same user prompt
//! shape; only the wire format around them differs per vendor.

use crate::types::SummarizeRequest;

/// Fixed system instruction requesting the `{title, nodes[]}` JSON schema.
pub const MINDMAP_SYSTEM_PROMPT: &str = r#"You are an expert at analyzing text and creating structured mindmaps.
Your task is to summarize the given text and create a hierarchical mindmap structure.

Rules:
1. Extract the main topic as the title
2. Identify 3-7 main themes/categories
3. Each main theme should have 2-5 sub-points
4. Keep each node text concise (under 50 characters)
5. Maintain logical hierarchy and relationships
6. Focus on key concepts, not details

Output format (JSON):
{
  "title": "Main Topic",
  "nodes": [
    {
      "text": "Main Theme 1",
      "children": [
        { "text": "Sub-point 1.1" },
        { "text": "Sub-point 1.2" }
      ]
    },
    {
      "text": "Main Theme 2",
      "children": [
        { "text": "Sub-point 2.1" },
        { "text": "Sub-point 2.2" }
      ]
    }
  ]
}

IMPORTANT: Return ONLY valid JSON, no markdown formatting or additional text."#;

/// Build the user-role prompt embedding the source text and target language.
pub fn user_prompt(request: &SummarizeRequest) -> String {
    format!(
        "Please analyze the following text and create a mindmap summary in {}.\n\n\
         Text to analyze:\n{}\n\n\
         Remember: Return ONLY valid JSON.",
        request.language,
        request.effective_text()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SummarizeRequest;

    #[test]
    fn user_prompt_carries_language_and_text() {
        let req = SummarizeRequest::new("water cycle notes", "French");
        let prompt = user_prompt(&req);
        assert!(prompt.contains("summary in French"));
        assert!(prompt.contains("water cycle notes"));
    }

    #[test]
    fn user_prompt_includes_custom_instructions() {
        let req = SummarizeRequest::new("notes", "English").with_instructions("use verbs");
        assert!(user_prompt(&req).contains("[Additional Instructions: use verbs]"));
    }
}
