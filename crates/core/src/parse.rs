//! Response parser: recovers a strict `{title, nodes[]}` tree from an
//! arbitrary LLM reply.
//!
//! Providers are asked to return bare JSON, but models routinely wrap the
//! object in prose or a fenced code block anyway. Each step below narrows the
//! working text; a failure at the final parse aborts with an error naming the
//! stage, so the user can retry with different wording or another provider.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{MindsumError, ParseStage};
use crate::types::SummarizeResult;

/// First triple-backtick fenced block, optionally tagged `json`.
static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)```").unwrap());

/// Parse a raw provider reply into a [`SummarizeResult`].
///
/// Recovery pipeline:
/// 1. trim surrounding whitespace;
/// 2. if a fenced code block is present, keep only its interior;
/// 3. narrow to the first `{` .. last `}` span, discarding commentary the
///    model added around the object;
/// 4. deserialize and validate.
///
/// Validation is strict: a node missing its `text` label fails here rather
/// than deep inside a renderer. A node without `children` is a leaf.
pub fn parse_response(raw: &str) -> Result<SummarizeResult, MindsumError> {
    let mut working = raw.trim();

    if let Some(caps) = FENCED_BLOCK.captures(working) {
        working = caps.get(1).map_or(working, |m| m.as_str()).trim();
    }

    let narrowed = narrow_to_object(working);

    let result: SummarizeResult = serde_json::from_str(narrowed).map_err(|e| {
        let stage = if serde_json::from_str::<serde_json::Value>(narrowed).is_err() {
            ParseStage::Json
        } else {
            ParseStage::Structure
        };
        MindsumError::malformed(stage, e.to_string())
    })?;

    if result.title.trim().is_empty() {
        return Err(MindsumError::malformed(
            ParseStage::EmptyTitle,
            "response carried no title",
        ));
    }

    Ok(result)
}

/// Narrow to the first `{` .. last `}` inclusive, if both exist.
fn narrow_to_object(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MindmapNode;

    const PLAIN: &str = r#"{"title":"T","nodes":[{"text":"A"}]}"#;

    fn expected() -> SummarizeResult {
        SummarizeResult {
            title: "T".into(),
            nodes: vec![MindmapNode::leaf("A")],
        }
    }

    #[test]
    fn parses_bare_json() {
        assert_eq!(parse_response(PLAIN).unwrap(), expected());
    }

    #[test]
    fn fenced_block_yields_same_result_as_bare_json() {
        let fenced = format!("```json\n{PLAIN}\n```");
        assert_eq!(parse_response(&fenced).unwrap(), parse_response(PLAIN).unwrap());
    }

    #[test]
    fn untagged_fence_is_stripped_too() {
        let fenced = format!("```\n{PLAIN}\n```");
        assert_eq!(parse_response(&fenced).unwrap(), expected());
    }

    #[test]
    fn surrounding_prose_is_discarded() {
        let reply = "Here is your mindmap:\n{\"title\":\"T\",\"nodes\":[]}\nHope this helps!";
        let result = parse_response(reply).unwrap();
        assert_eq!(result.title, "T");
        assert!(result.nodes.is_empty());
    }

    #[test]
    fn prose_around_a_fenced_block_is_discarded() {
        let reply = format!("Sure! Here it is:\n\n```json\n{PLAIN}\n```\n\nLet me know!");
        assert_eq!(parse_response(&reply).unwrap(), expected());
    }

    #[test]
    fn missing_title_fails() {
        let err = parse_response(r#"{"nodes":[]}"#).unwrap_err();
        assert!(matches!(
            err,
            MindsumError::MalformedResponse {
                stage: ParseStage::Structure,
                ..
            }
        ));
    }

    #[test]
    fn missing_nodes_fails() {
        let err = parse_response(r#"{"title":"T"}"#).unwrap_err();
        assert!(matches!(
            err,
            MindsumError::MalformedResponse {
                stage: ParseStage::Structure,
                ..
            }
        ));
    }

    #[test]
    fn non_array_nodes_fails() {
        let err = parse_response(r#"{"title":"T","nodes":"oops"}"#).unwrap_err();
        assert!(matches!(
            err,
            MindsumError::MalformedResponse {
                stage: ParseStage::Structure,
                ..
            }
        ));
    }

    #[test]
    fn node_without_label_fails_at_parse_time() {
        let err = parse_response(r#"{"title":"T","nodes":[{"children":[]}]}"#).unwrap_err();
        assert!(matches!(
            err,
            MindsumError::MalformedResponse {
                stage: ParseStage::Structure,
                ..
            }
        ));
    }

    #[test]
    fn empty_title_fails() {
        let err = parse_response(r#"{"title":"  ","nodes":[]}"#).unwrap_err();
        assert!(matches!(
            err,
            MindsumError::MalformedResponse {
                stage: ParseStage::EmptyTitle,
                ..
            }
        ));
    }

    #[test]
    fn unparseable_text_reports_json_stage() {
        let err = parse_response("the model refused to answer").unwrap_err();
        assert!(matches!(
            err,
            MindsumError::MalformedResponse {
                stage: ParseStage::Json,
                ..
            }
        ));
    }

    #[test]
    fn nested_children_survive_parsing() {
        let reply = r#"{"title":"T","nodes":[{"text":"A","children":[{"text":"B"}]}]}"#;
        let result = parse_response(reply).unwrap();
        assert_eq!(result.nodes[0].children, vec![MindmapNode::leaf("B")]);
    }
}
