//! Mermaid mindmap renderer.
//!
//! Emits a fenced ```mermaid block with a `root((title))` declaration and one
//! indented line per node, depth-first in input order. Mermaid's node-shape
//! syntax is parenthesis-based, so labels are escaped before emission; the
//! other renderers do not apply this escaping.

use mindsum_core::{MindmapNode, SummarizeResult};

pub fn render_mermaid(result: &SummarizeResult) -> String {
    let mut lines = Vec::new();
    lines.push("```mermaid".to_string());
    lines.push("mindmap".to_string());
    lines.push(format!("  root(({}))", escape(&result.title)));

    for node in &result.nodes {
        push_node(&mut lines, node, 2);
    }

    lines.push("```".to_string());
    lines.join("\n")
}

fn push_node(lines: &mut Vec<String>, node: &MindmapNode, depth: usize) {
    lines.push(format!("{}{}", "  ".repeat(depth), escape(&node.text)));
    for child in &node.children {
        push_node(lines, child, depth + 1);
    }
}

/// Replace characters that collide with Mermaid's own markup: parentheses
/// become full-width look-alikes, double quotes become single quotes, and
/// embedded newlines collapse to spaces.
fn escape(text: &str) -> String {
    text.replace('(', "［")
        .replace(')', "］")
        .replace('"', "'")
        .replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindsum_core::MindmapNode;

    #[test]
    fn photosynthesis_scenario() {
        let result = SummarizeResult {
            title: "Photosynthesis".into(),
            nodes: vec![
                MindmapNode::with_children(
                    "Inputs",
                    vec![MindmapNode::leaf("Light"), MindmapNode::leaf("CO2")],
                ),
                MindmapNode::with_children(
                    "Outputs",
                    vec![MindmapNode::leaf("Glucose"), MindmapNode::leaf("O2")],
                ),
            ],
        };

        let expected = "\
```mermaid
mindmap
  root((Photosynthesis))
    Inputs
      Light
      CO2
    Outputs
      Glucose
      O2
```";
        assert_eq!(render_mermaid(&result), expected);
    }

    #[test]
    fn labels_are_escaped() {
        let result = SummarizeResult {
            title: "T".into(),
            nodes: vec![MindmapNode::leaf("a (b) \"c\"\nd")],
        };
        let rendered = render_mermaid(&result);
        assert!(rendered.contains("a ［b］ 'c' d"));
        assert!(!rendered.lines().any(|l| l.contains("(b)")));
    }

    #[test]
    fn title_is_escaped_too() {
        let result = SummarizeResult {
            title: "Cells (biology)".into(),
            nodes: vec![],
        };
        assert!(render_mermaid(&result).contains("root((Cells ［biology］))"));
    }

    #[test]
    fn traversal_is_preorder_in_input_order() {
        let result = SummarizeResult {
            title: "T".into(),
            nodes: vec![
                MindmapNode::with_children("1", vec![MindmapNode::leaf("1.1")]),
                MindmapNode::leaf("2"),
            ],
        };
        let rendered = render_mermaid(&result);
        let order: Vec<&str> = rendered
            .lines()
            .skip(3)
            .take(3)
            .map(str::trim)
            .collect();
        assert_eq!(order, ["1", "1.1", "2"]);
    }
}
