//! Markmap heading-outline renderer (obsidian-markmind compatible).
//!
//! Front matter pins `colorFreezeLevel: 2`; every node becomes a heading one
//! level deeper than its parent, clamped at H6 since Markdown has no deeper
//! heading level.

use mindsum_core::{MindmapNode, SummarizeResult};

pub fn render_markmap(result: &SummarizeResult) -> String {
    let mut lines = Vec::new();
    lines.push("---".to_string());
    lines.push("markmap:".to_string());
    lines.push("  colorFreezeLevel: 2".to_string());
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(format!("# {}", result.title));
    lines.push(String::new());

    for node in &result.nodes {
        push_node(&mut lines, node, 2);
    }

    lines.join("\n")
}

fn push_node(lines: &mut Vec<String>, node: &MindmapNode, level: usize) {
    lines.push(format!("{} {}", "#".repeat(level.min(6)), node.text));
    for child in &node.children {
        push_node(lines, child, level + 1);
    }
}
