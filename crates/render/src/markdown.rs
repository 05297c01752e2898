//! Markdown bullet-list renderer.
//!
//! Title becomes an H1, each top-level node an H2 followed by a blank line,
//! deeper nodes indented dash bullets. Labels pass through unescaped.

use mindsum_core::{MindmapNode, SummarizeResult};

pub fn render_markdown(result: &SummarizeResult) -> String {
    let mut lines = Vec::new();
    lines.push(format!("# {}", result.title));
    lines.push(String::new());

    for node in &result.nodes {
        push_node(&mut lines, node, 0);
    }

    lines.join("\n")
}

fn push_node(lines: &mut Vec<String>, node: &MindmapNode, depth: usize) {
    if depth == 0 {
        lines.push(format!("## {}", node.text));
        lines.push(String::new());
    } else {
        lines.push(format!("{}- {}", "  ".repeat(depth), node.text));
    }

    for child in &node.children {
        push_node(lines, child, depth + 1);
    }
}
