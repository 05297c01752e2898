//! JSON Canvas renderer with radial layout.
//!
//! Produces an Obsidian-compatible `.canvas` document: the title at the
//! origin, top-level themes on a 400-unit circle around it (first theme at
//! 12 o'clock), and each deeper generation laid out in a centered horizontal
//! row 150 units below its parent. Subtrees are positioned independently, so
//! deep unbalanced trees can overlap visually; that is an accepted limitation
//! of the layout, not something this renderer tries to correct.
//!
//! Identifiers are counter-based per render call, so the same tree always
//! serializes to the same document.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use mindsum_core::{MindmapNode, SummarizeResult};

const TITLE_SIZE: (f64, f64) = (300.0, 100.0);
const NODE_SIZE: (f64, f64) = (250.0, 60.0);
const RADIUS: f64 = 400.0;
const ROW_SPACING: f64 = 150.0;
const ROW_DROP: f64 = 150.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasEdge {
    pub id: String,
    #[serde(rename = "fromNode")]
    pub from_node: String,
    #[serde(rename = "fromSide")]
    pub from_side: String,
    #[serde(rename = "toNode")]
    pub to_node: String,
    #[serde(rename = "toSide")]
    pub to_side: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasDocument {
    pub nodes: Vec<CanvasNode>,
    pub edges: Vec<CanvasEdge>,
}

/// Render the tree as a pretty-printed JSON Canvas document.
pub fn render_canvas(result: &SummarizeResult) -> String {
    let doc = layout(result);
    serde_json::to_string_pretty(&doc).expect("canvas document serializes")
}

/// Compute the positioned node/edge collections without serializing.
pub fn layout(result: &SummarizeResult) -> CanvasDocument {
    let mut doc = CanvasDocument {
        nodes: Vec::new(),
        edges: Vec::new(),
    };
    let mut ids = IdGen::default();

    let root_id = ids.next();
    doc.nodes.push(CanvasNode {
        id: root_id.clone(),
        node_type: "text".to_string(),
        text: format!("# {}", result.title),
        x: 0.0,
        y: 0.0,
        width: TITLE_SIZE.0,
        height: TITLE_SIZE.1,
        color: Some("1".to_string()),
    });

    // One angular sector per top-level theme; -PI/2 puts the first theme at
    // the top of the circle instead of the right.
    let count = result.nodes.len();
    for (index, node) in result.nodes.iter().enumerate() {
        let angle = index as f64 * (2.0 * PI / count as f64) - PI / 2.0;
        let x = RADIUS * angle.cos();
        let y = RADIUS * angle.sin();
        add_subtree(&mut doc, &mut ids, node, x, y, &root_id);
    }

    doc
}

fn add_subtree(
    doc: &mut CanvasDocument,
    ids: &mut IdGen,
    node: &MindmapNode,
    x: f64,
    y: f64,
    parent_id: &str,
) {
    let node_id = ids.next();
    doc.nodes.push(CanvasNode {
        id: node_id.clone(),
        node_type: "text".to_string(),
        text: node.text.clone(),
        x,
        y,
        width: NODE_SIZE.0,
        height: NODE_SIZE.1,
        color: Some("4".to_string()),
    });

    doc.edges.push(CanvasEdge {
        id: ids.next(),
        from_node: parent_id.to_string(),
        from_side: "bottom".to_string(),
        to_node: node_id.clone(),
        to_side: "top".to_string(),
    });

    // Children form a row 150 below the parent, centered under it.
    let count = node.children.len();
    let start_x = x - (count.saturating_sub(1)) as f64 * ROW_SPACING / 2.0;
    for (index, child) in node.children.iter().enumerate() {
        let child_x = start_x + index as f64 * ROW_SPACING;
        add_subtree(doc, ids, child, child_x, y + ROW_DROP, &node_id);
    }
}

/// Counter-based identifier source, fresh per render call.
#[derive(Debug, Default)]
struct IdGen {
    next: u64,
}

impl IdGen {
    fn next(&mut self) -> String {
        let id = format!("id-{}", self.next);
        self.next += 1;
        id
    }
}
