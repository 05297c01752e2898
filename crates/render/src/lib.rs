//! Renderers turning a parsed [`SummarizeResult`] into one of four output
//! artifacts. All four are stateless, synchronous, and total over well-formed
//! trees; each call allocates its own output, so independent renders are safe
//! to run concurrently.

pub mod canvas;
pub mod markdown;
pub mod markmap;
pub mod mermaid;

pub use canvas::{render_canvas, CanvasDocument, CanvasEdge, CanvasNode};
pub use markdown::render_markdown;
pub use markmap::render_markmap;
pub use mermaid::render_mermaid;

use mindsum_core::{MindsumError, SummarizeResult};

/// The closed set of output formats a generation can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Mermaid,
    Markdown,
    Markmap,
    Canvas,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Mermaid,
        OutputFormat::Markdown,
        OutputFormat::Markmap,
        OutputFormat::Canvas,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Mermaid => "mermaid",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Markmap => "markmap",
            OutputFormat::Canvas => "canvas",
        }
    }

    /// Default output filename for a mindmap with the given title, following
    /// the `"<title> - <suffix>.<ext>"` convention. Characters that are
    /// unsafe in filenames are replaced with `-`.
    pub fn default_filename(&self, title: &str) -> String {
        let (suffix, ext) = match self {
            OutputFormat::Mermaid => ("Mindmap", "md"),
            OutputFormat::Markdown => ("Summary", "md"),
            OutputFormat::Markmap => ("Markmap", "md"),
            OutputFormat::Canvas => ("Mindmap", "canvas"),
        };
        sanitize_filename(&format!("{title} - {suffix}.{ext}"))
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = MindsumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mermaid" => Ok(OutputFormat::Mermaid),
            "markdown" => Ok(OutputFormat::Markdown),
            "markmap" => Ok(OutputFormat::Markmap),
            "canvas" => Ok(OutputFormat::Canvas),
            other => Err(MindsumError::Config(format!("unknown format: {other}"))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render the tree in the requested format.
pub fn render(format: OutputFormat, result: &SummarizeResult) -> String {
    match format {
        OutputFormat::Mermaid => render_mermaid(result),
        OutputFormat::Markdown => render_markdown(result),
        OutputFormat::Markmap => render_markmap(result),
        OutputFormat::Canvas => render_canvas(result),
    }
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindsum_core::MindmapNode;

    #[test]
    fn format_round_trips_through_str() {
        for format in OutputFormat::ALL {
            assert_eq!(format.as_str().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn default_filenames_follow_suffix_convention() {
        assert_eq!(
            OutputFormat::Mermaid.default_filename("Photosynthesis"),
            "Photosynthesis - Mindmap.md"
        );
        assert_eq!(
            OutputFormat::Markdown.default_filename("Photosynthesis"),
            "Photosynthesis - Summary.md"
        );
        assert_eq!(
            OutputFormat::Canvas.default_filename("Photosynthesis"),
            "Photosynthesis - Mindmap.canvas"
        );
    }

    #[test]
    fn unsafe_filename_characters_are_replaced() {
        assert_eq!(
            OutputFormat::Mermaid.default_filename("a/b: c?"),
            "a-b- c- - Mindmap.md"
        );
    }

    #[test]
    fn dispatch_matches_direct_renderers() {
        let result = SummarizeResult {
            title: "T".into(),
            nodes: vec![MindmapNode::leaf("a")],
        };
        assert_eq!(render(OutputFormat::Mermaid, &result), render_mermaid(&result));
        assert_eq!(render(OutputFormat::Canvas, &result), render_canvas(&result));
    }
}
