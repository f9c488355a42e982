use std::collections::HashSet;
use std::io::Write;

use miette::Result;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::detector::WitnessCycle;
use crate::error::LoopError;
use crate::graph::AdjacencyMatrix;

// Blue-Orange Accessible Palette - Soothing colors with excellent contrast
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(LoopError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(LoopError::from)
    };
}

/// Vertices and edges of the witness, for highlighting
struct Highlight {
    vertices: HashSet<usize>,
    edges: HashSet<(usize, usize)>,
}

impl Highlight {
    fn new(witness: Option<&WitnessCycle>, enabled: bool) -> Self {
        match witness {
            Some(witness) if enabled => Self {
                vertices: witness.vertices().iter().copied().collect(),
                edges: witness.edges().into_iter().collect(),
            },
            _ => Self {
                vertices: HashSet::new(),
                edges: HashSet::new(),
            },
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        self.vertices.contains(&vertex)
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edges.contains(&(from, to))
    }

    fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

pub struct GraphRenderer {
    highlight_cycles: bool,
    show_degrees: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool, show_degrees: bool) -> Self {
        Self {
            highlight_cycles,
            show_degrees,
        }
    }

    pub fn render_ascii(
        &self,
        matrix: &AdjacencyMatrix,
        witness: Option<&WitnessCycle>,
        output: &mut dyn Write,
    ) -> Result<()> {
        if matrix.is_empty() {
            writeln_out!(output, "Graph is empty.")?;
            return Ok(());
        }

        writeln_out!(output, "\n📊 Directed Graph\n")?;

        let graph = matrix.to_digraph();
        let highlight = Highlight::new(witness, self.highlight_cycles);

        for node in graph.node_indices() {
            let vertex = graph[node];

            if highlight.has_vertex(vertex) {
                writeln_out!(output, "┌─────────────────────────────────────┐")?;
                writeln_out!(output, "│ {} ⚠️  IN CYCLE", vertex)?;
                writeln_out!(output, "└─────────────────────────────────────┘")?;
            } else {
                writeln_out!(output, "{}", vertex)?;
            }

            if self.show_degrees {
                writeln_out!(output, "  🔢 {}", self.degree_label(&graph, node))?;
            }

            let targets = sorted_targets(&graph, node);
            if targets.is_empty() {
                writeln_out!(output, "  └── (no outgoing edges)")?;
            }

            for (i, target) in targets.iter().enumerate() {
                let prefix = if i == targets.len() - 1 {
                    "└──"
                } else {
                    "├──"
                };
                let cycle_marker = if highlight.has_edge(vertex, *target) {
                    " ⚠️  [CYCLE]"
                } else {
                    ""
                };
                writeln_out!(output, "  {} → {}{}", prefix, target, cycle_marker)?;
            }

            writeln_out!(output)?; // Empty line between vertices
        }

        if !highlight.is_empty() {
            writeln_out!(output, "⚠️  = Part of the witness cycle")?;
        }

        Ok(())
    }

    pub fn render_mermaid(
        &self,
        matrix: &AdjacencyMatrix,
        witness: Option<&WitnessCycle>,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph TD")?;

        let graph = matrix.to_digraph();
        let highlight = Highlight::new(witness, self.highlight_cycles);

        for node in graph.node_indices() {
            let vertex = graph[node];
            let label = if self.show_degrees {
                format!("{}<br/>{}", vertex, self.degree_label(&graph, node))
            } else {
                vertex.to_string()
            };
            writeln_out!(output, "    {}[\"{}\"]", mermaid_id(vertex), label)?;
        }

        // Mermaid styles edges by declaration order, so count as we go
        let mut cycle_links = Vec::new();
        let mut link_index = 0;
        for node in graph.node_indices() {
            let vertex = graph[node];
            for target in sorted_targets(&graph, node) {
                if highlight.has_edge(vertex, target) {
                    writeln_out!(
                        output,
                        "    {} ==> {}",
                        mermaid_id(vertex),
                        mermaid_id(target)
                    )?;
                    cycle_links.push(link_index);
                } else {
                    writeln_out!(
                        output,
                        "    {} --> {}",
                        mermaid_id(vertex),
                        mermaid_id(target)
                    )?;
                }
                link_index += 1;
            }
        }

        writeln_out!(output)?;
        writeln_out!(
            output,
            "    classDef normal fill:{},stroke:{},stroke-width:2px",
            colors::NORMAL_NODE_FILL,
            colors::NORMAL_NODE_STROKE
        )?;
        writeln_out!(
            output,
            "    classDef cycle fill:{},stroke:{},stroke-width:3px",
            colors::CYCLE_NODE_FILL,
            colors::CYCLE_NODE_STROKE
        )?;

        for node in graph.node_indices() {
            let vertex = graph[node];
            let class = if highlight.has_vertex(vertex) {
                "cycle"
            } else {
                "normal"
            };
            writeln_out!(output, "    class {} {}", mermaid_id(vertex), class)?;
        }

        for link in cycle_links {
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:3px",
                link,
                colors::CYCLE_EDGE
            )?;
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        matrix: &AdjacencyMatrix,
        witness: Option<&WitnessCycle>,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph directed_graph {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=circle, style=filled];")?;
        writeln_out!(output)?;

        let graph = matrix.to_digraph();
        let highlight = Highlight::new(witness, self.highlight_cycles);

        for node in graph.node_indices() {
            let vertex = graph[node];
            let (fill_color, stroke_color) = if highlight.has_vertex(vertex) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };

            let label = if self.show_degrees {
                format!("{}\\n{}", vertex, self.degree_label(&graph, node))
            } else {
                vertex.to_string()
            };

            writeln_out!(
                output,
                r#"    "{}" [label="{}", fillcolor="{}", color="{}", penwidth=2];"#,
                vertex,
                label,
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        for edge in graph.edge_references() {
            let from = graph[edge.source()];
            let to = graph[edge.target()];

            if highlight.has_edge(from, to) {
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [color="{}", penwidth=3];"#,
                    from,
                    to,
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [color="{}", penwidth=2];"#,
                    from,
                    to,
                    colors::NORMAL_EDGE
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn degree_label(&self, graph: &DiGraph<usize, ()>, node: NodeIndex) -> String {
        let in_degree = graph.neighbors_directed(node, Direction::Incoming).count();
        let out_degree = graph.neighbors_directed(node, Direction::Outgoing).count();
        format!("in: {in_degree}, out: {out_degree}")
    }
}

fn sorted_targets(graph: &DiGraph<usize, ()>, node: NodeIndex) -> Vec<usize> {
    let mut targets: Vec<usize> = graph
        .neighbors_directed(node, Direction::Outgoing)
        .map(|target| graph[target])
        .collect();
    targets.sort_unstable();
    targets
}

fn mermaid_id(vertex: usize) -> String {
    format!("v{vertex}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::detect;

    #[derive(Clone, Copy)]
    enum Format {
        Ascii,
        Mermaid,
        Dot,
    }

    fn render(format: Format, renderer: &GraphRenderer, matrix: &AdjacencyMatrix) -> String {
        let detection = detect(matrix).unwrap();
        let mut output = Vec::new();
        match format {
            Format::Ascii => renderer.render_ascii(matrix, detection.witness(), &mut output),
            Format::Mermaid => renderer.render_mermaid(matrix, detection.witness(), &mut output),
            Format::Dot => renderer.render_dot(matrix, detection.witness(), &mut output),
        }
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn two_cycle_with_tail() -> AdjacencyMatrix {
        AdjacencyMatrix::from_edges(3, [(0, 1), (1, 0), (1, 2)]).unwrap()
    }

    #[test]
    fn test_ascii_marks_cycle_vertices() {
        let output = render(
            Format::Ascii,
            &GraphRenderer::new(true, false),
            &two_cycle_with_tail(),
        );

        assert!(output.contains("│ 0 ⚠️  IN CYCLE"));
        assert!(output.contains("│ 1 ⚠️  IN CYCLE"));
        assert!(output.contains("→ 2\n"));
        assert!(output.contains("→ 0 ⚠️  [CYCLE]"));
        assert!(output.contains("Part of the witness cycle"));
    }

    #[test]
    fn test_ascii_without_highlight() {
        let output = render(
            Format::Ascii,
            &GraphRenderer::new(false, false),
            &two_cycle_with_tail(),
        );

        assert!(!output.contains("IN CYCLE"));
        assert!(!output.contains("[CYCLE]"));
    }

    #[test]
    fn test_ascii_empty_graph() {
        let output = render(
            Format::Ascii,
            &GraphRenderer::new(true, false),
            &AdjacencyMatrix::new(0).unwrap(),
        );

        assert_eq!(output, "Graph is empty.\n");
    }

    #[test]
    fn test_ascii_shows_degrees() {
        let output = render(
            Format::Ascii,
            &GraphRenderer::new(true, true),
            &two_cycle_with_tail(),
        );

        assert!(output.contains("in: 1, out: 2"));
    }

    #[test]
    fn test_mermaid_highlights_cycle_links() {
        let output = render(
            Format::Mermaid,
            &GraphRenderer::new(true, false),
            &two_cycle_with_tail(),
        );

        assert!(output.starts_with("graph TD\n"));
        assert!(output.contains("v0 ==> v1"));
        assert!(output.contains("v1 ==> v0"));
        assert!(output.contains("v1 --> v2"));
        assert!(output.contains("class v2 normal"));
        assert!(output.contains("class v0 cycle"));
        // Links are declared 0->1, 1->0, 1->2
        assert!(output.contains("linkStyle 0 stroke"));
        assert!(output.contains("linkStyle 1 stroke"));
        assert!(!output.contains("linkStyle 2 stroke"));
    }

    #[test]
    fn test_dot_output() {
        let output = render(
            Format::Dot,
            &GraphRenderer::new(true, false),
            &two_cycle_with_tail(),
        );

        assert!(output.contains("digraph directed_graph {"));
        assert!(output.contains(&format!(
            r#""0" -> "1" [color="{}", penwidth=3];"#,
            colors::CYCLE_EDGE
        )));
        assert!(output.contains(&format!(
            r#""1" -> "2" [color="{}", penwidth=2];"#,
            colors::NORMAL_EDGE
        )));
        assert!(output.trim_end().ends_with('}'));
    }

    #[test]
    fn test_dot_self_loop() {
        let matrix = AdjacencyMatrix::from_edges(1, [(0, 0)]).unwrap();
        let output = render(Format::Dot, &GraphRenderer::new(true, false), &matrix);

        assert!(output.contains(r#""0" -> "0""#));
        assert!(output.contains(colors::CYCLE_NODE_FILL));
    }
}
