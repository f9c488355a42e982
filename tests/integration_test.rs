//! Integration tests for loop-the-loop using the library interface

use std::collections::HashSet;
use std::fs;
use std::io::Cursor;

use loop_the_loop::analyzer::{GraphAnalyzer, InspectedGraph, inspect_all};
use loop_the_loop::detector::{Classification, detect};
use loop_the_loop::error::LoopError;
use loop_the_loop::graph::{AdjacencyMatrix, GraphRenderer, load_graph_file, samples};
use loop_the_loop::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, ReportGenerator,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// A midway of graph files in every supported shape, plus one broken file
fn create_midway() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::create_dir_all(root.join("coasters")).unwrap();
    fs::create_dir_all(root.join("flat-rides")).unwrap();
    fs::create_dir_all(root.join("target")).unwrap();

    fs::write(
        root.join("coasters/loop.toml"),
        r#"
name = "corkscrew"
matrix = [
    [0, 1, 0, 0],
    [0, 0, 1, 1],
    [0, 0, 0, 0],
    [0, 1, 0, 0],
]
"#,
    )
    .unwrap();

    fs::write(
        root.join("coasters/tail.json"),
        r#"{"vertices": 5, "edges": [[0, 1], [1, 2], [2, 0], [2, 3], [3, 4]]}"#,
    )
    .unwrap();

    fs::write(
        root.join("flat-rides/carousel.toml"),
        "successors = [[1, 2], [3], [3], []]\n",
    )
    .unwrap();

    fs::write(root.join("flat-rides/broken.json"), r#"{"matrix": [[0, 1], [1]]}"#).unwrap();

    // Build output is never searched
    fs::write(root.join("target/ignored.toml"), "successors = [[0]]\n").unwrap();

    temp
}

fn inspect_midway(temp: &TempDir) -> Vec<InspectedGraph> {
    let mut analyzer = GraphAnalyzer::new();
    analyzer
        .load_graphs(&[temp.path().to_path_buf()], None, None)
        .unwrap();
    assert_eq!(analyzer.failed_count(), 1);

    inspect_all(analyzer.into_graphs(), None).unwrap()
}

fn witness_set(inspected: &InspectedGraph) -> HashSet<usize> {
    inspected
        .detection
        .witness()
        .unwrap()
        .vertices()
        .iter()
        .copied()
        .collect()
}

#[test]
fn test_inspect_directory_of_graphs() {
    let temp = create_midway();
    let inspected = inspect_midway(&temp);

    let summary: Vec<_> = inspected
        .iter()
        .map(|g| (g.name(), g.detection.classification()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("carousel", Classification::Acyclic),
            ("corkscrew", Classification::Cyclic),
            ("tail", Classification::Cyclic),
        ]
    );

    assert_eq!(witness_set(&inspected[1]), HashSet::from([1, 3]));
    assert_eq!(witness_set(&inspected[2]), HashSet::from([0, 1, 2]));
}

#[test]
fn test_load_graph_file_reports_source() {
    let temp = create_midway();
    let path = temp.path().join("coasters/loop.toml");

    let graph = load_graph_file(&path).unwrap();

    assert_eq!(graph.name(), "corkscrew");
    assert_eq!(graph.source(), Some(path.as_path()));
    assert_eq!(graph.matrix().edge_count(), 4);
}

#[test]
fn test_load_graph_file_rejects_ragged_matrix() {
    let temp = create_midway();

    let err = load_graph_file(&temp.path().join("flat-rides/broken.json")).unwrap_err();

    assert!(matches!(err, LoopError::InvalidGraph { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_json_report_for_directory() {
    let temp = create_midway();
    let inspected = inspect_midway(&temp);

    let report = JsonReportGenerator::new().generate_report(&inspected).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(json["graph_count"], 3);
    assert_eq!(json["cyclic_count"], 2);
    assert_eq!(json["graphs"][0]["name"], "carousel");
    assert_eq!(json["graphs"][0]["topological_order"], serde_json::json!([0, 1, 2, 3]));
    assert!(
        json["graphs"][1]["source"]
            .as_str()
            .unwrap()
            .ends_with("loop.toml")
    );
}

#[test]
fn test_github_report_annotates_files() {
    let temp = create_midway();
    let inspected = inspect_midway(&temp);

    let report = GitHubReportGenerator::new().generate_report(&inspected).unwrap();

    assert!(report.contains("Found 2 cyclic graphs"));
    assert_eq!(report.matches("::error file=").count(), 2);
}

#[test]
fn test_samples_reproduce_demo_results() {
    let graphs = samples::all()
        .unwrap()
        .into_iter()
        .map(|sample| sample.graph)
        .collect();
    let inspected = inspect_all(graphs, None).unwrap();

    let generator = HumanReportGenerator::new(None, true);
    let descriptions: Vec<String> = inspected
        .iter()
        .map(|g| generator.describe_graph(g).unwrap())
        .collect();

    assert!(descriptions[0].contains("Result: Graph is CYCLIC."));
    assert!(descriptions[1].contains("Result: Graph is ACYCLIC."));
    assert!(!descriptions[1].contains("Vertices in a cycle"));
    assert!(descriptions[2].contains("Result: Graph is CYCLIC."));

    // The witness is only pinned as a set, never as a rotation
    let witness_line = descriptions[0]
        .lines()
        .find(|line| line.starts_with("Vertices in a cycle: "))
        .unwrap();
    assert!(
        witness_line == "Vertices in a cycle: 1 -> 3 -> 1"
            || witness_line == "Vertices in a cycle: 3 -> 1 -> 3"
    );
}

#[test]
fn test_render_dot_highlights_witness() {
    let graph = AdjacencyMatrix::from_edges(4, [(0, 1), (1, 2), (2, 1), (2, 3)]).unwrap();
    let detection = detect(&graph).unwrap();

    let renderer = GraphRenderer::new(true, true);
    let mut output = Cursor::new(Vec::new());
    renderer
        .render_dot(&graph, detection.witness(), &mut output)
        .unwrap();
    let dot = String::from_utf8(output.into_inner()).unwrap();

    assert!(dot.starts_with("digraph directed_graph {"));
    assert!(dot.contains("in: 2, out: 1"));
    assert!(dot.contains(r#""1" -> "2""#));
    assert!(dot.contains(r#""2" -> "3""#));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn test_render_mermaid_without_highlighting() {
    let graph = AdjacencyMatrix::from_edges(2, [(0, 1), (1, 0)]).unwrap();
    let detection = detect(&graph).unwrap();

    let renderer = GraphRenderer::new(false, false);
    let mut output = Vec::new();
    renderer
        .render_mermaid(&graph, detection.witness(), &mut output)
        .unwrap();
    let mermaid = String::from_utf8(output).unwrap();

    assert!(mermaid.starts_with("graph TD"));
    assert!(!mermaid.contains("==>"));
    assert!(!mermaid.contains("class v0 cycle"));
}
