use std::path::PathBuf;

use console::style;
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;

use crate::detector::{CycleDetector, Detection};
use crate::discovery::GraphDiscovery;
use crate::error::LoopError;
use crate::graph::{NamedGraph, load_graph_file};
use crate::progress::ProgressReporter;

type LoadFailure = (PathBuf, LoopError);

/// A graph together with what the detector found in it
#[derive(Debug, Clone)]
pub struct InspectedGraph {
    pub graph: NamedGraph,
    pub detection: Detection,
}

impl InspectedGraph {
    /// Run the detector over `graph`
    pub fn inspect(graph: NamedGraph) -> Result<Self, LoopError> {
        let detection = CycleDetector::new().detect(graph.matrix())?;
        Ok(Self { graph, detection })
    }

    pub fn name(&self) -> &str {
        self.graph.name()
    }

    pub fn is_cyclic(&self) -> bool {
        self.detection.is_cyclic()
    }
}

/// Discovers graph files and loads them
#[derive(Debug, Clone, Default)]
pub struct GraphAnalyzer {
    graphs: Vec<NamedGraph>,
    failed: usize,
}

impl GraphAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graphs loaded so far, sorted by name
    pub fn graphs(&self) -> &[NamedGraph] {
        &self.graphs
    }

    pub fn into_graphs(self) -> Vec<NamedGraph> {
        self.graphs
    }

    /// Number of files that were found but could not be loaded
    pub fn failed_count(&self) -> usize {
        self.failed
    }

    /// Discover graph files below `paths` and load them in parallel
    ///
    /// Files that fail to load are reported as warnings and skipped, so one
    /// broken file does not hide the results for the rest. Fails with
    /// [`LoopError::NoGraphsLoaded`] when files were found but none of them
    /// loaded.
    pub fn load_graphs(
        &mut self,
        paths: &[PathBuf],
        pattern: Option<&glob::Pattern>,
        mut progress: Option<&mut ProgressReporter>,
    ) -> miette::Result<()> {
        if let Some(p) = progress.as_mut() {
            p.start_discovery();
        }

        let files = self.discover_graph_files(paths, pattern, progress.as_deref());

        if let Some(p) = progress.as_mut() {
            p.finish_discovery(files.len());
        }

        let bar = progress
            .as_mut()
            .map(|p| p.start_loading(files.len()))
            .unwrap_or_else(ProgressBar::hidden);

        let (loaded, errors) = Self::load_parallel(files, bar);

        if let Some(p) = progress.as_mut() {
            p.finish_loading();
        }

        self.report_loading_errors(&errors);
        self.failed += errors.len();

        if loaded.is_empty() && !errors.is_empty() {
            return Err(LoopError::NoGraphsLoaded {
                failed: errors.len(),
            }
            .into());
        }

        self.merge_results(loaded);

        Ok(())
    }

    fn discover_graph_files(
        &self,
        paths: &[PathBuf],
        pattern: Option<&glob::Pattern>,
        progress: Option<&ProgressReporter>,
    ) -> Vec<PathBuf> {
        let mut discovery = GraphDiscovery::new();
        let files = discovery.discover_all(paths, pattern, progress);

        // Report any warnings from discovery
        for warning in discovery.warnings() {
            eprintln!("{} {}", style("⚠").yellow(), warning);
        }

        files
    }

    fn load_parallel(
        files: Vec<PathBuf>,
        bar: ProgressBar,
    ) -> (Vec<NamedGraph>, Vec<LoadFailure>) {
        files
            .into_par_iter()
            .progress_with(bar)
            .map(|path| load_graph_file(&path).map_err(|e| (path, e)))
            .partition_map(|result| match result {
                Ok(graph) => rayon::iter::Either::Left(graph),
                Err(failure) => rayon::iter::Either::Right(failure),
            })
    }

    fn report_loading_errors(&self, errors: &[LoadFailure]) {
        for (path, error) in errors {
            eprintln!(
                "{} Failed to load graph '{}': {}",
                style("⚠").yellow(),
                path.display(),
                error
            );
        }
    }

    fn merge_results(&mut self, loaded: Vec<NamedGraph>) {
        self.graphs.extend(loaded);
        self.graphs.sort_by(|a, b| {
            a.name()
                .cmp(b.name())
                .then_with(|| a.source().cmp(&b.source()))
        });
    }
}

/// Run the detector over every graph, in parallel, keeping input order
///
/// Each detection owns all of its working state, so graphs never share
/// anything while being inspected.
pub fn inspect_all(
    graphs: Vec<NamedGraph>,
    mut progress: Option<&mut ProgressReporter>,
) -> Result<Vec<InspectedGraph>, LoopError> {
    let bar = progress
        .as_mut()
        .map(|p| p.start_cycle_detection(graphs.len()))
        .unwrap_or_else(ProgressBar::hidden);

    let inspected: Vec<InspectedGraph> = graphs
        .into_par_iter()
        .progress_with(bar)
        .map(InspectedGraph::inspect)
        .collect::<Result<_, _>>()?;

    if let Some(p) = progress.as_mut() {
        p.finish_cycle_detection(inspected.iter().filter(|g| g.is_cyclic()).count());
    }

    Ok(inspected)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::graph::AdjacencyMatrix;

    fn create_graph_dir() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::write(
            root.join("zipper.toml"),
            "vertices = 3\nedges = [[0, 1], [1, 2], [2, 0]]\n",
        )
        .unwrap();
        fs::write(root.join("bumper-cars.json"), r#"{"successors": [[1], []]}"#).unwrap();
        fs::write(root.join("broken.toml"), "matrix = [[0, 1], [1]]\n").unwrap();

        temp
    }

    #[test]
    fn test_load_graphs_skips_broken_files() {
        let temp = create_graph_dir();
        let mut analyzer = GraphAnalyzer::new();

        analyzer
            .load_graphs(&[temp.path().to_path_buf()], None, None)
            .unwrap();

        let names: Vec<_> = analyzer.graphs().iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["bumper-cars", "zipper"]);
        assert_eq!(analyzer.failed_count(), 1);
    }

    #[test]
    fn test_load_graphs_with_pattern() {
        let temp = create_graph_dir();
        let pattern = glob::Pattern::new("zip*").unwrap();
        let mut analyzer = GraphAnalyzer::new();

        analyzer
            .load_graphs(&[temp.path().to_path_buf()], Some(&pattern), None)
            .unwrap();

        assert_eq!(analyzer.graphs().len(), 1);
        assert_eq!(analyzer.failed_count(), 0);
    }

    #[test]
    fn test_load_graphs_fails_when_nothing_loads() {
        let temp = create_graph_dir();
        let pattern = glob::Pattern::new("broken*").unwrap();
        let mut analyzer = GraphAnalyzer::new();

        let err = analyzer
            .load_graphs(&[temp.path().to_path_buf()], Some(&pattern), None)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<LoopError>(),
            Some(LoopError::NoGraphsLoaded { failed: 1 })
        ));
        assert_eq!(analyzer.failed_count(), 1);
    }

    #[test]
    fn test_load_graphs_empty_directory_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let mut analyzer = GraphAnalyzer::new();

        analyzer
            .load_graphs(&[temp.path().to_path_buf()], None, None)
            .unwrap();

        assert!(analyzer.graphs().is_empty());
    }

    #[test]
    fn test_oversized_graph_does_not_stop_loading() {
        let temp = create_graph_dir();
        fs::write(
            temp.path().join("giant-wheel.toml"),
            "vertices = 4294967296\nedges = []\n",
        )
        .unwrap();
        let mut analyzer = GraphAnalyzer::new();

        analyzer
            .load_graphs(&[temp.path().to_path_buf()], None, None)
            .unwrap();

        assert_eq!(analyzer.graphs().len(), 2);
        assert_eq!(analyzer.failed_count(), 2);
    }

    #[test]
    fn test_inspect_all_keeps_order() {
        let graphs = vec![
            NamedGraph::new("a", AdjacencyMatrix::from_edges(1, [(0, 0)]).unwrap()),
            NamedGraph::new("b", AdjacencyMatrix::new(3).unwrap()),
            NamedGraph::new("c", AdjacencyMatrix::from_edges(2, [(0, 1), (1, 0)]).unwrap()),
        ];

        let inspected = inspect_all(graphs, None).unwrap();

        let summary: Vec<_> = inspected
            .iter()
            .map(|g| (g.name(), g.is_cyclic()))
            .collect();
        assert_eq!(summary, vec![("a", true), ("b", false), ("c", true)]);
    }

    #[test]
    fn test_inspect_all_empty() {
        assert!(inspect_all(Vec::new(), None).unwrap().is_empty());
    }
}
