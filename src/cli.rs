use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "loop-the-loop",
    about = "🎢 Detect cycles in directed graphs",
    long_about = "loop-the-loop reads directed graphs from TOML or JSON files, classifies each \
                  one as cyclic or acyclic with Kahn's algorithm, and reports one concrete \
                  witness cycle for every cyclic graph.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the rides for loops
    ///
    /// Loads every graph file under the given paths and reports whether each
    /// graph contains a directed cycle.
    #[command(
        long_about = "Load graph files and detect directed cycles. Directories are searched \
                      recursively for .toml and .json graph files. Every graph is classified with \
                      Kahn's algorithm; for cyclic graphs one witness cycle is reconstructed from \
                      the predecessor trace and reported. Use --error-on-cycles in CI to fail \
                      when any graph is cyclic."
    )]
    Inspect {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Print the adjacency matrix of each graph
        #[arg(long, env = "LOOP_THE_LOOP_SHOW_MATRIX")]
        show_matrix: bool,

        /// Exit with error code if cycles found
        #[arg(long, env = "LOOP_THE_LOOP_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Run a dress rehearsal on the built-in sample graphs
    ///
    /// Runs detection over the bundled demonstration graphs, printing each
    /// adjacency matrix and its classification.
    #[command(
        long_about = "Run cycle detection over the built-in sample graphs: a cyclic graph, an \
                      acyclic graph, and a cyclic graph with an acyclic tail. Useful to see what \
                      the reports look like without writing any graph files."
    )]
    Rehearse {
        /// Only rehearse the sample with this name
        #[arg(long, value_name = "NAME", env = "LOOP_THE_LOOP_SAMPLE")]
        sample: Option<String>,

        #[command(flatten)]
        format: FormatArgs,

        /// Do not print the adjacency matrices
        #[arg(long, env = "LOOP_THE_LOOP_NO_MATRIX")]
        no_matrix: bool,
    },

    /// Create a spectacular visualization of a graph
    ///
    /// Renders a single graph as ASCII art, a Mermaid diagram or a Graphviz
    /// DOT file, highlighting the witness cycle.
    #[command(
        long_about = "Render one graph file in ASCII, Mermaid or Graphviz DOT format. The witness \
                      cycle found by the detector is highlighted unless --highlight-cycles=false \
                      is given, and --show-degrees annotates every vertex with its in- and \
                      out-degree."
    )]
    Spectacle {
        /// Graph file to render
        #[arg(value_name = "PATH", env = "LOOP_THE_LOOP_GRAPH")]
        path: PathBuf,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "LOOP_THE_LOOP_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "LOOP_THE_LOOP_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight the witness cycle in the graph
        #[arg(
            long,
            default_value = "true",
            action = clap::ArgAction::Set,
            env = "LOOP_THE_LOOP_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,

        /// Annotate vertices with their in- and out-degree
        #[arg(long, env = "LOOP_THE_LOOP_SHOW_DEGREES")]
        show_degrees: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}
