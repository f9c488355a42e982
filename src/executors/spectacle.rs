//! Spectacle command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::SpectacleConfig;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::{GraphRenderer, load_graph_file};

pub struct SpectacleExecutor;

impl CommandExecutor for SpectacleExecutor {
    type Config = SpectacleConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let graph = load_graph_file(&config.path)
            .wrap_err_with(|| format!("Failed to load graph '{}'", config.path.display()))?;

        // Detect cycles only if highlighting is requested
        let detection = if config.highlight_cycles {
            Some(
                CycleDetector::new()
                    .detect(graph.matrix())
                    .wrap_err("Failed to detect cycles")?,
            )
        } else {
            None
        };
        let witness = detection.as_ref().and_then(|d| d.witness());

        let renderer = GraphRenderer::new(config.highlight_cycles, config.show_degrees);

        // Determine output destination
        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        match config.format {
            GraphFormat::Ascii => {
                renderer
                    .render_ascii(graph.matrix(), witness, output_writer.as_mut())
                    .wrap_err("Failed to render ASCII graph")?;
            }
            GraphFormat::Mermaid => {
                renderer
                    .render_mermaid(graph.matrix(), witness, output_writer.as_mut())
                    .wrap_err("Failed to render Mermaid graph")?;
            }
            GraphFormat::Dot => {
                renderer
                    .render_dot(graph.matrix(), witness, output_writer.as_mut())
                    .wrap_err("Failed to render DOT graph")?;
            }
        }

        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush graph output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
