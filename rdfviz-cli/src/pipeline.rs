//! Turtle file in, images out.

use std::path::PathBuf;

use rdfviz_graph_dot::DotGraph;
use rdfviz_render::{write_images, LayoutGraph, Renderer};

use crate::config::PipelineConfig;
use crate::error::{CliError, CliResult};
use crate::input::load_input;

/// How a run ended when it did not fail.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// No input to draw; nothing was written.
    NoInput { path: PathBuf },
    Rendered {
        files: Vec<PathBuf>,
        nodes: usize,
        edges: usize,
    },
}

pub fn run<R: Renderer + ?Sized>(config: &PipelineConfig, renderer: &R) -> CliResult<RunOutcome> {
    let span = tracing::info_span!("render", input = %config.input_path.display());
    let _guard = span.enter();

    let outcome = load_input(&config.input_path);
    let Some(text) = config.input_policy.resolve(&config.input_path, outcome)? else {
        return Ok(RunOutcome::NoInput {
            path: config.input_path.clone(),
        });
    };

    let graph = rdfviz_graph_turtle::parse_graph(&text).map_err(|source| CliError::Parse {
        path: config.input_path.clone(),
        source,
    })?;

    let dot = DotGraph::from_graph(&graph, &config.dot);
    tracing::info!(
        triples = graph.len(),
        nodes = dot.node_count(),
        edges = dot.edge_count(),
        "built graph description"
    );

    let mut layout = LayoutGraph::from_description(&dot.to_dot())?;
    layout.set_orientation(config.orientation);

    if let Some(path) = &config.emit_dot {
        std::fs::write(path, layout.to_dot()).map_err(|e| {
            CliError::Output(format!("failed to write {}: {e}", path.display()))
        })?;
        tracing::info!(path = %path.display(), "wrote graph description");
    }

    let files = write_images(
        &layout,
        renderer,
        &config.output_dir,
        &config.output_basename,
        &config.formats,
    )?;

    Ok(RunOutcome::Rendered {
        files,
        nodes: dot.node_count(),
        edges: dot.edge_count(),
    })
}
