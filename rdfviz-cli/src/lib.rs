//! rdfviz CLI library.
//!
//! The types and the pipeline behind the `rdfviz` binary: settings come from
//! [`config::PipelineConfig`], a Turtle file goes through [`pipeline::run`],
//! and failures surface as [`error::CliError`] with an exit code.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod pipeline;

pub use pipeline::{run, RunOutcome};

use cli::Cli;
use config::PipelineConfig;
use rdfviz_render::GraphvizRenderer;

/// Resolve settings from a parsed [`Cli`] and run the pipeline with Graphviz.
pub fn execute(cli: &Cli) -> error::CliResult<RunOutcome> {
    let config = PipelineConfig::from_cli(cli)?;
    let renderer = GraphvizRenderer::new(&config.graphviz_program);
    run(&config, &renderer)
}
