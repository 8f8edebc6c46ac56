use clap::Parser;
use std::path::PathBuf;

use rdfviz_graph_dot::LiteralMode;
use rdfviz_render::{ImageFormat, Orientation};

/// With no arguments: reads ./1-1.ttl and writes 1-1.png and 1-1.pdf.
#[derive(Parser, Debug)]
#[command(
    name = "rdfviz",
    about = "Render a Turtle RDF graph as PNG and PDF diagrams",
    version
)]
pub struct Cli {
    /// Project id: reads <ID>.ttl and writes <ID>.<ext>
    #[arg(long, value_name = "ID")]
    pub project: Option<String>,

    /// Turtle file to read (overrides --project)
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file name without extension (overrides --project)
    #[arg(long, short = 'o', value_name = "NAME")]
    pub output: Option<String>,

    /// Directory for the images
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Layout direction: LR, RL, TB or BT
    #[arg(long, value_name = "DIR")]
    pub rankdir: Option<Orientation>,

    /// Image format to write; repeat for several (png, pdf, svg, jpeg)
    #[arg(long = "format", short = 'f', value_name = "FORMAT")]
    pub formats: Vec<ImageFormat>,

    /// Show literals as separate nodes or as rows of their subject
    #[arg(long, value_name = "nodes|fields")]
    pub literals: Option<LiteralMode>,

    /// Caption resources by IRI even when they carry an rdfs:label
    #[arg(long)]
    pub no_labels: bool,

    /// Truncate literal values longer than this (0 = never)
    #[arg(long, value_name = "N")]
    pub max_literal_len: Option<usize>,

    /// Also write the graph description (DOT) to this file
    #[arg(long, value_name = "PATH")]
    pub emit_dot: Option<PathBuf>,

    /// Fail when the input exists but cannot be read
    #[arg(long)]
    pub strict_input: bool,

    /// Graphviz program used for layout
    #[arg(long, value_name = "PROGRAM")]
    pub graphviz: Option<String>,

    /// Path to a TOML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,
}
