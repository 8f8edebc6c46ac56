use serde::Deserialize;
use std::path::{Path, PathBuf};

use rdfviz_graph_dot::{DotOptions, LiteralMode};
use rdfviz_render::{GraphvizRenderer, ImageFormat, Orientation};

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use crate::input::InputPolicy;

/// Project id used when none is given.
pub const DEFAULT_PROJECT: &str = "1-1";

/// Everything one run of the pipeline needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub output_basename: String,
    pub orientation: Orientation,
    pub formats: Vec<ImageFormat>,
    pub input_policy: InputPolicy,
    pub dot: DotOptions,
    pub graphviz_program: String,
    pub emit_dot: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::for_project(DEFAULT_PROJECT)
    }
}

impl PipelineConfig {
    /// `<id>.ttl` in, `<id>.png` and `<id>.pdf` out, left to right.
    pub fn for_project(id: &str) -> Self {
        Self {
            input_path: PathBuf::from(format!("{id}.ttl")),
            output_dir: PathBuf::from("."),
            output_basename: id.to_string(),
            orientation: Orientation::LeftToRight,
            formats: ImageFormat::DEFAULTS.to_vec(),
            input_policy: InputPolicy::Lenient,
            dot: DotOptions::default(),
            graphviz_program: GraphvizRenderer::DEFAULT_PROGRAM.to_string(),
            emit_dot: None,
        }
    }

    /// Defaults, then the `--config` file, then command-line flags.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let mut config = Self::default();
        if let Some(path) = &cli.config {
            config.apply(FileConfig::load(path)?.into_overrides()?);
        }
        config.apply(Overrides::from(cli));
        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }

    fn apply(&mut self, o: Overrides) {
        if let Some(id) = o.project {
            self.input_path = PathBuf::from(format!("{id}.ttl"));
            self.output_basename = id;
        }
        if let Some(input) = o.input {
            self.input_path = input;
        }
        if let Some(output) = o.output {
            self.output_basename = output;
        }
        if let Some(dir) = o.out_dir {
            self.output_dir = dir;
        }
        if let Some(orientation) = o.orientation {
            self.orientation = orientation;
        }
        if let Some(formats) = o.formats {
            self.formats = dedupe(formats);
        }
        if let Some(true) = o.strict_input {
            self.input_policy = InputPolicy::Strict;
        } else if let Some(false) = o.strict_input {
            self.input_policy = InputPolicy::Lenient;
        }
        if let Some(literals) = o.literals {
            self.dot.literals = literals;
        }
        if let Some(use_labels) = o.use_labels {
            self.dot.use_labels = use_labels;
        }
        if let Some(max) = o.max_literal_len {
            self.dot.max_literal_len = max;
        }
        if let Some(program) = o.graphviz_program {
            self.graphviz_program = program;
        }
        if let Some(path) = o.emit_dot {
            self.emit_dot = Some(path);
        }
    }
}

fn dedupe(formats: Vec<ImageFormat>) -> Vec<ImageFormat> {
    let mut out: Vec<ImageFormat> = Vec::with_capacity(formats.len());
    for f in formats {
        if !out.contains(&f) {
            out.push(f);
        }
    }
    out
}

/// One layer of settings; `None` leaves the lower layer in place.
#[derive(Debug, Default)]
struct Overrides {
    project: Option<String>,
    input: Option<PathBuf>,
    output: Option<String>,
    out_dir: Option<PathBuf>,
    orientation: Option<Orientation>,
    formats: Option<Vec<ImageFormat>>,
    strict_input: Option<bool>,
    literals: Option<LiteralMode>,
    use_labels: Option<bool>,
    max_literal_len: Option<usize>,
    graphviz_program: Option<String>,
    emit_dot: Option<PathBuf>,
}

impl From<&Cli> for Overrides {
    fn from(cli: &Cli) -> Self {
        Self {
            project: cli.project.clone(),
            input: cli.input.clone(),
            output: cli.output.clone(),
            out_dir: cli.out_dir.clone(),
            orientation: cli.rankdir,
            formats: (!cli.formats.is_empty()).then(|| cli.formats.clone()),
            // Flags can only switch these on
            strict_input: cli.strict_input.then_some(true),
            literals: cli.literals,
            use_labels: cli.no_labels.then_some(false),
            max_literal_len: cli.max_literal_len,
            graphviz_program: cli.graphviz.clone(),
            emit_dot: cli.emit_dot.clone(),
        }
    }
}

/// TOML config file layout.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub project: Option<String>,
    pub input: Option<PathBuf>,
    pub output: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub rankdir: Option<Orientation>,
    pub formats: Option<Vec<ImageFormat>>,
    pub strict_input: Option<bool>,
    #[serde(default)]
    pub dot: DotSection,
    #[serde(default)]
    pub graphviz: GraphvizSection,
}

/// `[dot]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DotSection {
    pub literals: Option<LiteralMode>,
    pub use_labels: Option<bool>,
    pub max_literal_len: Option<usize>,
}

/// `[graphviz]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphvizSection {
    pub program: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("failed to read config {}: {e}", path.display()))
        })?;
        Self::parse(&content)
            .map_err(|msg| CliError::Config(format!("invalid config {}: {msg}", path.display())))
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.message().to_string())
    }

    fn into_overrides(self) -> CliResult<Overrides> {
        if matches!(&self.formats, Some(f) if f.is_empty()) {
            return Err(CliError::Config(
                "'formats' must list at least one image format".to_string(),
            ));
        }
        if matches!(&self.graphviz.program, Some(p) if p.trim().is_empty()) {
            return Err(CliError::Config(
                "'graphviz.program' must not be empty".to_string(),
            ));
        }
        Ok(Overrides {
            project: self.project,
            input: self.input,
            output: self.output,
            out_dir: self.out_dir,
            orientation: self.rankdir,
            formats: self.formats,
            strict_input: self.strict_input,
            literals: self.dot.literals,
            use_labels: self.dot.use_labels,
            max_literal_len: self.dot.max_literal_len,
            graphviz_program: self.graphviz.program,
            emit_dot: None,
        })
    }
}
