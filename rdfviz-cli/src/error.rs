use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use std::process;

use rdfviz_graph_turtle::TurtleError;
use rdfviz_render::RenderError;

/// Exit codes for failed runs; success exits with 0.
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Bad config file or conflicting settings.
    Config(String),
    /// Input exists but cannot be read (strict input policy only).
    Input(String),
    /// The input is not valid Turtle.
    Parse { path: PathBuf, source: TurtleError },
    /// Layout or image rendering failed.
    Render(RenderError),
    /// Writing an auxiliary output failed.
    Output(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => EXIT_USAGE,
            _ => EXIT_ERROR,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Input(msg) => write!(
                f,
                "{} {msg}\n  {} drop --strict-input to treat unreadable input as empty",
                "error:".red().bold(),
                "help:".cyan().bold(),
            ),
            CliError::Parse { path, source } => write!(
                f,
                "{} failed to parse {}: {source}",
                "error:".red().bold(),
                path.display()
            ),
            CliError::Render(e @ RenderError::ProgramNotFound { .. }) => write!(
                f,
                "{} {e}\n  {} install Graphviz or pass --graphviz <program>",
                "error:".red().bold(),
                "help:".cyan().bold(),
            ),
            CliError::Render(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Output(msg) => write!(f, "{} {msg}", "error:".red().bold()),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<RenderError> for CliError {
    fn from(e: RenderError) -> Self {
        CliError::Render(e)
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    process::exit(err.exit_code())
}

pub type CliResult<T> = std::result::Result<T, CliError>;
