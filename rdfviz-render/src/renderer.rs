//! Renderers turn a layout graph into image bytes.

use std::io::{self, ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::error::{RenderError, Result};
use crate::format::ImageFormat;
use crate::layout::LayoutGraph;

/// Lays out and encodes a graph in one image format.
pub trait Renderer {
    fn render(&self, graph: &LayoutGraph, format: ImageFormat) -> Result<Vec<u8>>;
}

/// Renders by piping DOT text through a Graphviz program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphvizRenderer {
    program: String,
}

impl GraphvizRenderer {
    pub const DEFAULT_PROGRAM: &'static str = "dot";

    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&self, graph: &LayoutGraph, format: ImageFormat) -> Result<Vec<u8>> {
        let dot = graph.to_dot();
        tracing::debug!(program = %self.program, %format, bytes = dot.len(), "running graphviz");

        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", format.graphviz_name()))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => RenderError::ProgramNotFound {
                    program: self.program.clone(),
                },
                _ => RenderError::Io(e),
            })?;

        // Feed stdin from its own thread so a program that fills its
        // stdout or stderr pipe before reading everything cannot stall us
        let stdin = child.stdin.take();
        let input = dot.as_bytes();
        let (written, output) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(input),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (written, output)
        });
        let output = output?;

        if !output.status.success() {
            return Err(RenderError::Failed {
                program: self.program.clone(),
                format,
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        if output.stdout.is_empty() {
            return Err(RenderError::EmptyOutput {
                program: self.program.clone(),
                format,
            });
        }

        // An early exit closes the pipe; the exit status above says why
        match written {
            Err(e) if e.kind() != ErrorKind::BrokenPipe => Err(e.into()),
            _ => Ok(output.stdout),
        }
    }
}
