//! Error types for layout and rendering

use std::path::PathBuf;

use crate::format::ImageFormat;

/// Error type for rendering operations
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Text that is not a `graph`/`digraph` description
    #[error("invalid graph description: {0}")]
    InvalidDescription(String),

    /// Graphviz program not on PATH
    #[error("graphviz program '{program}' not found (is Graphviz installed?)")]
    ProgramNotFound { program: String },

    /// Graphviz exited with a failure status
    #[error("'{program}' failed to render {format}{}: {stderr}", status_suffix(.status))]
    Failed {
        program: String,
        format: ImageFormat,
        status: Option<i32>,
        stderr: String,
    },

    /// Graphviz succeeded but produced nothing
    #[error("'{program}' produced no {format} output")]
    EmptyOutput { program: String, format: ImageFormat },

    /// Writing an image file failed
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Other I/O while talking to the renderer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn status_suffix(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!(" (exit status {})", code),
        None => " (terminated by signal)".to_string(),
    }
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_display() {
        let err = RenderError::Failed {
            program: "dot".to_string(),
            format: ImageFormat::Png,
            status: Some(1),
            stderr: "syntax error in line 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'dot' failed to render png (exit status 1): syntax error in line 1"
        );
    }

    #[test]
    fn test_write_display() {
        let err = RenderError::Write {
            path: PathBuf::from("out/1-1.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to write out/1-1.png: denied");
    }
}
