//! Error types for Turtle parsing

/// Error type for Turtle parsing operations
#[derive(Debug, thiserror::Error)]
pub enum TurtleError {
    /// Invalid token. `message` already carries a source pointer.
    #[error("lexer error at line {line}, column {column}: {message}")]
    Lexer {
        line: usize,
        column: usize,
        message: String,
    },

    /// Unexpected token or invalid structure
    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// Relative IRI without a base
    #[error("IRI resolution error: {0}")]
    IriResolution(String),

    /// Prefix used before being declared
    #[error("undefined prefix '{0}:'")]
    UndefinedPrefix(String),
}

/// Result type for Turtle operations
pub type Result<T> = std::result::Result<T, TurtleError>;

impl TurtleError {
    /// Build a lexer error at byte `position` of `source`.
    pub fn lexer(source: &str, position: usize, message: impl Into<String>) -> Self {
        let (line, column) = line_col(source, position);
        Self::Lexer {
            line,
            column,
            message: message.into(),
        }
    }

    /// Build a parse error at byte `position` of `source`.
    pub fn parse(source: &str, position: usize, message: impl Into<String>) -> Self {
        let (line, column) = line_col(source, position);
        Self::Parse {
            line,
            column,
            message: message.into(),
        }
    }

    /// 1-indexed (line, column) of the error, when it has one.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Self::Lexer { line, column, .. } | Self::Parse { line, column, .. } => {
                Some((*line, *column))
            }
            _ => None,
        }
    }
}

/// Convert a byte position to (line, column), 1-indexed.
pub(crate) fn line_col(source: &str, position: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;

    for (i, c) in source.char_indices() {
        if i >= position {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }

    (line, col)
}

/// Render the offending source line with a caret under `column`.
pub(crate) fn snippet(source: &str, line: usize, column: usize) -> String {
    let content = source.lines().nth(line.saturating_sub(1)).unwrap_or("");
    let pointer = " ".repeat(column.saturating_sub(1));
    format!("\n  |\n{line} | {content}\n  | {pointer}^")
}
