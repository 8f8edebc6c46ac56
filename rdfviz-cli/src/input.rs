use std::io;
use std::path::Path;

use crate::error::{CliError, CliResult};

/// What reading the input file produced.
#[derive(Debug)]
pub enum InputOutcome {
    Loaded(String),
    /// No file at the path.
    Missing,
    /// The path exists but could not be read as UTF-8 text.
    Unreadable(io::Error),
}

/// How to treat input that could not be loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputPolicy {
    /// Missing or unreadable input means "nothing to draw".
    #[default]
    Lenient,
    /// Unreadable input is an error; missing input is still nothing to draw.
    Strict,
}

/// Read the whole file; the handle is closed before this returns.
pub fn load_input(path: &Path) -> InputOutcome {
    match std::fs::read_to_string(path) {
        Ok(text) => InputOutcome::Loaded(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => InputOutcome::Missing,
        Err(e) => InputOutcome::Unreadable(e),
    }
}

impl InputPolicy {
    /// Content to parse, `None` when there is nothing to draw.
    pub fn resolve(self, path: &Path, outcome: InputOutcome) -> CliResult<Option<String>> {
        match outcome {
            InputOutcome::Loaded(text) => {
                tracing::debug!(path = %path.display(), bytes = text.len(), "loaded input");
                Ok(Some(text))
            }
            InputOutcome::Missing => {
                tracing::info!(path = %path.display(), "input not found, nothing to render");
                Ok(None)
            }
            InputOutcome::Unreadable(e) => match self {
                InputPolicy::Lenient => {
                    tracing::warn!(path = %path.display(), error = %e, "input unreadable, nothing to render");
                    Ok(None)
                }
                InputPolicy::Strict => Err(CliError::Input(format!(
                    "failed to read {}: {e}",
                    path.display()
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_outcomes() {
        let dir = tempfile::tempdir().unwrap();

        let file = dir.path().join("g.ttl");
        std::fs::write(&file, "<a:b> <a:c> <a:d> .").unwrap();
        assert!(matches!(load_input(&file), InputOutcome::Loaded(t) if t.starts_with("<a:b>")));

        assert!(matches!(load_input(&dir.path().join("absent.ttl")), InputOutcome::Missing));

        // A directory exists but is not readable as text
        assert!(matches!(load_input(dir.path()), InputOutcome::Unreadable(_)));

        let binary = dir.path().join("bin.ttl");
        std::fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(load_input(&binary), InputOutcome::Unreadable(_)));
    }

    #[test]
    fn test_policy() {
        let path = Path::new("x.ttl");
        let unreadable = || InputOutcome::Unreadable(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));

        assert_eq!(InputPolicy::Lenient.resolve(path, unreadable()).unwrap(), None);
        assert!(matches!(
            InputPolicy::Strict.resolve(path, unreadable()),
            Err(CliError::Input(_))
        ));
        assert_eq!(InputPolicy::Strict.resolve(path, InputOutcome::Missing).unwrap(), None);
        assert_eq!(
            InputPolicy::Lenient
                .resolve(path, InputOutcome::Loaded("t".into()))
                .unwrap()
                .as_deref(),
            Some("t")
        );
    }
}
