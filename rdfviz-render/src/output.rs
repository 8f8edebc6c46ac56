//! Writing rendered images to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RenderError, Result};
use crate::format::ImageFormat;
use crate::layout::LayoutGraph;
use crate::renderer::Renderer;

/// Render `graph` in every format and write `<dir>/<basename>.<ext>`.
///
/// All formats are rendered before any file is written, so a renderer
/// failure leaves existing images untouched. Existing files are replaced.
pub fn write_images<R: Renderer + ?Sized>(
    graph: &LayoutGraph,
    renderer: &R,
    dir: &Path,
    basename: &str,
    formats: &[ImageFormat],
) -> Result<Vec<PathBuf>> {
    let mut rendered = Vec::with_capacity(formats.len());
    for &format in formats {
        let bytes = renderer.render(graph, format)?;
        tracing::debug!(%format, bytes = bytes.len(), "rendered image");
        rendered.push((format, bytes));
    }

    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir).map_err(|source| RenderError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let mut written = Vec::with_capacity(rendered.len());
    for (format, bytes) in rendered {
        let path = dir.join(format!("{}.{}", basename, format.extension()));
        fs::write(&path, &bytes).map_err(|source| RenderError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote image");
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Returns the DOT text as the "image" and records each call.
    #[derive(Default)]
    struct EchoRenderer {
        calls: RefCell<Vec<ImageFormat>>,
        fail_on: Option<ImageFormat>,
    }

    impl Renderer for EchoRenderer {
        fn render(&self, graph: &LayoutGraph, format: ImageFormat) -> Result<Vec<u8>> {
            self.calls.borrow_mut().push(format);
            if self.fail_on == Some(format) {
                return Err(RenderError::EmptyOutput {
                    program: "echo".to_string(),
                    format,
                });
            }
            Ok(graph.to_dot().into_bytes())
        }
    }

    fn layout() -> LayoutGraph {
        let mut graph = LayoutGraph::from_description("digraph { a -> b }").unwrap();
        graph.set_orientation(crate::Orientation::LeftToRight);
        graph
    }

    #[test]
    fn test_writes_one_file_per_format() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = EchoRenderer::default();

        let files = write_images(&layout(), &renderer, dir.path(), "1-1", &ImageFormat::DEFAULTS).unwrap();

        assert_eq!(files, vec![dir.path().join("1-1.png"), dir.path().join("1-1.pdf")]);
        assert_eq!(*renderer.calls.borrow(), vec![ImageFormat::Png, ImageFormat::Pdf]);
        let png = fs::read_to_string(&files[0]).unwrap();
        assert!(png.contains("rankdir=LR;"));
    }

    #[test]
    fn test_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("graph.svg");
        fs::write(&target, "stale").unwrap();

        write_images(&layout(), &EchoRenderer::default(), dir.path(), "graph", &[ImageFormat::Svg]).unwrap();

        assert_ne!(fs::read_to_string(&target).unwrap(), "stale");
    }

    #[test]
    fn test_render_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = EchoRenderer {
            fail_on: Some(ImageFormat::Pdf),
            ..EchoRenderer::default()
        };

        let err = write_images(&layout(), &renderer, dir.path(), "1-1", &ImageFormat::DEFAULTS);

        assert!(err.is_err());
        assert!(!dir.path().join("1-1.png").exists());
    }

    #[test]
    fn test_creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("images");

        let files = write_images(&layout(), &EchoRenderer::default(), &nested, "g", &[ImageFormat::Png]).unwrap();

        assert!(files[0].exists());
    }
}
