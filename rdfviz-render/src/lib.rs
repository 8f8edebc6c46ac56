//! Layout and image rendering for rdfviz.
//!
//! A [`LayoutGraph`] wraps a DOT description together with the layout
//! settings we own (currently the rank direction). A [`Renderer`] turns it
//! into image bytes; [`GraphvizRenderer`] does so by running Graphviz.
//!
//! # Example
//!
//! ```no_run
//! use rdfviz_render::{write_images, GraphvizRenderer, ImageFormat, LayoutGraph, Orientation};
//! use std::path::Path;
//!
//! let mut graph = LayoutGraph::from_description("digraph { a -> b }").unwrap();
//! graph.set_orientation(Orientation::LeftToRight);
//!
//! let files = write_images(
//!     &graph,
//!     &GraphvizRenderer::default(),
//!     Path::new("."),
//!     "example",
//!     &ImageFormat::DEFAULTS,
//! )
//! .unwrap();
//! assert_eq!(files.len(), 2);
//! ```

pub mod error;
mod format;
mod layout;
mod output;
mod renderer;

pub use error::{RenderError, Result};
pub use format::{ImageFormat, Orientation};
pub use layout::LayoutGraph;
pub use output::write_images;
pub use renderer::{GraphvizRenderer, Renderer};
