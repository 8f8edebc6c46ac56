//! RDF graph to Graphviz DOT conversion.
//!
//! Every IRI or blank node becomes a node, every resource-valued triple an
//! edge labeled with the compact predicate name. Literal objects become
//! their own nodes or rows in the subject's table, per [`LiteralMode`].
//!
//! # Example
//!
//! ```
//! use rdfviz_graph_dot::{DotGraph, DotOptions};
//! use rdfviz_graph_ir::{Graph, Term};
//!
//! let mut graph = Graph::new();
//! graph.add_prefix("ex", "http://example.org/");
//! graph.add(
//!     Term::iri("http://example.org/A"),
//!     Term::iri("http://example.org/rel"),
//!     Term::iri("http://example.org/B"),
//! );
//!
//! let dot = DotGraph::from_graph(&graph, &DotOptions::default());
//! assert_eq!(dot.node_count(), 2);
//! assert_eq!(dot.edges()[0].label, "ex:rel");
//! assert!(dot.to_dot().starts_with("digraph {"));
//! ```

pub mod compact;
pub mod escape;
mod graph;
mod options;

pub use compact::Compactor;
pub use graph::{DotEdge, DotGraph, DotNode, NodeKind};
pub use options::{DotOptions, LiteralMode};

