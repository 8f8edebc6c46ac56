//! In-memory RDF graph shared by the Turtle parser and the DOT converter.
//!
//! IRIs are stored expanded; compaction to `prefix:local` is a drawing
//! concern. Literals keep the lexical form they were written with, so a
//! caption shows `1.50` rather than a reformatted number.
//!
//! ```
//! use rdfviz_graph_ir::{Graph, Term};
//!
//! let mut graph = Graph::new();
//! graph.add(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//! );
//! assert_eq!(graph.len(), 1);
//! ```

mod graph;
mod sink;
mod term;

pub use graph::{Graph, Triple};
pub use sink::{GraphCollectorSink, GraphSink, TermId};
pub use term::{BlankId, Datatype, Literal, Term};
