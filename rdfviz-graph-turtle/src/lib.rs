//! Turtle (TTL) parser for rdfviz.
//!
//! [`parse`] streams prefixes and triples into any
//! [`GraphSink`](rdfviz_graph_ir::GraphSink); [`parse_graph`] collects them
//! into a [`Graph`].
//!
//! # Example
//!
//! ```
//! use rdfviz_graph_turtle::{parse, parse_graph};
//! use rdfviz_graph_ir::GraphCollectorSink;
//!
//! let doc = "@prefix ex: <http://example.org/> .\nex:a ex:rel ex:b ; ex:size 3 .\n";
//!
//! let mut sink = GraphCollectorSink::new();
//! parse(doc, &mut sink).unwrap();
//! let streamed = sink.finish();
//!
//! assert_eq!(streamed.len(), 2);
//! assert_eq!(streamed, parse_graph(doc).unwrap());
//! ```

pub mod error;
mod iri;
pub mod lex;
pub mod parser;

pub use error::{Result, TurtleError};
pub use lex::{tokenize, Token, TokenKind};
pub use parser::parse;

use rdfviz_graph_ir::{Graph, GraphCollectorSink};

/// Parse a Turtle document into an in-memory graph.
///
/// Triples keep document order; declared prefixes are carried on the graph
/// so later stages can compact IRIs.
pub fn parse_graph(input: &str) -> Result<Graph> {
    let mut sink = GraphCollectorSink::new();
    parse(input, &mut sink)?;
    let graph = sink.finish();
    tracing::debug!(
        triples = graph.len(),
        prefixes = graph.prefixes.len(),
        "parsed turtle document"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const EX: &str = "@prefix ex: <http://example.org/> .\n";

    #[test]
    fn test_single_edge_and_prefix() {
        let graph = parse_graph(&format!("{EX}ex:a ex:rel ex:b .")).unwrap();
        assert_eq!(graph.len(), 1);
        let triple = graph.iter().next().unwrap();
        assert_eq!(triple.s.as_iri(), Some("http://example.org/a"));
        assert_eq!(triple.o.as_iri(), Some("http://example.org/b"));
        assert_eq!(graph.prefixes["ex"], "http://example.org/");
    }

    #[test]
    fn test_two_subjects_with_shared_type() {
        let doc = format!(
            "{EX}ex:server a ex:Host ; ex:port 80 ; ex:dns ex:resolver .\n\
             ex:resolver a ex:Host ; ex:port 53 .\n"
        );
        let graph = parse_graph(&doc).unwrap();
        assert_eq!(graph.len(), 5);
        let subjects: BTreeSet<_> = graph.iter().map(|t| &t.s).collect();
        assert_eq!(subjects.len(), 2);
    }

    #[test]
    fn test_property_list_adds_blank_subject() {
        let graph = parse_graph(&format!("{EX}ex:a ex:via [ ex:hops 2 ] .")).unwrap();
        let subjects: BTreeSet<_> = graph.iter().map(|t| &t.s).collect();
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects.iter().filter(|t| t.is_blank()).count(), 1);
    }

    #[test]
    fn test_comment_only_document() {
        assert!(parse_graph("# nothing here\n").unwrap().is_empty());
        assert!(parse_graph("").unwrap().is_empty());
    }

    #[test]
    fn test_truncated_statement_reports_line() {
        let err = parse_graph(&format!("{EX}ex:a ex:rel")).unwrap_err();
        assert!(matches!(err, TurtleError::Parse { line: 2, .. }));
    }
}
