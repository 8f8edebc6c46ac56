//! IRI compaction and term captions.

use std::collections::BTreeMap;

use rdfviz_graph_ir::{Graph, Term};
use rdfviz_vocab::prefixes::WELL_KNOWN;

use crate::escape::truncate;

/// Prefix table used to shorten IRIs to `prefix:local`.
#[derive(Clone, Debug, Default)]
pub struct Compactor {
    /// namespace -> prefix
    namespaces: BTreeMap<String, String>,
}

impl Compactor {
    /// Bindings declared in `graph`, plus the well-known ones it does not
    /// override.
    pub fn for_graph(graph: &Graph) -> Self {
        let mut compactor = Self::default();
        for (prefix, namespace) in &graph.prefixes {
            compactor.bind(prefix, namespace);
        }
        for (prefix, namespace) in WELL_KNOWN {
            let taken = graph.prefixes.contains_key(*prefix)
                || compactor.namespaces.contains_key(*namespace);
            if !taken {
                compactor.bind(prefix, namespace);
            }
        }
        compactor
    }

    /// Bind `prefix` to `namespace`. Empty namespaces are ignored.
    pub fn bind(&mut self, prefix: &str, namespace: &str) {
        if namespace.is_empty() {
            return;
        }
        // Two prefixes for one namespace: keep the shorter, then the smaller
        match self.namespaces.get(namespace) {
            Some(existing)
                if (existing.len(), existing.as_str()) <= (prefix.len(), prefix) => {}
            _ => {
                self.namespaces
                    .insert(namespace.to_string(), prefix.to_string());
            }
        }
    }

    /// `prefix:local` using the longest matching namespace, or the IRI
    /// itself when none matches cleanly.
    pub fn compact(&self, iri: &str) -> String {
        let best = self
            .namespaces
            .iter()
            .filter(|(ns, _)| iri.starts_with(ns.as_str()))
            .filter(|(ns, _)| is_clean_local(&iri[ns.len()..]))
            .max_by_key(|(ns, _)| ns.len());

        match best {
            Some((ns, prefix)) => format!("{}:{}", prefix, &iri[ns.len()..]),
            None => iri.to_string(),
        }
    }

    /// Caption for an IRI or blank node.
    pub fn resource_caption(&self, term: &Term) -> String {
        match term {
            Term::Iri(iri) => self.compact(iri),
            Term::Blank(id) => id.to_string(),
            Term::Literal(_) => self.literal_caption(term, 0),
        }
    }

    /// `"v"`, `"v"@lang` or `"v"^^xsd:type`; the value part is truncated
    /// to `max_len` characters.
    pub fn literal_caption(&self, term: &Term, max_len: usize) -> String {
        let Some(literal) = term.as_literal() else {
            return self.resource_caption(term);
        };

        let shown = truncate(&literal.lexical, max_len);
        match &literal.language {
            Some(lang) => format!("\"{}\"@{}", shown, lang),
            None if literal.datatype.is_plain() => format!("\"{}\"", shown),
            None => format!("\"{}\"^^{}", shown, self.compact(literal.datatype.iri())),
        }
    }
}

/// A local part that reads as a single name: no path or fragment breaks.
fn is_clean_local(local: &str) -> bool {
    !local.contains(['/', '#', '?'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfviz_graph_ir::{BlankId, Datatype};

    fn compactor() -> Compactor {
        let mut graph = Graph::new();
        graph.add_prefix("ex", "http://example.org/");
        graph.add_prefix("exp", "http://example.org/people/");
        Compactor::for_graph(&graph)
    }

    #[test]
    fn test_longest_namespace_wins() {
        let c = compactor();
        assert_eq!(c.compact("http://example.org/thing"), "ex:thing");
        assert_eq!(c.compact("http://example.org/people/alice"), "exp:alice");
    }

    #[test]
    fn test_well_known_prefixes() {
        let c = compactor();
        assert_eq!(c.compact(rdfviz_vocab::rdf::TYPE), "rdf:type");
        assert_eq!(c.compact(rdfviz_vocab::xsd::DATE), "xsd:date");
    }

    #[test]
    fn test_unmatched_iri_is_kept() {
        let c = compactor();
        assert_eq!(c.compact("urn:isbn:123"), "urn:isbn:123");
        assert_eq!(c.compact("ex:A"), "ex:A");
        // Path below a namespace is not a clean local name
        assert_eq!(
            c.compact("http://example.org/a/b/c"),
            "http://example.org/a/b/c"
        );
    }

    #[test]
    fn test_document_prefix_overrides_well_known() {
        let mut graph = Graph::new();
        graph.add_prefix("r", rdfviz_vocab::rdf::NS);
        let c = Compactor::for_graph(&graph);
        assert_eq!(c.compact(rdfviz_vocab::rdf::TYPE), "r:type");
    }

    #[test]
    fn test_literal_captions() {
        let c = compactor();
        assert_eq!(c.literal_caption(&Term::string("hi"), 0), "\"hi\"");
        assert_eq!(
            c.literal_caption(&Term::lang_string("hola", "es"), 0),
            "\"hola\"@es"
        );
        assert_eq!(
            c.literal_caption(&Term::integer(42), 0),
            "\"42\"^^xsd:integer"
        );
        assert_eq!(
            c.literal_caption(&Term::typed("2000-01-01", Datatype::new(rdfviz_vocab::xsd::DATE)), 0),
            "\"2000-01-01\"^^xsd:date"
        );
        assert_eq!(c.literal_caption(&Term::string("abcdef"), 4), "\"abcd…\"");
    }

    #[test]
    fn test_blank_caption() {
        let c = compactor();
        assert_eq!(c.resource_caption(&Term::blank("b0")), "_:b0");
        assert_eq!(c.resource_caption(&Term::Blank(BlankId::Generated(0))), "[0]");
    }
}
