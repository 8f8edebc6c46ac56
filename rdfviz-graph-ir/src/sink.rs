use crate::{BlankId, Datatype, Graph, Literal, Term};

/// Handle to a term created by a [`GraphSink`]; only meaningful to the
/// sink that returned it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TermId(u32);

impl TermId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Receiver for parser events.
///
/// The parser creates terms first and refers to them by [`TermId`] when it
/// emits triples, so a sink can intern terms however it likes.
pub trait GraphSink {
    /// A prefix declaration; `namespace` is already resolved.
    fn prefix(&mut self, _prefix: &str, _namespace: &str) {}

    /// Expanded IRI.
    fn iri(&mut self, iri: &str) -> TermId;

    /// `_:label` from the document. Equal labels are the same node.
    fn labeled_blank(&mut self, label: &str) -> TermId;

    /// A new anonymous node, distinct from every other blank.
    fn fresh_blank(&mut self) -> TermId;

    fn literal(&mut self, lexical: &str, datatype: Datatype, language: Option<&str>) -> TermId;

    fn triple(&mut self, s: TermId, p: TermId, o: TermId);
}

/// Sink that builds a [`Graph`].
#[derive(Debug, Default)]
pub struct GraphCollectorSink {
    graph: Graph,
    terms: Vec<Term>,
    generated: u32,
}

impl GraphCollectorSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> Graph {
        self.graph
    }

    fn push(&mut self, term: Term) -> TermId {
        let id = TermId::new(self.terms.len() as u32);
        self.terms.push(term);
        id
    }
}

impl GraphSink for GraphCollectorSink {
    fn prefix(&mut self, prefix: &str, namespace: &str) {
        self.graph.add_prefix(prefix, namespace);
    }

    fn iri(&mut self, iri: &str) -> TermId {
        self.push(Term::iri(iri))
    }

    fn labeled_blank(&mut self, label: &str) -> TermId {
        self.push(Term::blank(label))
    }

    fn fresh_blank(&mut self) -> TermId {
        let n = self.generated;
        self.generated += 1;
        self.push(Term::Blank(BlankId::Generated(n)))
    }

    fn literal(&mut self, lexical: &str, datatype: Datatype, language: Option<&str>) -> TermId {
        self.push(Term::Literal(Literal {
            lexical: lexical.into(),
            datatype,
            language: language.map(Into::into),
        }))
    }

    fn triple(&mut self, s: TermId, p: TermId, o: TermId) {
        let term = |id: TermId| self.terms[id.index()].clone();
        let (s, p, o) = (term(s), term(p), term(o));
        self.graph.add(s, p, o);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_triples_and_prefixes() {
        let mut sink = GraphCollectorSink::new();
        sink.prefix("ex", "http://example.org/");
        let s = sink.iri("http://example.org/a");
        let p = sink.iri("http://example.org/p");
        let o = sink.literal("30", Datatype::integer(), None);
        sink.triple(s, p, o);

        let graph = sink.finish();
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.prefixes["ex"], "http://example.org/");
        let triple = graph.iter().next().unwrap();
        assert_eq!(triple.o, Term::integer(30));
    }

    #[test]
    fn test_same_label_same_node() {
        let mut sink = GraphCollectorSink::new();
        let p = sink.iri("http://example.org/p");
        let a = sink.labeled_blank("x");
        let b = sink.labeled_blank("x");
        sink.triple(a, p, b);

        let graph = sink.finish();
        let triple = graph.iter().next().unwrap();
        assert_eq!(triple.s, triple.o);
    }

    #[test]
    fn test_fresh_blanks_never_match_labels() {
        let mut sink = GraphCollectorSink::new();
        let p = sink.iri("http://example.org/p");
        // Spell out every label a naive counter might produce
        let labeled: Vec<_> = ["0", "1", "genid0", "genid1", "b0", "[0]"]
            .iter()
            .map(|l| sink.labeled_blank(l))
            .collect();
        let fresh = [sink.fresh_blank(), sink.fresh_blank()];
        for &l in &labeled {
            for &f in &fresh {
                sink.triple(l, p, f);
            }
        }

        let graph = sink.finish();
        assert!(graph.iter().all(|t| t.s != t.o));
        let mut generated: Vec<_> = graph.iter().map(|t| t.o.clone()).collect();
        generated.sort();
        generated.dedup();
        assert_eq!(generated.len(), 2);
    }
}
