use std::collections::BTreeMap;

use crate::Term;

/// One statement. Field order gives the sort order: subject, predicate, object.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    pub s: Term,
    pub p: Term,
    pub o: Term,
}

/// Triples in the order they were added, duplicates included, plus the
/// prefixes the document declared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    triples: Vec<Triple>,
    /// prefix -> namespace; later declarations replace earlier ones
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, s: Term, p: Term, o: Term) {
        self.triples.push(Triple { s, p, o });
    }

    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// Sort and drop duplicates; afterwards the graph is a set.
    pub fn canonicalize(&mut self) {
        self.triples.sort_unstable();
        self.triples.dedup();
    }
}
