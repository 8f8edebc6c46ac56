use std::fmt;
use std::sync::Arc;

use rdfviz_vocab::{rdf, xsd};

/// Datatype IRI of a literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Datatype(Arc<str>);

impl Datatype {
    pub fn new(iri: impl AsRef<str>) -> Self {
        Self(Arc::from(iri.as_ref()))
    }

    pub fn string() -> Self {
        Self::new(xsd::STRING)
    }

    pub fn lang_string() -> Self {
        Self::new(rdf::LANG_STRING)
    }

    pub fn integer() -> Self {
        Self::new(xsd::INTEGER)
    }

    pub fn decimal() -> Self {
        Self::new(xsd::DECIMAL)
    }

    pub fn double() -> Self {
        Self::new(xsd::DOUBLE)
    }

    pub fn boolean() -> Self {
        Self::new(xsd::BOOLEAN)
    }

    pub fn iri(&self) -> &str {
        &self.0
    }

    /// `xsd:string`, written without a `^^` annotation.
    pub fn is_plain(&self) -> bool {
        &*self.0 == xsd::STRING
    }
}

/// Blank node identity.
///
/// Labels written in a document and nodes the parser mints for `[]`,
/// `[ ... ]` and collections are separate spaces: `_:g1` in a document
/// is never the same node as the first generated one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlankId {
    /// `_:label`, stored without the `_:`.
    Labeled(Arc<str>),
    /// Numbered in creation order within one parse.
    Generated(u32),
}

impl fmt::Display for BlankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlankId::Labeled(label) => write!(f, "_:{label}"),
            // `[` cannot appear in a label
            BlankId::Generated(n) => write!(f, "[{n}]"),
        }
    }
}

/// Lexical form plus datatype, and a language for `rdf:langString`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub lexical: Arc<str>,
    pub datatype: Datatype,
    pub language: Option<Arc<str>>,
}

/// A subject, predicate or object.
///
/// Ordering is derived: IRIs, then blank nodes, then literals. Graphs are
/// sorted with it before drawing, so it only has to be total and stable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    Iri(Arc<str>),
    Blank(BlankId),
    Literal(Literal),
}

impl Term {
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Arc::from(iri.as_ref()))
    }

    /// Labeled blank node, `label` without the `_:`.
    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::Blank(BlankId::Labeled(Arc::from(label.as_ref())))
    }

    pub fn typed(lexical: impl AsRef<str>, datatype: Datatype) -> Self {
        Term::Literal(Literal {
            lexical: Arc::from(lexical.as_ref()),
            datatype,
            language: None,
        })
    }

    pub fn string(value: impl AsRef<str>) -> Self {
        Self::typed(value, Datatype::string())
    }

    pub fn integer(value: i64) -> Self {
        Self::typed(value.to_string(), Datatype::integer())
    }

    pub fn lang_string(value: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Term::Literal(Literal {
            lexical: Arc::from(value.as_ref()),
            datatype: Datatype::lang_string(),
            language: Some(Arc::from(lang.as_ref())),
        })
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_display() {
        assert_eq!(BlankId::Labeled(Arc::from("b0")).to_string(), "_:b0");
        assert_eq!(BlankId::Generated(3).to_string(), "[3]");
    }

    #[test]
    fn test_labeled_and_generated_blanks_differ() {
        let labeled = Term::Blank(BlankId::Labeled(Arc::from("1")));
        let generated = Term::Blank(BlankId::Generated(1));
        assert_ne!(labeled, generated);
    }

    #[test]
    fn test_literal_constructors() {
        let lit = Term::integer(-7);
        let lit = lit.as_literal().unwrap();
        assert_eq!(&*lit.lexical, "-7");
        assert_eq!(lit.datatype.iri(), xsd::INTEGER);

        let tagged = Term::lang_string("hola", "es");
        let tagged = tagged.as_literal().unwrap();
        assert_eq!(tagged.language.as_deref(), Some("es"));
        assert!(!tagged.datatype.is_plain());
        assert!(Datatype::string().is_plain());
    }

    #[test]
    fn test_kind_order() {
        let mut terms = vec![
            Term::string("z"),
            Term::blank("a"),
            Term::iri("http://example.org/b"),
            Term::iri("http://example.org/a"),
        ];
        terms.sort();
        assert_eq!(terms[0].as_iri(), Some("http://example.org/a"));
        assert_eq!(terms[1].as_iri(), Some("http://example.org/b"));
        assert!(terms[2].is_blank());
        assert!(terms[3].is_literal());
    }
}
