//! RDF vocabulary constants for rdfviz
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `owl` - OWL vocabulary (http://www.w3.org/2002/07/owl#)
//! - `prefixes` - Namespace bindings every diagram may compact against
//! - `labels` - Properties whose values caption a node

/// RDF vocabulary constants
pub mod rdf {
    /// RDF namespace
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

    /// rdf:first IRI (RDF list head)
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";

    /// rdf:rest IRI (RDF list tail)
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";

    /// rdf:nil IRI (RDF list terminator)
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// RDFS namespace
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

    /// rdfs:subClassOf IRI
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
}

/// XSD vocabulary constants
pub mod xsd {
    /// XSD namespace
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}

/// OWL vocabulary constants
pub mod owl {
    /// OWL namespace
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";
}

/// Namespace bindings available for compaction even when a document does
/// not declare them.
pub mod prefixes {
    /// `(prefix, namespace)` pairs.
    pub const WELL_KNOWN: &[(&str, &str)] = &[
        ("rdf", super::rdf::NS),
        ("rdfs", super::rdfs::NS),
        ("xsd", super::xsd::NS),
        ("owl", super::owl::NS),
    ];
}

/// Properties whose literal values are used as a node's caption.
pub mod labels {
    /// dc:title IRI
    pub const DC_TITLE: &str = "http://purl.org/dc/elements/1.1/title";

    /// foaf:name IRI
    pub const FOAF_NAME: &str = "http://xmlns.com/foaf/0.1/name";

    /// vcard:fn IRI
    pub const VCARD_FN: &str = "http://www.w3.org/2006/vcard/ns#fn";

    /// vcard:org IRI
    pub const VCARD_ORG: &str = "http://www.w3.org/2006/vcard/ns#org";

    /// Label properties in priority order.
    pub const LABEL_PROPERTIES: &[&str] = &[
        super::rdfs::LABEL,
        DC_TITLE,
        FOAF_NAME,
        VCARD_FN,
        VCARD_ORG,
    ];

    /// Check whether `iri` is one of the label properties.
    pub fn is_label_property(iri: &str) -> bool {
        LABEL_PROPERTIES.contains(&iri)
    }
}
