//! Turtle tokens.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use rdfviz_vocab::xsd;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range in the source
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Which numeric production a number matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Decimal,
    Double,
}

impl NumberKind {
    pub fn datatype(self) -> &'static str {
        match self {
            NumberKind::Integer => xsd::INTEGER,
            NumberKind::Decimal => xsd::DECIMAL,
            NumberKind::Double => xsd::DOUBLE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `<...>` with `\u` escapes decoded, not yet resolved
    Iri(Arc<str>),
    /// `prefix:local`; `local` is empty for a bare `prefix:`
    PName { prefix: Arc<str>, local: Arc<str> },
    /// `_:label`
    BlankLabel(Arc<str>),
    /// `[]`
    Anon,
    /// `()`
    Nil,
    /// Quoted string, escapes decoded
    String(Arc<str>),
    /// Number exactly as written
    Number(Arc<str>, NumberKind),
    Boolean(bool),
    /// `@en-US` without the `@`
    LangTag(Arc<str>),
    /// `@prefix`, or `PREFIX` when `sparql` (no closing dot)
    Prefix { sparql: bool },
    /// `@base`, or `BASE` when `sparql`
    Base { sparql: bool },
    /// `a`, short for `rdf:type`
    A,
    Dot,
    Comma,
    Semicolon,
    /// `^^`
    Carets,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Iri(iri) => write!(f, "<{iri}>"),
            TokenKind::PName { prefix, local } => write!(f, "{prefix}:{local}"),
            TokenKind::BlankLabel(label) => write!(f, "_:{label}"),
            TokenKind::Anon => f.write_str("[]"),
            TokenKind::Nil => f.write_str("()"),
            TokenKind::String(s) => write!(f, "\"{s}\""),
            TokenKind::Number(lexical, _) => f.write_str(lexical),
            TokenKind::Boolean(b) => write!(f, "{b}"),
            TokenKind::LangTag(tag) => write!(f, "@{tag}"),
            TokenKind::Prefix { sparql: false } => f.write_str("@prefix"),
            TokenKind::Prefix { sparql: true } => f.write_str("PREFIX"),
            TokenKind::Base { sparql: false } => f.write_str("@base"),
            TokenKind::Base { sparql: true } => f.write_str("BASE"),
            TokenKind::A => f.write_str("a"),
            TokenKind::Dot => f.write_str("."),
            TokenKind::Comma => f.write_str(","),
            TokenKind::Semicolon => f.write_str(";"),
            TokenKind::Carets => f.write_str("^^"),
            TokenKind::LBracket => f.write_str("["),
            TokenKind::RBracket => f.write_str("]"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}
