//! Recursive descent over the token stream.
//!
//! Each triple goes to the sink as soon as its object is known; nothing
//! is buffered except the prefix table and the current base.

use std::collections::HashMap;
use std::sync::Arc;

use rdfviz_graph_ir::{Datatype, GraphSink, TermId};
use rdfviz_vocab::rdf;

use crate::error::{Result, TurtleError};
use crate::iri;
use crate::lex::{tokenize, Token, TokenKind};

/// Parse a Turtle document, reporting prefixes and triples to `sink`.
pub fn parse<S: GraphSink>(input: &str, sink: &mut S) -> Result<()> {
    let mut parser = Parser {
        source: input,
        tokens: tokenize(input)?,
        pos: 0,
        sink,
        prefixes: HashMap::new(),
        base: None,
    };
    while !parser.current().is_eof() {
        parser.statement()?;
    }
    Ok(())
}

struct Parser<'a, S> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    sink: &'a mut S,
    prefixes: HashMap<Arc<str>, String>,
    base: Option<String>,
}

impl<S: GraphSink> Parser<'_, S> {
    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek(&self) -> &TokenKind {
        &self.current().kind
    }

    fn advance(&mut self) {
        if !self.current().is_eof() {
            self.pos += 1;
        }
    }

    /// Consume the current token if it is `kind`.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        let matched = self.peek() == kind;
        if matched {
            self.advance();
        }
        matched
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{kind}'")))
        }
    }

    /// Apply `accept` to the current token; consume it on `Some`.
    fn take<T>(&mut self, what: &str, accept: impl FnOnce(&TokenKind) -> Option<T>) -> Result<T> {
        match accept(self.peek()) {
            Some(value) => {
                self.advance();
                Ok(value)
            }
            None => Err(self.unexpected(what)),
        }
    }

    /// "expected {what}, found {token}" at the current token.
    fn unexpected(&self, what: &str) -> TurtleError {
        let token = self.current();
        TurtleError::parse(
            self.source,
            token.span.start,
            format!("expected {what}, found {}", token.kind),
        )
    }

    fn statement(&mut self) -> Result<()> {
        match self.peek() {
            TokenKind::Prefix { sparql } => {
                let dotted = !*sparql;
                self.advance();
                self.prefix_declaration()?;
                if dotted {
                    self.expect(&TokenKind::Dot)?;
                }
            }
            TokenKind::Base { sparql } => {
                let dotted = !*sparql;
                self.advance();
                self.base_declaration()?;
                if dotted {
                    self.expect(&TokenKind::Dot)?;
                }
            }
            _ => {
                self.triples()?;
                self.expect(&TokenKind::Dot)?;
            }
        }
        Ok(())
    }

    fn prefix_declaration(&mut self) -> Result<()> {
        let prefix = self.take("prefix name", |kind| match kind {
            TokenKind::PName { prefix, local } if local.is_empty() => Some(Arc::clone(prefix)),
            _ => None,
        })?;
        let namespace = self.take("namespace IRI", iri_ref)?;
        let namespace = self.resolve(&namespace)?;

        self.sink.prefix(&prefix, &namespace);
        self.prefixes.insert(prefix, namespace);
        Ok(())
    }

    fn base_declaration(&mut self) -> Result<()> {
        let reference = self.take("base IRI", iri_ref)?;
        // The first base may itself be relative; later ones resolve against it
        let base = match &self.base {
            Some(current) => iri::resolve(current, &reference),
            None => reference.to_string(),
        };
        self.base = Some(base);
        Ok(())
    }

    fn triples(&mut self) -> Result<()> {
        if self.peek() == &TokenKind::LBracket {
            let subject = self.property_list_node()?;
            // `[ ... ] .` is a complete statement
            if self.peek() != &TokenKind::Dot {
                self.predicate_objects(subject)?;
            }
            return Ok(());
        }
        let subject = match self.resource()? {
            Some(id) => id,
            None => return Err(self.unexpected("subject")),
        };
        self.predicate_objects(subject)
    }

    fn predicate_objects(&mut self, subject: TermId) -> Result<()> {
        loop {
            let predicate = self.verb()?;
            self.objects(subject, predicate)?;

            if !self.eat(&TokenKind::Semicolon) {
                return Ok(());
            }
            while self.eat(&TokenKind::Semicolon) {}
            if matches!(self.peek(), TokenKind::Dot | TokenKind::RBracket | TokenKind::Eof) {
                return Ok(());
            }
        }
    }

    fn verb(&mut self) -> Result<TermId> {
        if self.eat(&TokenKind::A) {
            return Ok(self.sink.iri(rdf::TYPE));
        }
        match self.iri()? {
            Some(iri) => Ok(self.sink.iri(&iri)),
            None => Err(self.unexpected("predicate")),
        }
    }

    fn objects(&mut self, subject: TermId, predicate: TermId) -> Result<()> {
        loop {
            let object = self.object()?;
            self.sink.triple(subject, predicate, object);
            if !self.eat(&TokenKind::Comma) {
                return Ok(());
            }
        }
    }

    fn object(&mut self) -> Result<TermId> {
        if let Some(id) = self.resource()? {
            return Ok(id);
        }
        match self.literal()? {
            Some(id) => Ok(id),
            None => Err(self.unexpected("object")),
        }
    }

    /// An IRI, resolved or expanded; `None` if the current token is not one.
    fn iri(&mut self) -> Result<Option<String>> {
        let iri = match self.peek() {
            TokenKind::Iri(reference) => self.resolve(reference)?,
            TokenKind::PName { prefix, local } => match self.prefixes.get(prefix) {
                Some(namespace) => format!("{namespace}{local}"),
                None => return Err(TurtleError::UndefinedPrefix(prefix.to_string())),
            },
            _ => return Ok(None),
        };
        self.advance();
        Ok(Some(iri))
    }

    /// Anything that may stand in subject position.
    fn resource(&mut self) -> Result<Option<TermId>> {
        if let Some(iri) = self.iri()? {
            return Ok(Some(self.sink.iri(&iri)));
        }
        let id = match self.peek() {
            TokenKind::BlankLabel(label) => {
                let label = Arc::clone(label);
                self.advance();
                self.sink.labeled_blank(&label)
            }
            TokenKind::Anon => {
                self.advance();
                self.sink.fresh_blank()
            }
            TokenKind::Nil => {
                self.advance();
                self.sink.iri(rdf::NIL)
            }
            TokenKind::LBracket => self.property_list_node()?,
            TokenKind::LParen => self.collection()?,
            _ => return Ok(None),
        };
        Ok(Some(id))
    }

    fn literal(&mut self) -> Result<Option<TermId>> {
        let id = match self.peek().clone() {
            TokenKind::String(text) => {
                self.advance();
                self.annotated_string(&text)?
            }
            TokenKind::Number(lexical, kind) => {
                self.advance();
                self.sink.literal(&lexical, Datatype::new(kind.datatype()), None)
            }
            TokenKind::Boolean(value) => {
                self.advance();
                let lexical = if value { "true" } else { "false" };
                self.sink.literal(lexical, Datatype::boolean(), None)
            }
            _ => return Ok(None),
        };
        Ok(Some(id))
    }

    /// A string plus its optional `@lang` or `^^datatype`.
    fn annotated_string(&mut self, text: &str) -> Result<TermId> {
        if let TokenKind::LangTag(lang) = self.peek() {
            let lang = Arc::clone(lang);
            self.advance();
            return Ok(self.sink.literal(text, Datatype::lang_string(), Some(&*lang)));
        }
        if self.eat(&TokenKind::Carets) {
            let datatype = match self.iri()? {
                Some(iri) => Datatype::new(iri),
                None => return Err(self.unexpected("datatype IRI")),
            };
            return Ok(self.sink.literal(text, datatype, None));
        }
        Ok(self.sink.literal(text, Datatype::string(), None))
    }

    /// `[ predicate object ; ... ]`
    fn property_list_node(&mut self) -> Result<TermId> {
        self.expect(&TokenKind::LBracket)?;
        let node = self.sink.fresh_blank();
        if self.peek() != &TokenKind::RBracket {
            self.predicate_objects(node)?;
        }
        self.expect(&TokenKind::RBracket)?;
        Ok(node)
    }

    /// `( item ... )` as an `rdf:first`/`rdf:rest` chain ending in `rdf:nil`.
    fn collection(&mut self) -> Result<TermId> {
        self.expect(&TokenKind::LParen)?;
        let mut items = Vec::new();
        while !self.eat(&TokenKind::RParen) {
            if self.current().is_eof() {
                return Err(self.unexpected("')'"));
            }
            items.push(self.object()?);
        }

        let nil = self.sink.iri(rdf::NIL);
        if items.is_empty() {
            return Ok(nil);
        }
        let first = self.sink.iri(rdf::FIRST);
        let rest = self.sink.iri(rdf::REST);
        let cells: Vec<TermId> = items.iter().map(|_| self.sink.fresh_blank()).collect();
        for (i, (&cell, &item)) in cells.iter().zip(&items).enumerate() {
            self.sink.triple(cell, first, item);
            self.sink.triple(cell, rest, cells.get(i + 1).copied().unwrap_or(nil));
        }
        Ok(cells[0])
    }

    fn resolve(&self, reference: &str) -> Result<String> {
        if iri::is_absolute(reference) {
            return Ok(reference.to_string());
        }
        match &self.base {
            Some(base) => Ok(iri::resolve(base, reference)),
            None if reference.is_empty() => Err(TurtleError::IriResolution(
                "empty IRI reference without base".to_string(),
            )),
            None => Err(TurtleError::IriResolution(format!(
                "relative IRI '{reference}' without base"
            ))),
        }
    }
}

fn iri_ref(kind: &TokenKind) -> Option<Arc<str>> {
    match kind {
        TokenKind::Iri(reference) => Some(Arc::clone(reference)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfviz_graph_ir::{Graph, GraphCollectorSink, Term};

    fn collect(input: &str) -> Result<Graph> {
        let mut sink = GraphCollectorSink::new();
        parse(input, &mut sink).map(|()| sink.finish())
    }

    fn subject_of<'g>(graph: &'g Graph, literal: &str) -> &'g Term {
        &graph
            .iter()
            .find(|t| t.o.as_literal().is_some_and(|lit| &*lit.lexical == literal))
            .unwrap()
            .s
    }

    #[test]
    fn test_full_iris_only() {
        let graph = collect("<urn:x:router> <urn:x:uplink> <urn:x:modem> .").unwrap();

        assert_eq!(graph.len(), 1);
        let triple = graph.iter().next().unwrap();
        assert_eq!(triple.s.as_iri(), Some("urn:x:router"));
        assert_eq!(triple.p.as_iri(), Some("urn:x:uplink"));
        assert_eq!(triple.o.as_iri(), Some("urn:x:modem"));
        assert!(graph.prefixes.is_empty());
    }

    #[test]
    fn test_prefixed_names_expand() {
        let input = "@prefix net: <urn:net:> .\n@prefix : <urn:default:> .\nnet:router :links net:modem .";
        let graph = collect(input).unwrap();

        let triple = graph.iter().next().unwrap();
        assert_eq!(triple.p.as_iri(), Some("urn:default:links"));
        assert_eq!(triple.o.as_iri(), Some("urn:net:modem"));
        assert_eq!(graph.prefixes.get("").map(String::as_str), Some("urn:default:"));
    }

    #[test]
    fn test_a_means_rdf_type() {
        let graph = collect("@prefix net: <urn:net:> .\nnet:router a net:Device .").unwrap();
        assert_eq!(graph.iter().next().unwrap().p.as_iri(), Some(rdf::TYPE));
    }

    #[test]
    fn test_semicolon_and_comma_syntax() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:name "Alice" ;
                     ex:knows ex:bob, ex:charlie ;
                     .
        "#;
        let graph = collect(input).unwrap();

        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn test_blank_nodes() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            _:b1 ex:name "Bob" .
            _:b1 ex:age 40 .
            ex:alice ex:knows [ ex:name "Carol" ] .
        "#;
        let graph = collect(input).unwrap();

        assert_eq!(graph.len(), 4);
        let subjects: Vec<_> = graph.iter().map(|t| &t.s).collect();
        assert_eq!(subjects[0], subjects[1]);
        assert!(subject_of(&graph, "Carol").is_blank());
    }

    #[test]
    fn test_bare_blank_node_property_list() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            [ ex:name "Dave" ] .
        "#;
        let graph = collect(input).unwrap();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_literals() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
            ex:alice ex:birthdate "2000-01-01"^^xsd:date ;
                     ex:name "Alice"@en ;
                     ex:age 30 ;
                     ex:height 1.50 ;
                     ex:mass 7.2E1 ;
                     ex:active true .
        "#;
        let graph = collect(input).unwrap();
        let objects: Vec<_> = graph.iter().map(|t| t.o.as_literal().unwrap()).collect();

        assert_eq!(objects[0].datatype.iri(), "http://www.w3.org/2001/XMLSchema#date");

        assert_eq!(objects[1].datatype.iri(), rdf::LANG_STRING);
        assert_eq!(objects[1].language.as_deref(), Some("en"));

        assert_eq!(graph.iter().nth(2).unwrap().o, Term::integer(30));

        // Numbers keep the form they were written in
        assert_eq!(&*objects[3].lexical, "1.50");
        assert_eq!(objects[3].datatype.iri(), rdfviz_vocab::xsd::DECIMAL);
        assert_eq!(&*objects[4].lexical, "7.2E1");
        assert_eq!(objects[4].datatype.iri(), rdfviz_vocab::xsd::DOUBLE);

        assert_eq!(&*objects[5].lexical, "true");
        assert_eq!(objects[5].datatype.iri(), rdfviz_vocab::xsd::BOOLEAN);
    }

    #[test]
    fn test_anonymous_blanks_are_distinct_from_labels() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            _:genid0 ex:p ex:x .
            _:0 ex:p ex:x .
            ex:a ex:q [ ex:r ex:y ] , [] .
        "#;
        let graph = collect(input).unwrap();

        let mut blanks: Vec<_> = graph
            .iter()
            .flat_map(|t| [&t.s, &t.o])
            .filter(|term| term.is_blank())
            .collect();
        blanks.sort();
        blanks.dedup();
        assert_eq!(blanks.len(), 4);
    }

    #[test]
    fn test_list_becomes_first_rest_chain() {
        let graph = collect("@prefix net: <urn:net:> .\nnet:path net:hops ( net:a net:b ) .").unwrap();

        // one rdf:first and one rdf:rest per item, plus net:hops
        assert_eq!(graph.len(), 5);
        let last = graph.iter().filter(|t| t.p.as_iri() == Some(rdf::REST)).last().unwrap();
        assert_eq!(last.o.as_iri(), Some(rdf::NIL));
    }

    #[test]
    fn test_empty_list_is_nil() {
        let graph = collect("@prefix net: <urn:net:> .\nnet:path net:hops () .").unwrap();

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.iter().next().unwrap().o.as_iri(), Some(rdf::NIL));
    }

    #[test]
    fn test_sparql_style_directives() {
        let graph = collect("BASE <urn:b/>\nPREFIX net: <urn:net:>\n<x> net:p net:q .").unwrap();
        assert_eq!(graph.iter().next().unwrap().s.as_iri(), Some("urn:b/x"));
    }

    #[test]
    fn test_relative_references_use_base() {
        let input = r#"
            @base <http://example.org/site/docs/> .
            <intro> <label> "sibling" .
            <../img> <label> "parent" .
            </root> <label> "absolute path" .
            <#top> <label> "fragment" .
            <> <label> "self" .
        "#;
        let graph = collect(input).unwrap();

        let iri = |lit| subject_of(&graph, lit).as_iri();
        assert_eq!(iri("sibling"), Some("http://example.org/site/docs/intro"));
        assert_eq!(iri("parent"), Some("http://example.org/site/img"));
        assert_eq!(iri("absolute path"), Some("http://example.org/root"));
        assert_eq!(iri("fragment"), Some("http://example.org/site/docs/#top"));
        assert_eq!(iri("self"), Some("http://example.org/site/docs/"));
    }

    #[test]
    fn test_relative_iri_without_base() {
        let err = collect(r#"<alice> <http://ex.org/p> "x" ."#).unwrap_err();
        assert!(matches!(err, TurtleError::IriResolution(_)));
    }

    #[test]
    fn test_undefined_prefix() {
        let err = collect(r#"ex:a ex:b ex:c ."#).unwrap_err();
        assert!(matches!(err, TurtleError::UndefinedPrefix(ref p) if p == "ex"));
    }

    #[test]
    fn test_missing_dot_reports_position() {
        let input = "@prefix ex: <http://example.org/> .\nex:a ex:b ex:c";
        let err = collect(input).unwrap_err();
        assert_eq!(err.location(), Some((2, 15)));
        assert!(err.to_string().contains("expected '.', found end of input"));
    }

    #[test]
    fn test_literal_subject_rejected() {
        let err = collect(r#""x" <http://ex.org/p> "y" ."#).unwrap_err();
        assert!(err.to_string().contains("expected subject"));
    }
}
