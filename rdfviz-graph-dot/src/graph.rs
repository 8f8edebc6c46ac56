//! RDF graph to DOT graph description.

use std::collections::HashMap;
use std::fmt::Write;

use rdfviz_graph_ir::{Graph, Term};
use rdfviz_vocab::labels::LABEL_PROPERTIES;

use crate::compact::Compactor;
use crate::escape::{escape_dot_string, escape_html, truncate};
use crate::options::{DotOptions, LiteralMode};

/// What a node stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Iri,
    Blank,
    Literal,
}

/// One node of the description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotNode {
    /// `nodeN`
    pub id: String,
    pub kind: NodeKind,
    /// Compact name, label value, or literal caption.
    pub caption: String,
    /// Compact name shown under a label caption.
    pub subtitle: Option<String>,
    /// `(predicate, value)` rows in [`LiteralMode::Fields`].
    pub fields: Vec<(String, String)>,
}

/// One labeled edge of the description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotEdge {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// A graph description ready to be written as DOT.
///
/// Node ids and ordering are a pure function of the triple set and the
/// options, so converting the same graph twice yields identical text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DotGraph {
    nodes: Vec<DotNode>,
    edges: Vec<DotEdge>,
}

impl DotGraph {
    /// Convert `graph` into nodes and edges.
    ///
    /// The triples are canonicalized (sorted, deduplicated) on a copy first;
    /// nodes are numbered in order of first appearance in that sequence.
    pub fn from_graph(graph: &Graph, options: &DotOptions) -> Self {
        let mut canonical = graph.clone();
        canonical.canonicalize();

        let compactor = Compactor::for_graph(&canonical);
        let labels = if options.use_labels {
            find_labels(&canonical)
        } else {
            HashMap::new()
        };

        let mut builder = Builder {
            compactor: &compactor,
            options,
            labels: &labels,
            index: HashMap::new(),
            out: DotGraph::default(),
        };

        for triple in canonical.iter() {
            let from = builder.node_for(&triple.s);
            let predicate = compactor.resource_caption(&triple.p);

            if triple.o.is_literal() && options.literals == LiteralMode::Fields {
                let value = compactor.literal_caption(&triple.o, options.max_literal_len);
                builder.out.nodes[from].fields.push((predicate, value));
                continue;
            }

            let to = builder.node_for(&triple.o);
            let edge = DotEdge {
                from: builder.out.nodes[from].id.clone(),
                to: builder.out.nodes[to].id.clone(),
                label: predicate,
            };
            builder.out.edges.push(edge);
        }

        let out = builder.out;
        tracing::debug!(
            triples = canonical.len(),
            nodes = out.nodes.len(),
            edges = out.edges.len(),
            mode = %options.literals,
            "converted graph to description"
        );
        out
    }

    pub fn nodes(&self) -> &[DotNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DotEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Write the description as DOT text.
    pub fn to_dot(&self) -> String {
        let mut output = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(output, "digraph {{");
        let _ = writeln!(output, "  node [ fontname=\"DejaVu Sans\" ] ;");

        for node in &self.nodes {
            let _ = writeln!(output, "  {} [ {} ] ;", node.id, node_attributes(node));
        }

        for edge in &self.edges {
            let _ = writeln!(
                output,
                "  {} -> {} [ color=BLACK, label=\"{}\" ] ;",
                edge.from,
                edge.to,
                escape_dot_string(&edge.label)
            );
        }

        let _ = writeln!(output, "}}");
        output
    }
}

struct Builder<'a> {
    compactor: &'a Compactor,
    options: &'a DotOptions,
    labels: &'a HashMap<Term, String>,
    index: HashMap<Term, usize>,
    out: DotGraph,
}

impl Builder<'_> {
    /// Index of the node for `term`, created on first sight.
    fn node_for(&mut self, term: &Term) -> usize {
        if let Some(&i) = self.index.get(term) {
            return i;
        }

        let (kind, caption, subtitle) = match term {
            Term::Literal(_) => (
                NodeKind::Literal,
                self.compactor
                    .literal_caption(term, self.options.max_literal_len),
                None,
            ),
            _ => {
                let kind = if term.is_blank() {
                    NodeKind::Blank
                } else {
                    NodeKind::Iri
                };
                let name = self.compactor.resource_caption(term);
                match self.labels.get(term) {
                    Some(label) => (
                        kind,
                        truncate(label, self.options.max_literal_len),
                        Some(name),
                    ),
                    None => (kind, name, None),
                }
            }
        };

        let i = self.out.nodes.len();
        self.out.nodes.push(DotNode {
            id: format!("node{}", i),
            kind,
            caption,
            subtitle,
            fields: Vec::new(),
        });
        self.index.insert(term.clone(), i);
        i
    }
}

/// Label value per resource: the highest-priority label property wins,
/// ties go to the first value in sorted order.
fn find_labels(graph: &Graph) -> HashMap<Term, String> {
    let mut best: HashMap<Term, (usize, String)> = HashMap::new();

    for triple in graph.iter() {
        let Some(iri) = triple.p.as_iri() else {
            continue;
        };
        let Some(rank) = LABEL_PROPERTIES.iter().position(|p| *p == iri) else {
            continue;
        };
        let Some(literal) = triple.o.as_literal() else {
            continue;
        };

        let better = best.get(&triple.s).map_or(true, |(r, _)| rank < *r);
        if better {
            best.insert(triple.s.clone(), (rank, literal.lexical.to_string()));
        }
    }

    best.into_iter()
        .map(|(term, (_, label))| (term, label))
        .collect()
}

fn node_attributes(node: &DotNode) -> String {
    if !node.fields.is_empty() {
        return format!("shape=none, label=<{}>", html_table(node));
    }

    let mut label = escape_dot_string(&node.caption);
    if let Some(subtitle) = &node.subtitle {
        label.push_str("\\n");
        label.push_str(&escape_dot_string(subtitle));
    }

    match node.kind {
        NodeKind::Iri => format!("label=\"{}\"", label),
        NodeKind::Blank => format!("style=dashed, label=\"{}\"", label),
        NodeKind::Literal => format!("shape=box, color=\"#336633\", label=\"{}\"", label),
    }
}

/// Subject caption on top, one `predicate | value` row per literal.
fn html_table(node: &DotNode) -> String {
    let mut html = String::from(
        "<table color=\"#666666\" cellborder=\"0\" cellspacing=\"0\" border=\"1\">",
    );
    let _ = write!(
        html,
        "<tr><td colspan=\"2\" bgcolor=\"grey\"><B>{}</B></td></tr>",
        escape_html(&node.caption)
    );
    if let Some(subtitle) = &node.subtitle {
        let _ = write!(
            html,
            "<tr><td colspan=\"2\">{}</td></tr>",
            escape_html(subtitle)
        );
    }
    for (predicate, value) in &node.fields {
        let _ = write!(
            html,
            "<tr><td align=\"left\">{}</td><td align=\"left\">{}</td></tr>",
            escape_html(predicate),
            escape_html(value)
        );
    }
    html.push_str("</table>");
    html
}
