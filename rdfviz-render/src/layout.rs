//! Layout graph: a DOT description plus the layout settings we control.

use crate::error::{RenderError, Result};
use crate::format::Orientation;

/// A validated graph description ready for a renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutGraph {
    /// Everything up to and including the opening `{`.
    header: String,
    /// Statements between the outer braces.
    body: String,
    orientation: Option<Orientation>,
}

impl LayoutGraph {
    /// Accept `[strict] (graph|digraph) [id] { ... }`.
    pub fn from_description(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let open = trimmed
            .find('{')
            .ok_or_else(|| invalid("missing '{'"))?;

        let header = &trimmed[..open];
        let mut words = header.split_whitespace();
        let mut keyword = words.next().ok_or_else(|| invalid("empty description"))?;
        if keyword.eq_ignore_ascii_case("strict") {
            keyword = words.next().ok_or_else(|| invalid("missing graph keyword"))?;
        }
        if !keyword.eq_ignore_ascii_case("digraph") && !keyword.eq_ignore_ascii_case("graph") {
            return Err(invalid(&format!(
                "expected 'graph' or 'digraph', found '{}'",
                keyword
            )));
        }
        if words.count() > 1 {
            return Err(invalid("unexpected tokens before '{'"));
        }

        let close = matching_brace(trimmed, open)?;
        if !trimmed[close + 1..].trim().is_empty() {
            return Err(invalid("trailing text after closing '}'"));
        }

        Ok(Self {
            header: trimmed[..=open].to_string(),
            body: trimmed[open + 1..close].to_string(),
            orientation: None,
        })
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = Some(orientation);
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// The description with our layout settings as its first statements.
    pub fn to_dot(&self) -> String {
        let mut out = String::with_capacity(self.header.len() + self.body.len() + 32);
        out.push_str(&self.header);
        out.push('\n');
        if let Some(orientation) = self.orientation {
            out.push_str("  rankdir=");
            out.push_str(orientation.as_rankdir());
            out.push_str(";\n");
        }
        let body = self.body.trim_matches('\n');
        if !body.is_empty() {
            out.push_str(body);
            out.push('\n');
        }
        out.push_str("}\n");
        out
    }
}

fn invalid(msg: &str) -> RenderError {
    RenderError::InvalidDescription(msg.to_string())
}

/// Byte index of the `}` closing the `{` at `open`, skipping quoted and
/// HTML (`<...>`) strings.
fn matching_brace(text: &str, open: usize) -> Result<usize> {
    let mut depth = 0usize;
    let mut html_depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[open..].char_indices() {
        if html_depth > 0 {
            match c {
                '<' => html_depth += 1,
                '>' => html_depth -= 1,
                _ => {}
            }
            continue;
        }
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '<' => html_depth = 1,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(open + i);
                }
            }
            _ => {}
        }
    }

    Err(invalid("unbalanced braces"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "digraph {\n  node0 -> node1 [ label=\"ex:rel\" ] ;\n}\n";

    #[test]
    fn test_accepts_graph_forms() {
        assert!(LayoutGraph::from_description(SIMPLE).is_ok());
        let undirected = LayoutGraph::from_description("graph G { a -- b }").unwrap();
        assert!(undirected.to_dot().starts_with("graph G {"));
        assert!(LayoutGraph::from_description("strict digraph \"x\" { a }").is_ok());
    }

    #[test]
    fn test_rejects_non_graphs() {
        for text in ["", "hello", "tree { }", "digraph { a -> b", "digraph { } extra", "digraph a b { }"] {
            let err = LayoutGraph::from_description(text).unwrap_err();
            assert!(matches!(err, RenderError::InvalidDescription(_)), "{text}");
        }
    }

    #[test]
    fn test_braces_in_strings_are_ignored() {
        let layout = LayoutGraph::from_description("digraph { a [ label=\"{\\\"}\" ] }").unwrap();
        assert!(layout.to_dot().contains("label=\"{\\\"}\""));
    }

    #[test]
    fn test_braces_in_html_labels_are_ignored() {
        let text = "digraph { n [ shape=none, label=<<table><tr><td>}</td></tr></table>> ] ; a -> n }";
        let layout = LayoutGraph::from_description(text).unwrap();
        assert!(layout.to_dot().contains("a -> n"));
    }

    #[test]
    fn test_orientation_is_first_statement() {
        let mut layout = LayoutGraph::from_description(SIMPLE).unwrap();
        assert_eq!(layout.to_dot(), SIMPLE);

        layout.set_orientation(Orientation::LeftToRight);
        assert_eq!(
            layout.to_dot(),
            "digraph {\n  rankdir=LR;\n  node0 -> node1 [ label=\"ex:rel\" ] ;\n}\n"
        );

        layout.set_orientation(Orientation::TopToBottom);
        assert!(layout.to_dot().contains("rankdir=TB;"));
        assert!(!layout.to_dot().contains("rankdir=LR;"));
    }
}
