//! Conversion options.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How literal objects show up in the diagram.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralMode {
    /// Each distinct literal is its own box node; every triple is an edge.
    #[default]
    Nodes,
    /// Literals become `predicate | value` rows of the subject's table.
    Fields,
}

impl LiteralMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LiteralMode::Nodes => "nodes",
            LiteralMode::Fields => "fields",
        }
    }
}

impl fmt::Display for LiteralMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LiteralMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nodes" => Ok(LiteralMode::Nodes),
            "fields" => Ok(LiteralMode::Fields),
            other => Err(format!(
                "invalid literal mode '{}' (expected 'nodes' or 'fields')",
                other
            )),
        }
    }
}

/// Options for [`DotGraph::from_graph`](crate::DotGraph::from_graph).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotOptions {
    pub literals: LiteralMode,
    /// Caption resources with their `rdfs:label` (or similar) when present.
    pub use_labels: bool,
    /// Longest literal value shown before truncation; `0` disables.
    pub max_literal_len: usize,
}

impl DotOptions {
    pub const DEFAULT_MAX_LITERAL_LEN: usize = 64;
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            literals: LiteralMode::Nodes,
            use_labels: true,
            max_literal_len: Self::DEFAULT_MAX_LITERAL_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_mode_parse() {
        assert_eq!("nodes".parse::<LiteralMode>(), Ok(LiteralMode::Nodes));
        assert_eq!("Fields".parse::<LiteralMode>(), Ok(LiteralMode::Fields));
        assert!("table".parse::<LiteralMode>().is_err());
    }

    #[test]
    fn test_defaults() {
        let opts = DotOptions::default();
        assert_eq!(opts.literals, LiteralMode::Nodes);
        assert!(opts.use_labels);
        assert_eq!(opts.max_literal_len, 64);
    }
}
