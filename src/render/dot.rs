//! Graphviz DOT description of a graph
//!
//! Output is deterministic: nodes follow insertion order, edges follow
//! adjacency order, and each undirected edge is written once.

use crate::coloring::Palette;
use crate::graph::Graph;

/// Settings for [`to_dot`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotOptions {
    /// Graph name written in the header
    pub name: String,
    /// Node attribute shown as the label; the node identity is used if absent
    pub label_key: String,
    /// Edge attribute shown as the edge label
    pub weight_key: String,
    /// When set, colored nodes are filled with their palette color; otherwise
    /// the raw index is written as `colorindex`
    pub palette: Option<Palette>,
}

impl DotOptions {
    pub fn new(label_key: impl Into<String>, weight_key: impl Into<String>) -> Self {
        DotOptions {
            label_key: label_key.into(),
            weight_key: weight_key.into(),
            ..Self::default()
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            name: "G".to_string(),
            label_key: "label".to_string(),
            weight_key: "weight".to_string(),
            palette: None,
        }
    }
}

/// DOT text with the given label and weight keys and no palette
pub fn to_text(graph: &Graph, label_key: &str, weight_key: &str) -> String {
    to_dot(graph, &DotOptions::new(label_key, weight_key))
}

pub fn to_dot(graph: &Graph, options: &DotOptions) -> String {
    let (keyword, connector) = if graph.is_directed() {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    let mut lines = vec![format!("{} {} {{", keyword, options.name)];

    for node in graph.nodes() {
        let label = node
            .get_property(&options.label_key)
            .map(|value| value.to_plain_string())
            .unwrap_or_else(|| node.id().to_string());

        let mut attrs = format!("label=\"{}\"", escape(&label));
        match (node.color(), &options.palette) {
            (Some(color), Some(palette)) => {
                attrs.push_str(&format!(
                    ", style=filled, fillcolor=\"{}\"",
                    escape(palette.resolve(color))
                ));
            }
            (Some(color), None) => attrs.push_str(&format!(", colorindex={}", color)),
            (None, _) => {}
        }

        lines.push(format!("    \"{}\" [{}];", escape(node.id().as_str()), attrs));
    }

    for edge in graph.edges() {
        let label = edge
            .get_property(&options.weight_key)
            .map(|value| value.to_plain_string())
            .unwrap_or_default();
        lines.push(format!(
            "    \"{}\" {} \"{}\" [label=\"{}\"];",
            escape(edge.source.as_str()),
            connector,
            escape(edge.target.as_str()),
            escape(&label)
        ));
    }

    lines.push("}".to_string());
    lines.join("\n")
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
