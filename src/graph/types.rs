//! Core type definitions for the graph model

use serde::Serialize;
use std::fmt;

/// Identity of a node, unique within one graph
///
/// The key is opaque to the graph: it is only hashed, compared and displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<&String> for NodeId {
    fn from(s: &String) -> Self {
        NodeId(s.clone())
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id.to_string())
    }
}

/// Palette index assigned to a node
pub type Color = usize;

/// Node attribute key the assigned color is stored under
pub const COLOR_KEY: &str = "color";

/// Orientation of a graph, fixed when the graph is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphType {
    Directed,
    Undirected,
}

impl GraphType {
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphType::Directed)
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphType::Directed => write!(f, "Directed"),
            GraphType::Undirected => write!(f, "Undirected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new("Germany");
        assert_eq!(id.as_str(), "Germany");
        assert_eq!(format!("{}", id), "Germany");

        let id2: NodeId = "France".into();
        assert_eq!(id2.as_str(), "France");

        let id3: NodeId = 42u64.into();
        assert_eq!(id3.as_str(), "42");
    }

    #[test]
    fn test_id_ordering() {
        let a = NodeId::new("A");
        let b = NodeId::new("B");
        assert!(a < b);
    }

    #[test]
    fn test_graph_type() {
        assert!(GraphType::Directed.is_directed());
        assert!(!GraphType::Undirected.is_directed());
        assert_eq!(GraphType::Undirected.to_string(), "Undirected");
    }
}
