//! Chromagraph
//!
//! Attributed directed/undirected graphs with a greedy node-coloring engine
//! and Graphviz export.
//!
//! # Overview
//!
//! - [`graph`]: nodes, edges and their attribute stores
//! - [`coloring`]: largest-degree-first greedy coloring with a pluggable
//!   neighbor policy, conflict verification and a rendering palette
//! - [`render`]: DOT text output and the external `dot` renderer
//! - [`ingest`]: building graphs from JSON adjacency lists
//!
//! ## Example Usage
//!
//! ```rust
//! use chromagraph::coloring::{colorize, has_conflicts, Bidirectional};
//! use chromagraph::graph::{Graph, NodeId};
//!
//! let mut graph = Graph::directed();
//! graph.add_edge("A", "B").unwrap();
//! graph.add_edge("A", "C").unwrap();
//! graph.add_edge("B", "C").unwrap();
//! graph.add_edge("C", "D").unwrap();
//!
//! let outcome = colorize(&mut graph, &Bidirectional).unwrap();
//! assert_eq!(outcome.iterations(), 4);
//! assert_eq!(graph.node(&NodeId::new("C")).unwrap().color(), Some(2));
//! assert!(!has_conflicts(&graph, &Bidirectional).unwrap());
//! ```

#![warn(clippy::all)]

pub mod coloring;
pub mod graph;
pub mod ingest;
pub mod render;

// Re-export main types for convenience
pub use graph::{
    Edge, Graph, GraphError, GraphResult, GraphType, Node, NodeId, PropertyMap, PropertyValue,
};

pub use coloring::{
    colorize, has_conflicts, Bidirectional, Color, ColoringOutcome, NeighborPolicy, Outgoing,
    Palette, COLOR_KEY,
};

pub use render::{to_dot, to_text, DotOptions, GraphvizRenderer, RenderError};

pub use ingest::{build_graph, load_adjacency, prune_dangling, AdjacencyList, IngestError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
