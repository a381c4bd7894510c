//! Attributed graph model
//!
//! This module implements the graph data model with:
//! - Nodes identified by opaque keys, each with an attribute store
//! - Directed or undirected edges with attribute stores
//! - Undirected edges stored as two adjacency entries sharing one store
//! - Insertion-ordered node storage

pub mod edge;
pub mod node;
pub mod property;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use node::Node;
pub use property::{PropertyMap, PropertyValue, SharedProperties};
pub use store::{Graph, GraphError, GraphResult};
pub use types::{Color, GraphType, NodeId, COLOR_KEY};
