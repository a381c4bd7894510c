//! In-memory graph container
//!
//! Nodes are kept in insertion order; that order is observable through
//! iteration and is what the coloring engine uses to break ties.
//! Topology is append-only: there is no node or edge removal.

use super::edge::Edge;
use super::node::Node;
use super::property::{share, PropertyMap};
use super::types::{GraphType, NodeId};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("No edge from {from} to {to}")]
    EdgeNotFound { from: NodeId, to: NodeId },

    #[error("Node {0} already exists")]
    NodeAlreadyExists(NodeId),

    #[error("Edge {from}->{to} already exists")]
    EdgeAlreadyExists { from: NodeId, to: NodeId },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Attributed graph, directed or undirected
///
/// - nodes: NodeId -> Node, in insertion order
/// - each Node holds its own outgoing adjacency entries
/// - undirected edges are stored as two entries sharing one attribute store
#[derive(Debug)]
pub struct Graph {
    /// Orientation, fixed at construction
    graph_type: GraphType,

    /// Node storage
    nodes: IndexMap<NodeId, Node>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new(graph_type: GraphType) -> Self {
        Graph {
            graph_type,
            nodes: IndexMap::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphType::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphType::Undirected)
    }

    pub fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    pub fn is_directed(&self) -> bool {
        self.graph_type.is_directed()
    }

    /// Add a node without attributes
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> GraphResult<&mut Node> {
        self.add_node_with_properties(id, PropertyMap::new())
    }

    /// Add a node with attributes; fails if the identity is taken
    pub fn add_node_with_properties(
        &mut self,
        id: impl Into<NodeId>,
        properties: PropertyMap,
    ) -> GraphResult<&mut Node> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::NodeAlreadyExists(id));
        }
        Ok(self.insert_node(id, properties))
    }

    /// Add an edge without attributes
    pub fn add_edge(
        &mut self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> GraphResult<(&Node, &Node)> {
        self.add_edge_with_properties(source, target, PropertyMap::new())
    }

    /// Add an edge with attributes
    ///
    /// Missing endpoints are created with empty attribute stores. Undirected
    /// graphs also get the mirrored entry, pointing at the same store. Both
    /// directions are checked for duplicates before anything is mutated, so a
    /// failed call leaves the graph untouched.
    pub fn add_edge_with_properties(
        &mut self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        properties: PropertyMap,
    ) -> GraphResult<(&Node, &Node)> {
        let source = source.into();
        let target = target.into();
        let mirrored = !self.is_directed() && source != target;

        self.ensure_edge_free(&source, &target)?;
        if mirrored {
            self.ensure_edge_free(&target, &source)?;
        }

        if !self.nodes.contains_key(&source) {
            self.insert_node(source.clone(), PropertyMap::new());
        }
        if !self.nodes.contains_key(&target) {
            self.insert_node(target.clone(), PropertyMap::new());
        }

        let shared = share(properties);
        self.node_mut(&source)?
            .insert_adjacency(target.clone(), Rc::clone(&shared));
        if mirrored {
            self.node_mut(&target)?
                .insert_adjacency(source.clone(), shared);
        }

        Ok((self.node(&source)?, self.node(&target)?))
    }

    /// Get a node by identity
    pub fn node(&self, id: &NodeId) -> GraphResult<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))
    }

    /// Get a mutable node by identity
    pub fn node_mut(&mut self, id: &NodeId) -> GraphResult<&mut Node> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))
    }

    /// Check if a node exists
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> + '_ {
        self.nodes.values_mut()
    }

    /// Node identities in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.nodes.keys()
    }

    /// Nodes reachable through `id`'s adjacency entries
    pub fn neighbor_nodes(&self, id: &NodeId) -> GraphResult<impl Iterator<Item = &Node> + '_> {
        let node = self.node(id)?;
        Ok(node
            .neighbor_ids()
            .filter_map(move |neighbor| self.nodes.get(neighbor)))
    }

    /// View of the edge from `source` to `target`
    pub fn edge(&self, source: &NodeId, target: &NodeId) -> GraphResult<Edge> {
        self.node(source)?.edge_to(target)
    }

    /// Logical edges: every adjacency entry for directed graphs, one entry per
    /// unordered endpoint pair for undirected graphs.
    pub fn edges(&self) -> Vec<Edge> {
        let mut seen: FxHashSet<(&NodeId, &NodeId)> = FxHashSet::default();
        let mut edges = Vec::new();

        for node in self.nodes.values() {
            for neighbor in node.neighbor_ids() {
                if !self.is_directed() {
                    let pair = if node.id() <= neighbor {
                        (node.id(), neighbor)
                    } else {
                        (neighbor, node.id())
                    };
                    if !seen.insert(pair) {
                        continue;
                    }
                }
                if let Ok(edge) = node.edge_to(neighbor) {
                    edges.push(edge);
                }
            }
        }

        edges
    }

    /// Number of logical edges.
    ///
    /// Undirected edges are stored twice (self-loops once), so the raw
    /// adjacency sum is halved after counting loops a second time.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.nodes.values().map(Node::out_degree).sum();
        if self.is_directed() {
            entries
        } else {
            let loops = self.nodes.values().filter(|n| n.has_self_loop()).count();
            (entries + loops) / 2
        }
    }

    fn insert_node(&mut self, id: NodeId, properties: PropertyMap) -> &mut Node {
        let entry = self.nodes.entry(id.clone());
        entry.or_insert_with(|| Node::new_with_properties(id, properties))
    }

    fn ensure_edge_free(&self, source: &NodeId, target: &NodeId) -> GraphResult<()> {
        match self.nodes.get(source) {
            Some(node) if node.has_edge_to(target) => Err(GraphError::EdgeAlreadyExists {
                from: source.clone(),
                to: target.clone(),
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph({}, nodes: {}, edges: {})",
            self.graph_type,
            self.size(),
            self.edge_count()
        )
    }
}
