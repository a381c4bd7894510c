//! Node implementation for the attributed graph
//!
//! A node owns its attribute store and its adjacency entries. Each adjacency
//! entry maps a neighbor identity to the attribute store of the edge leading
//! there.

use super::edge::Edge;
use super::property::{PropertyMap, PropertyValue, SharedProperties};
use super::store::{GraphError, GraphResult};
use super::types::{Color, NodeId, COLOR_KEY};
use indexmap::IndexMap;
use std::rc::Rc;

/// A node in the graph
///
/// Nodes have:
/// - A unique identity
/// - Attributes (key-value pairs), including the reserved `"color"` key
/// - Outgoing adjacency entries in insertion order
#[derive(Debug)]
pub struct Node {
    /// Unique identifier for this node
    id: NodeId,

    /// Attributes associated with this node
    properties: PropertyMap,

    /// Neighbor identity -> edge attribute store
    adjacency: IndexMap<NodeId, SharedProperties>,
}

impl Node {
    /// Create a new node without attributes
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self::new_with_properties(id, PropertyMap::new())
    }

    /// Create a new node with attributes
    pub fn new_with_properties(id: impl Into<NodeId>, properties: PropertyMap) -> Self {
        Node {
            id: id.into(),
            properties,
            adjacency: IndexMap::new(),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Set an attribute value, returning the previous one
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.properties.insert(key.into(), value.into())
    }

    /// Get an attribute value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Remove an attribute
    pub fn remove_property(&mut self, key: &str) -> Option<PropertyValue> {
        self.properties.shift_remove(key)
    }

    /// Check if attribute exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Assigned color, if any.
    ///
    /// Only non-negative integers count as colors; anything else stored under
    /// the color key reads as unassigned.
    pub fn color(&self) -> Option<Color> {
        self.get_property(COLOR_KEY)
            .and_then(PropertyValue::as_integer)
            .and_then(|c| Color::try_from(c).ok())
    }

    pub fn set_color(&mut self, color: Color) {
        self.set_property(COLOR_KEY, color as i64);
    }

    pub fn clear_color(&mut self) -> Option<PropertyValue> {
        self.remove_property(COLOR_KEY)
    }

    /// Check if this node has an adjacency entry for `target`
    pub fn has_edge_to(&self, target: &NodeId) -> bool {
        self.adjacency.contains_key(target)
    }

    /// View of the edge from this node to `target`
    pub fn edge_to(&self, target: &NodeId) -> GraphResult<Edge> {
        let properties = self
            .adjacency
            .get(target)
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: self.id.clone(),
                to: target.clone(),
            })?;
        Ok(Edge::new(
            self.id.clone(),
            target.clone(),
            Rc::clone(properties),
        ))
    }

    /// Neighbor identities in adjacency insertion order
    pub fn neighbor_ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.adjacency.keys()
    }

    /// Number of adjacency entries.
    ///
    /// For undirected graphs each edge is mirrored, so it counts once at each
    /// endpoint.
    pub fn out_degree(&self) -> usize {
        self.adjacency.len()
    }

    pub fn has_self_loop(&self) -> bool {
        self.adjacency.contains_key(&self.id)
    }

    pub(crate) fn insert_adjacency(&mut self, target: NodeId, properties: SharedProperties) {
        self.adjacency.insert(target, properties);
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::property::share;

    #[test]
    fn test_node_properties() {
        let mut node = Node::new("A");

        node.set_property("label", "Start");
        node.set_property("rank", 3i64);
        node.set_property("active", true);

        assert_eq!(node.get_property("label").unwrap().as_string(), Some("Start"));
        assert_eq!(node.get_property("rank").unwrap().as_integer(), Some(3));
        assert_eq!(node.get_property("active").unwrap().as_boolean(), Some(true));

        let removed = node.remove_property("rank");
        assert!(removed.is_some());
        assert!(!node.has_property("rank"));
        assert_eq!(node.properties().len(), 2);
    }

    #[test]
    fn test_color_starts_unset() {
        let mut node = Node::new("A");
        assert_eq!(node.color(), None);

        node.set_color(2);
        assert_eq!(node.color(), Some(2));
        assert_eq!(node.get_property(COLOR_KEY), Some(&PropertyValue::Integer(2)));

        node.clear_color();
        assert_eq!(node.color(), None);
    }

    #[test]
    fn test_non_integer_color_reads_as_unassigned() {
        let mut node = Node::new("A");
        node.set_property(COLOR_KEY, "green");
        assert_eq!(node.color(), None);

        node.set_property(COLOR_KEY, -1i64);
        assert_eq!(node.color(), None);
    }

    #[test]
    fn test_adjacency() {
        let mut node = Node::new("A");
        node.insert_adjacency(NodeId::new("C"), share(PropertyMap::new()));
        node.insert_adjacency(NodeId::new("B"), share(PropertyMap::new()));

        assert_eq!(node.out_degree(), 2);
        assert!(node.has_edge_to(&NodeId::new("B")));
        assert!(!node.has_edge_to(&NodeId::new("D")));

        let ids: Vec<&str> = node.neighbor_ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["C", "B"]);
        // restartable
        assert_eq!(node.neighbor_ids().count(), 2);
    }

    #[test]
    fn test_edge_to_missing() {
        let node = Node::new("A");
        let err = node.edge_to(&NodeId::new("B")).unwrap_err();
        assert_eq!(
            err,
            GraphError::EdgeNotFound {
                from: NodeId::new("A"),
                to: NodeId::new("B"),
            }
        );
    }

    #[test]
    fn test_node_equality() {
        let mut node1 = Node::new("A");
        node1.set_property("label", "x");
        let node2 = Node::new("A");
        let node3 = Node::new("B");

        assert_eq!(node1, node2);
        assert_ne!(node1, node3);
    }
}
