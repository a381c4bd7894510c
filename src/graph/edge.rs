//! Edge view for the attributed graph
//!
//! Edges are not stored as objects of their own. An `Edge` is built on demand
//! from an adjacency entry and holds a handle to the entry's attribute store.
//! For undirected graphs both adjacency entries of an edge share one store, so
//! writes through either endpoint's view are visible through the other.

use super::property::{PropertyValue, SharedProperties};
use super::types::NodeId;
use std::rc::Rc;

/// A view of one adjacency entry
#[derive(Debug, Clone)]
pub struct Edge {
    /// Node the entry is recorded under
    pub source: NodeId,

    /// Node the entry points to
    pub target: NodeId,

    properties: SharedProperties,
}

impl Edge {
    pub(crate) fn new(source: NodeId, target: NodeId, properties: SharedProperties) -> Self {
        Edge {
            source,
            target,
            properties,
        }
    }

    /// Set an attribute value in the shared store
    pub fn set_property(
        &self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.properties.borrow_mut().insert(key.into(), value.into())
    }

    /// Get a copy of an attribute value
    pub fn get_property(&self, key: &str) -> Option<PropertyValue> {
        self.properties.borrow().get(key).cloned()
    }

    /// Remove an attribute from the shared store
    pub fn remove_property(&self, key: &str) -> Option<PropertyValue> {
        self.properties.borrow_mut().shift_remove(key)
    }

    /// Check if attribute exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.borrow().contains_key(key)
    }

    /// Get number of attributes
    pub fn property_count(&self) -> usize {
        self.properties.borrow().len()
    }

    /// Whether both views read and write the same attribute store
    pub fn shares_store_with(&self, other: &Edge) -> bool {
        Rc::ptr_eq(&self.properties, &other.properties)
    }

    /// Check if this edge connects two specific nodes (in either direction)
    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (self.source == *a && self.target == *b) || (self.source == *b && self.target == *a)
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::property::{share, PropertyMap};

    #[test]
    fn test_edge_properties() {
        let edge = Edge::new("A".into(), "B".into(), share(PropertyMap::new()));

        edge.set_property("weight", 1.5);
        edge.set_property("type", "critical");

        assert_eq!(edge.get_property("weight").unwrap().as_float(), Some(1.5));
        assert_eq!(
            edge.get_property("type").unwrap().as_string(),
            Some("critical")
        );
        assert_eq!(edge.property_count(), 2);

        edge.remove_property("type");
        assert!(!edge.has_property("type"));
    }

    #[test]
    fn test_views_over_one_store() {
        let store = share(PropertyMap::new());
        let forward = Edge::new("A".into(), "B".into(), Rc::clone(&store));
        let backward = Edge::new("B".into(), "A".into(), Rc::clone(&store));

        forward.set_property("weight", 7i64);
        assert_eq!(backward.get_property("weight"), Some(PropertyValue::Integer(7)));
        assert!(forward.shares_store_with(&backward));

        let unrelated = Edge::new("A".into(), "B".into(), share(PropertyMap::new()));
        assert!(!forward.shares_store_with(&unrelated));
    }

    #[test]
    fn test_edge_connects() {
        let edge = Edge::new("A".into(), "B".into(), share(PropertyMap::new()));
        let a = NodeId::new("A");
        let b = NodeId::new("B");
        let c = NodeId::new("C");

        assert!(edge.connects(&a, &b));
        assert!(edge.connects(&b, &a));
        assert!(!edge.connects(&a, &c));
        assert!(!edge.is_self_loop());
    }
}
