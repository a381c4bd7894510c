//! Neighbor-collection policies
//!
//! A policy answers "whose colors constrain this node?". On undirected graphs
//! both built-in policies agree. On directed graphs [`Outgoing`] only follows
//! adjacency entries recorded under the node, while [`Bidirectional`] also
//! picks up nodes with an entry pointing at it, which amounts to coloring the
//! underlying undirected conflict graph.

use crate::graph::{Graph, GraphResult, NodeId};
use indexmap::IndexSet;

/// Strategy deciding which neighbors constrain a node's color
///
/// Any `Fn(&Graph, &NodeId) -> GraphResult<Vec<NodeId>>` closure is a policy.
pub trait NeighborPolicy {
    fn neighbors(&self, graph: &Graph, id: &NodeId) -> GraphResult<Vec<NodeId>>;
}

impl<F> NeighborPolicy for F
where
    F: Fn(&Graph, &NodeId) -> GraphResult<Vec<NodeId>>,
{
    fn neighbors(&self, graph: &Graph, id: &NodeId) -> GraphResult<Vec<NodeId>> {
        self(graph, id)
    }
}

/// Only the node's own adjacency entries
#[derive(Debug, Clone, Copy, Default)]
pub struct Outgoing;

impl NeighborPolicy for Outgoing {
    fn neighbors(&self, graph: &Graph, id: &NodeId) -> GraphResult<Vec<NodeId>> {
        Ok(graph.node(id)?.neighbor_ids().cloned().collect())
    }
}

/// Adjacency entries in both directions.
///
/// Incoming neighbors are found by scanning every node's entries, so one call
/// costs O(V).
#[derive(Debug, Clone, Copy, Default)]
pub struct Bidirectional;

impl NeighborPolicy for Bidirectional {
    fn neighbors(&self, graph: &Graph, id: &NodeId) -> GraphResult<Vec<NodeId>> {
        let mut found: IndexSet<NodeId> = graph.node(id)?.neighbor_ids().cloned().collect();
        for other in graph.nodes() {
            if other.has_edge_to(id) {
                found.insert(other.id().clone());
            }
        }
        Ok(found.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<NodeId> {
        list.iter().map(|s| NodeId::new(*s)).collect()
    }

    fn directed_sample() -> Graph {
        let mut graph = Graph::directed();
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("A", "C").unwrap();
        graph.add_edge("B", "C").unwrap();
        graph.add_edge("C", "D").unwrap();
        graph
    }

    #[test]
    fn test_outgoing_only_follows_entries() {
        let graph = directed_sample();
        assert_eq!(Outgoing.neighbors(&graph, &"A".into()).unwrap(), ids(&["B", "C"]));
        assert_eq!(Outgoing.neighbors(&graph, &"C".into()).unwrap(), ids(&["D"]));
        assert!(Outgoing.neighbors(&graph, &"D".into()).unwrap().is_empty());
    }

    #[test]
    fn test_bidirectional_adds_incoming() {
        let graph = directed_sample();
        assert_eq!(
            Bidirectional.neighbors(&graph, &"C".into()).unwrap(),
            ids(&["D", "A", "B"])
        );
        assert_eq!(Bidirectional.neighbors(&graph, &"D".into()).unwrap(), ids(&["C"]));
    }

    #[test]
    fn test_policies_agree_on_undirected() {
        let mut graph = Graph::undirected();
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("C", "A").unwrap();

        let a = NodeId::new("A");
        assert_eq!(
            Outgoing.neighbors(&graph, &a).unwrap(),
            Bidirectional.neighbors(&graph, &a).unwrap()
        );
    }

    #[test]
    fn test_bidirectional_does_not_repeat_two_way_edges() {
        let mut graph = Graph::directed();
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("B", "A").unwrap();
        assert_eq!(Bidirectional.neighbors(&graph, &"A".into()).unwrap(), ids(&["B"]));
    }

    #[test]
    fn test_closure_policy() {
        let graph = directed_sample();
        let nobody = |_: &Graph, _: &NodeId| -> GraphResult<Vec<NodeId>> { Ok(Vec::new()) };
        assert!(nobody.neighbors(&graph, &"A".into()).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_node() {
        let graph = directed_sample();
        assert!(Outgoing.neighbors(&graph, &"Z".into()).is_err());
        assert!(Bidirectional.neighbors(&graph, &"Z".into()).is_err());
    }
}
