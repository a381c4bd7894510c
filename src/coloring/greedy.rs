//! Largest-degree-first greedy coloring
//!
//! Each iteration picks the uncolored node with the highest out-degree,
//! collects the colors of its neighbors under the active policy and assigns
//! the first color missing from that set. One node is colored per iteration,
//! so the loop runs exactly `graph.size()` times.

use super::policy::NeighborPolicy;
use super::Color;
use crate::graph::{Graph, GraphError, GraphResult, Node, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::{debug, info};

/// Record of one `colorize` run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColoringOutcome {
    /// Nodes in the order they were colored, with the color they received
    pub assignments: Vec<(NodeId, Color)>,
}

impl ColoringOutcome {
    /// Number of selection iterations performed
    pub fn iterations(&self) -> usize {
        self.assignments.len()
    }

    /// Number of distinct palette slots needed (highest color + 1)
    pub fn color_count(&self) -> usize {
        self.assignments
            .iter()
            .map(|(_, color)| color + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn color_of(&self, id: &NodeId) -> Option<Color> {
        self.assignments
            .iter()
            .find(|(node, _)| node == id)
            .map(|(_, color)| *color)
    }
}

/// Smallest non-negative integer absent from `used`
pub fn first_unused(used: &FxHashSet<Color>) -> Color {
    let mut color = 0;
    while used.contains(&color) {
        color += 1;
    }
    color
}

/// Uncolored node with the highest out-degree.
///
/// Candidates are visited in graph insertion order and the first maximum
/// wins, which keeps results reproducible.
pub fn select_max_degree(graph: &Graph, uncolored: &FxHashSet<NodeId>) -> Option<NodeId> {
    let mut best: Option<&Node> = None;
    for node in graph.nodes().filter(|n| uncolored.contains(n.id())) {
        match best {
            Some(current) if node.out_degree() <= current.out_degree() => {}
            _ => best = Some(node),
        }
    }
    best.map(|node| node.id().clone())
}

/// Color every node of `graph` in place.
///
/// Assignments are computed against a working copy and written back only
/// once every node has a color, replacing any colors from an earlier run. If
/// the policy fails, the error is returned and the graph is left as it was.
pub fn colorize<P>(graph: &mut Graph, policy: &P) -> GraphResult<ColoringOutcome>
where
    P: NeighborPolicy + ?Sized,
{
    let mut uncolored: FxHashSet<NodeId> = graph.node_ids().cloned().collect();
    let mut assigned: FxHashMap<NodeId, Color> = FxHashMap::default();
    let mut outcome = ColoringOutcome {
        assignments: Vec::with_capacity(uncolored.len()),
    };

    while let Some(next) = select_max_degree(graph, &uncolored) {
        debug!("{} uncolored, selected {}", uncolored.len(), next);

        let used = neighbor_colors(graph, policy, &assigned, &next)?;
        let color = first_unused(&used);
        debug!("{} -> color {} (neighbors use {:?})", next, color, used);

        uncolored.remove(&next);
        assigned.insert(next.clone(), color);
        outcome.assignments.push((next, color));
    }

    for node in graph.nodes_mut() {
        match assigned.get(node.id()) {
            Some(&color) => node.set_color(color),
            None => {
                node.clear_color();
            }
        }
    }

    info!(
        "Colored {} nodes with {} colors",
        outcome.iterations(),
        outcome.color_count()
    );
    Ok(outcome)
}

/// Colors already assigned in this run to `id`'s neighbors
fn neighbor_colors<P>(
    graph: &Graph,
    policy: &P,
    assigned: &FxHashMap<NodeId, Color>,
    id: &NodeId,
) -> GraphResult<FxHashSet<Color>>
where
    P: NeighborPolicy + ?Sized,
{
    let mut used = FxHashSet::default();
    for neighbor in policy.neighbors(graph, id)? {
        if !graph.contains(&neighbor) {
            return Err(GraphError::NodeNotFound(neighbor));
        }
        if let Some(&color) = assigned.get(&neighbor) {
            used.insert(color);
        }
    }
    Ok(used)
}

/// Ordered pairs `(node, neighbor)` that share a color under `policy`.
///
/// Pairs where either side is uncolored are not conflicts. A colored node
/// with a self-loop always conflicts with itself. Undirected edges show up
/// once from each endpoint.
pub fn conflicts<P>(graph: &Graph, policy: &P) -> GraphResult<Vec<(NodeId, NodeId)>>
where
    P: NeighborPolicy + ?Sized,
{
    let mut found = Vec::new();
    for node in graph.nodes() {
        let Some(color) = node.color() else {
            continue;
        };
        for neighbor in policy.neighbors(graph, node.id())? {
            if graph.node(&neighbor)?.color() == Some(color) {
                found.push((node.id().clone(), neighbor));
            }
        }
    }
    Ok(found)
}

/// Whether any pair of neighbors under `policy` shares a color.
///
/// Verify with the policy the graph was colored with; checking a directed
/// graph with a narrower policy misses conflicts.
pub fn has_conflicts<P>(graph: &Graph, policy: &P) -> GraphResult<bool>
where
    P: NeighborPolicy + ?Sized,
{
    Ok(!conflicts(graph, policy)?.is_empty())
}
