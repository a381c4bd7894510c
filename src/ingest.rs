//! Adjacency-list ingestion
//!
//! Input is a JSON object mapping each node identity to the identities it
//! borders, e.g. `{"France": ["Spain", "Belgium"], "Spain": ["France"]}`.
//! Neighbor references that are not keys themselves are dropped before the
//! graph is built.

use crate::graph::{Graph, GraphError, GraphType, NodeId};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Node identity -> neighbor identities, in document order
pub type AdjacencyList = IndexMap<String, Vec<String>>;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid adjacency JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type IngestResult<T> = Result<T, IngestError>;

/// Read an adjacency list from a JSON file
pub fn load_adjacency(path: &Path) -> IngestResult<AdjacencyList> {
    let text = fs::read_to_string(path)?;
    let data = parse_adjacency(&text)?;
    info!("Loaded {} adjacency entries from {:?}", data.len(), path);
    Ok(data)
}

pub fn parse_adjacency(text: &str) -> IngestResult<AdjacencyList> {
    Ok(serde_json::from_str(text)?)
}

/// Remove neighbor references that are not keys. Returns how many were dropped.
pub fn prune_dangling(data: &mut AdjacencyList) -> usize {
    let known: FxHashSet<String> = data.keys().cloned().collect();
    let mut dropped = 0;

    for (key, neighbors) in data.iter_mut() {
        let before = neighbors.len();
        neighbors.retain(|neighbor| {
            let keep = known.contains(neighbor);
            if !keep {
                warn!("Dropping dangling reference {} -> {}", key, neighbor);
            }
            keep
        });
        dropped += before - neighbors.len();
    }

    dropped
}

/// Build a graph with one node per key (in key order) and one edge per
/// neighbor reference.
///
/// References to identities that are not keys are dropped, so every node of
/// the result comes from a key. References already present as an edge are
/// skipped, which is what keeps the mirrored half of a symmetric adjacency
/// list from failing on undirected graphs.
pub fn build_graph(data: &AdjacencyList, graph_type: GraphType) -> IngestResult<Graph> {
    let mut graph = Graph::new(graph_type);

    for key in data.keys() {
        graph.add_node(key.as_str())?;
    }

    let mut dropped = 0;
    for (key, neighbors) in data {
        let source = NodeId::new(key.as_str());
        for neighbor in neighbors {
            if !data.contains_key(neighbor) {
                warn!("Dropping dangling reference {} -> {}", key, neighbor);
                dropped += 1;
                continue;
            }
            let target = NodeId::new(neighbor.as_str());
            if graph.node(&source)?.has_edge_to(&target) {
                continue;
            }
            graph.add_edge(source.clone(), target)?;
        }
    }

    if dropped > 0 {
        info!("Dropped {} dangling references", dropped);
    }
    info!("Built {}", graph);
    Ok(graph)
}
