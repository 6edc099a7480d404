//! Bellman-Ford single-source shortest path with negative-cycle detection.
//!
//! Relaxes every inbound edge of every vertex for `|V| - 1` rounds, walking
//! vertices in enumeration order and each vertex's inbound edges in
//! insertion order. One extra pass afterwards decides the outcome: any edge
//! that still relaxes proves a negative cost cycle, and the whole run fails
//! without returning partial distances.

use std::collections::HashMap;

use tracing::debug;

use crate::error::GraphError;
use crate::graph::pathway::PathwayCollection;
use crate::graph::vertex::{VertexId, INFINITE_DISTANCE};
use crate::graph::GraphProvider;

/// Computes the shortest paths from `start` to every reachable vertex,
/// tolerating negative edge weights.
///
/// # Errors
/// [`GraphError::VertexNotFound`] if `start` does not resolve;
/// [`GraphError::NegativeCostCycle`] if the relaxation never settles.
pub fn bellman_ford<T, G: GraphProvider<T>>(
    graph: &G,
    start: VertexId,
) -> Result<PathwayCollection, GraphError> {
    graph.vertex(start).ok_or(GraphError::VertexNotFound(start))?;
    debug!(vertices = graph.vertex_count(), "running bellman-ford");

    let mut distances: HashMap<VertexId, i64> = graph
        .vertex_ids()
        .iter()
        .map(|&id| (id, INFINITE_DISTANCE))
        .collect();
    distances.insert(start, 0);
    let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();

    let rounds = graph.vertex_count().saturating_sub(1);
    for _ in 0..rounds {
        for &id in graph.vertex_ids() {
            let Some(vertex) = graph.vertex(id) else {
                continue;
            };
            for &edge_id in vertex.inbound_edges() {
                let Some(edge) = graph.edge(edge_id) else {
                    continue;
                };
                let Some(through) = relaxed_distance(&distances, edge.start(), edge.weight())
                else {
                    continue;
                };
                let known = distances.get(&id).copied().unwrap_or(INFINITE_DISTANCE);
                if through < known {
                    distances.insert(id, through);
                    predecessors.insert(id, edge.start());
                }
            }
        }
    }

    // One more pass: a surviving improvement means a negative cost cycle.
    for &id in graph.vertex_ids() {
        let Some(vertex) = graph.vertex(id) else {
            continue;
        };
        for &edge_id in vertex.inbound_edges() {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };
            let Some(through) = relaxed_distance(&distances, edge.start(), edge.weight()) else {
                continue;
            };
            if through < distances.get(&id).copied().unwrap_or(INFINITE_DISTANCE) {
                debug!("bellman-ford detected a negative cost cycle");
                return Err(GraphError::NegativeCostCycle);
            }
        }
    }

    Ok(PathwayCollection::new(predecessors, distances, start))
}

// Distance through an edge whose start is already settled; `None` while the
// start is still unreached, so the infinite sentinel never leaks into a
// comparison against a negative weight.
fn relaxed_distance(
    distances: &HashMap<VertexId, i64>,
    start: VertexId,
    weight: i64,
) -> Option<i64> {
    let from = distances.get(&start).copied().unwrap_or(INFINITE_DISTANCE);
    (from != INFINITE_DISTANCE).then(|| from.saturating_add(weight))
}
