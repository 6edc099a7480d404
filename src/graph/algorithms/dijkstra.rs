//! Dijkstra's single-source shortest path.
//!
//! Distances start at [`INFINITE_DISTANCE`] with the source at zero. A
//! min-heap keyed by the best distance known at push time drives the
//! relaxation; entries are never updated in place, so the heap accumulates
//! stale pairs for improved vertices. Stale pops are harmless: relaxation
//! always compares against the live distance table.
//!
//! Negative edge weights are a precondition violation — the algorithm is
//! unsound for them and does not try to detect them. Use
//! [`bellman_ford`](crate::graph::algorithms::bellman_ford) instead.

use std::collections::HashMap;

use tracing::debug;

use crate::collections::MinHeap;
use crate::error::GraphError;
use crate::graph::pathway::{Pathway, PathwayCollection};
use crate::graph::vertex::{VertexId, INFINITE_DISTANCE};
use crate::graph::GraphProvider;

/// Computes the shortest paths from `start` to every reachable vertex.
///
/// # Errors
/// [`GraphError::VertexNotFound`] if `start` does not resolve.
pub fn dijkstra<T, G: GraphProvider<T>>(
    graph: &G,
    start: VertexId,
) -> Result<PathwayCollection, GraphError> {
    graph.vertex(start).ok_or(GraphError::VertexNotFound(start))?;
    debug!(vertices = graph.vertex_count(), "running dijkstra");

    let mut distances: HashMap<VertexId, i64> = graph
        .vertex_ids()
        .iter()
        .map(|&id| (id, INFINITE_DISTANCE))
        .collect();
    distances.insert(start, 0);

    let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();
    let mut frontier: MinHeap<i64, VertexId> = MinHeap::with_capacity(graph.vertex_count());
    frontier.insert(0, start);

    while let Some(current) = frontier.remove_min() {
        let Some(vertex) = graph.vertex(current) else {
            continue;
        };
        for &edge_id in vertex.outbound_edges() {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };
            let neighbor = edge.end();
            let through_current = distances
                .get(&current)
                .copied()
                .unwrap_or(INFINITE_DISTANCE)
                .saturating_add(edge.weight());

            let known = distances
                .get(&neighbor)
                .copied()
                .unwrap_or(INFINITE_DISTANCE);
            if through_current < known {
                distances.insert(neighbor, through_current);
                predecessors.insert(neighbor, current);
                frontier.insert(through_current, neighbor);
            }
        }
    }

    Ok(PathwayCollection::new(predecessors, distances, start))
}

/// Computes the shortest path from `start` to `end`.
///
/// Thin wrapper over [`dijkstra`]: runs the all-targets form and indexes the
/// result by `end`.
///
/// # Errors
/// [`GraphError::VertexNotFound`] if either handle does not resolve.
pub fn dijkstra_path<T, G: GraphProvider<T>>(
    graph: &G,
    start: VertexId,
    end: VertexId,
) -> Result<Pathway, GraphError> {
    graph.vertex(end).ok_or(GraphError::VertexNotFound(end))?;
    Ok(dijkstra(graph, start)?.pathway(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::pathway::AlgorithmState;
    use crate::graph::DirectedGraph;

    fn diamond() -> DirectedGraph<&'static str> {
        let mut graph = DirectedGraph::new();
        for label in ["s", "a", "b", "t"] {
            graph.set_vertex(label);
        }
        for (start, end, weight) in [
            ("s", "a", 1),
            ("s", "b", 4),
            ("a", "b", 1),
            ("a", "t", 6),
            ("b", "t", 1),
        ] {
            graph.set_edge(&start, &end, weight).unwrap();
        }
        graph
    }

    #[test]
    fn finds_the_cheaper_detour() {
        let graph = diamond();
        let start = graph.vertex_id(&"s").unwrap();
        let end = graph.vertex_id(&"t").unwrap();

        let pathway = dijkstra_path(&graph, start, end).unwrap();

        let expected: Vec<VertexId> = ["s", "a", "b", "t"]
            .iter()
            .map(|label| graph.vertex_id(label).unwrap())
            .collect();
        assert_eq!(pathway.vertices(), expected.as_slice());
        assert_eq!(pathway.distance(), 3);
        assert_eq!(pathway.state(), AlgorithmState::PathFound);
    }

    #[test]
    fn unreachable_vertex_keeps_infinite_distance() {
        let mut graph = diamond();
        graph.set_vertex("island");
        let start = graph.vertex_id(&"s").unwrap();
        let island = graph.vertex_id(&"island").unwrap();

        let paths = dijkstra(&graph, start).unwrap();

        assert_eq!(paths.distance(island), INFINITE_DISTANCE);
        assert_eq!(
            paths.pathway(island).state(),
            AlgorithmState::PathDoesNotExist
        );
    }

    #[test]
    fn unknown_start_is_rejected() {
        let graph = diamond();
        assert_eq!(
            dijkstra(&graph, VertexId(99)).unwrap_err(),
            GraphError::VertexNotFound(VertexId(99))
        );
    }
}
