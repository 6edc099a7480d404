//! Floyd-Warshall all-pairs shortest distances.
//!
//! The table starts at zero on the diagonal and [`INFINITE_DISTANCE`]
//! elsewhere, is overwritten with direct edge weights (unconditionally, so a
//! self-loop edge replaces its diagonal zero), and is then relaxed with the
//! classic k / i / j triple loop. Distances only; no path reconstruction.

use std::collections::HashMap;

use tracing::debug;

use crate::graph::pathway::Roadmap;
use crate::graph::vertex::{VertexId, INFINITE_DISTANCE};
use crate::graph::GraphProvider;

/// Computes the shortest distance between every ordered vertex pair.
///
/// Negative edge weights are allowed as long as no negative cycle exists;
/// with one present the reported distances are meaningless (use
/// [`bellman_ford`](crate::graph::algorithms::bellman_ford) to detect it).
pub fn floyd_warshall<T, G: GraphProvider<T>>(graph: &G) -> Roadmap {
    let ids = graph.vertex_ids();
    debug!(vertices = ids.len(), "running floyd-warshall");

    let mut distances: HashMap<(VertexId, VertexId), i64> =
        HashMap::with_capacity(ids.len() * ids.len());
    for &source in ids {
        for &target in ids {
            let seed = if source == target { 0 } else { INFINITE_DISTANCE };
            distances.insert((source, target), seed);
        }
    }

    for &edge_id in graph.edge_ids() {
        if let Some(edge) = graph.edge(edge_id) {
            distances.insert((edge.start(), edge.end()), edge.weight());
        }
    }

    for &middle in ids {
        for &source in ids {
            for &target in ids {
                let first_leg = distances
                    .get(&(source, middle))
                    .copied()
                    .unwrap_or(INFINITE_DISTANCE);
                let second_leg = distances
                    .get(&(middle, target))
                    .copied()
                    .unwrap_or(INFINITE_DISTANCE);
                if first_leg == INFINITE_DISTANCE || second_leg == INFINITE_DISTANCE {
                    continue;
                }
                let through = first_leg.saturating_add(second_leg);
                let known = distances
                    .get(&(source, target))
                    .copied()
                    .unwrap_or(INFINITE_DISTANCE);
                if through < known {
                    distances.insert((source, target), through);
                }
            }
        }
    }

    Roadmap::new(distances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    #[test]
    fn relaxes_through_intermediates() {
        let mut graph = DirectedGraph::new();
        for label in ["a", "b", "c"] {
            graph.set_vertex(label);
        }
        graph.set_edge(&"a", &"b", 3).unwrap();
        graph.set_edge(&"b", &"c", 4).unwrap();
        graph.set_edge(&"a", &"c", 10).unwrap();
        let a = graph.vertex_id(&"a").unwrap();
        let b = graph.vertex_id(&"b").unwrap();
        let c = graph.vertex_id(&"c").unwrap();

        let roadmap = floyd_warshall(&graph);

        assert_eq!(roadmap.distance(a, a), Some(0));
        assert_eq!(roadmap.distance(a, b), Some(3));
        assert_eq!(roadmap.distance(a, c), Some(7));
        assert_eq!(roadmap.distance(c, a), Some(INFINITE_DISTANCE));
    }

    #[test]
    fn unknown_pairs_are_absent() {
        let graph: DirectedGraph<i32> = DirectedGraph::new();
        let roadmap = floyd_warshall(&graph);
        assert_eq!(roadmap.distance(VertexId(0), VertexId(1)), None);
    }

    #[test]
    fn self_loop_overwrites_the_diagonal() {
        let mut graph = DirectedGraph::new();
        graph.set_vertex("a");
        graph.set_edge(&"a", &"a", 5).unwrap();
        let a = graph.vertex_id(&"a").unwrap();

        let roadmap = floyd_warshall(&graph);

        assert_eq!(roadmap.distance(a, a), Some(5));
    }
}
