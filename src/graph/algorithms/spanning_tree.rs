//! Minimum spanning trees: Prim's and Kruskal's greedy edge selection.
//!
//! Both require `|V| - 1` accepted edges and fail once the candidate supply
//! runs dry before that — a disconnected graph, or no crossing edge left.
//! An empty graph (or one without edges) short-circuits to an empty tree.
//!
//! Edge direction is ignored for the spanning criterion: Prim's crossing
//! test asks for exactly one visited endpoint, and Kruskal's component test
//! only compares set representatives.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::collections::{DisjointSet, MinHeap};
use crate::error::GraphError;
use crate::graph::pathway::MinimumSpanTree;
use crate::graph::vertex::{EdgeId, VertexId};
use crate::graph::GraphProvider;

/// Builds a minimum spanning tree with Prim's algorithm.
///
/// Starts from the first vertex in the graph's enumeration and grows the
/// visited region one cheapest crossing edge at a time, feeding each newly
/// reached vertex's outbound edges into the candidate heap.
///
/// # Errors
/// [`GraphError::SpanningTreeNotConstructible`] if the candidates are
/// exhausted before `|V| - 1` edges are selected.
pub fn prim<T, G: GraphProvider<T>>(graph: &G) -> Result<MinimumSpanTree, GraphError> {
    let ids = graph.vertex_ids();
    if ids.is_empty() || graph.edge_ids().is_empty() {
        return Ok(MinimumSpanTree::new(Vec::new(), 0));
    }

    let needed = ids.len() - 1;
    let mut selected: Vec<EdgeId> = Vec::with_capacity(needed);
    let mut total: i64 = 0;
    let mut candidates: MinHeap<i64, EdgeId> = MinHeap::new();
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut current = ids[0];

    while selected.len() < needed {
        if let Some(vertex) = graph.vertex(current) {
            for &edge_id in vertex.outbound_edges() {
                if let Some(edge) = graph.edge(edge_id) {
                    candidates.insert(edge.weight(), edge_id);
                }
            }
        }
        visited.insert(current);

        let mut crossing = None;
        while let Some(edge_id) = candidates.remove_min() {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };
            if visited.contains(&edge.start()) != visited.contains(&edge.end()) {
                crossing = Some((edge_id, edge.start(), edge.end(), edge.weight()));
                break;
            }
        }
        let Some((edge_id, start, end, weight)) = crossing else {
            return Err(GraphError::SpanningTreeNotConstructible);
        };

        selected.push(edge_id);
        total = total.saturating_add(weight);
        current = if visited.contains(&end) { start } else { end };
    }

    debug!(edges = selected.len(), total, "prim selected a spanning tree");
    Ok(MinimumSpanTree::new(selected, total))
}

/// Builds a minimum spanning tree with Kruskal's algorithm.
///
/// Heaps every indexed edge by weight up front, then accepts each popped
/// edge only when its endpoints sit in different disjoint-set components,
/// uniting them on acceptance.
///
/// # Errors
/// [`GraphError::SpanningTreeNotConstructible`] if the candidates are
/// exhausted before `|V| - 1` edges are selected.
pub fn kruskal<T, G: GraphProvider<T>>(graph: &G) -> Result<MinimumSpanTree, GraphError> {
    let ids = graph.vertex_ids();
    if ids.is_empty() || graph.edge_ids().is_empty() {
        return Ok(MinimumSpanTree::new(Vec::new(), 0));
    }

    let mut components = DisjointSet::with_capacity(ids.len());
    let elements: HashMap<VertexId, usize> =
        ids.iter().map(|&id| (id, components.make_set())).collect();

    let mut candidates: MinHeap<i64, EdgeId> = MinHeap::with_capacity(graph.edge_count());
    for &edge_id in graph.edge_ids() {
        if let Some(edge) = graph.edge(edge_id) {
            candidates.insert(edge.weight(), edge_id);
        }
    }

    let needed = ids.len() - 1;
    let mut selected: Vec<EdgeId> = Vec::with_capacity(needed);
    let mut total: i64 = 0;

    while selected.len() < needed {
        let mut accepted = None;
        while let Some(edge_id) = candidates.remove_min() {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };
            let (Some(&start), Some(&end)) =
                (elements.get(&edge.start()), elements.get(&edge.end()))
            else {
                continue;
            };
            if components.find(start) != components.find(end) {
                accepted = Some((edge_id, start, end, edge.weight()));
                break;
            }
        }
        let Some((edge_id, start, end, weight)) = accepted else {
            return Err(GraphError::SpanningTreeNotConstructible);
        };

        selected.push(edge_id);
        total = total.saturating_add(weight);
        components.union(start, end);
    }

    debug!(edges = selected.len(), total, "kruskal selected a spanning tree");
    Ok(MinimumSpanTree::new(selected, total))
}
