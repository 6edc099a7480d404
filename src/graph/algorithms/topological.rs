//! Cycle-detecting topological ordering.
//!
//! Both variants run the same tri-state depth-first search: a vertex is
//! `NotVisited`, `InProgress` while somewhere on the current search path, or
//! `Resolved` once all of its outbound edges are exhausted. Resolution
//! appends to the order, so the result is the post-order append sequence.
//! An edge into an `InProgress` vertex fails the whole run immediately.
//!
//! The iterative variant exists because deep graphs overflow the call stack
//! otherwise; it reproduces the recursive variant's order exactly, with
//! outbound edges examined in insertion order in both.

use std::collections::HashMap;

use tracing::debug;

use crate::error::GraphError;
use crate::graph::vertex::VertexId;
use crate::graph::GraphProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitStatus {
    NotVisited,
    InProgress,
    Resolved,
}

/// Topologically orders the graph with a recursive depth-first search.
///
/// # Errors
/// [`GraphError::NotAcyclic`] as soon as a back-edge is found; the partial
/// order is discarded.
pub fn topological_sort<T, G: GraphProvider<T>>(graph: &G) -> Result<Vec<VertexId>, GraphError> {
    let mut status: HashMap<VertexId, VisitStatus> = HashMap::new();
    let mut order = Vec::with_capacity(graph.vertex_count());

    for &id in graph.vertex_ids() {
        visit(graph, id, &mut status, &mut order)?;
    }

    debug!(vertices = order.len(), "topological sort complete");
    Ok(order)
}

fn visit<T, G: GraphProvider<T>>(
    graph: &G,
    id: VertexId,
    status: &mut HashMap<VertexId, VisitStatus>,
    order: &mut Vec<VertexId>,
) -> Result<(), GraphError> {
    match status.get(&id).copied().unwrap_or(VisitStatus::NotVisited) {
        VisitStatus::InProgress => Err(GraphError::NotAcyclic),
        VisitStatus::Resolved => Ok(()),
        VisitStatus::NotVisited => {
            status.insert(id, VisitStatus::InProgress);

            if let Some(vertex) = graph.vertex(id) {
                for &edge_id in vertex.outbound_edges() {
                    let Some(edge) = graph.edge(edge_id) else {
                        continue;
                    };
                    visit(graph, edge.end(), status, order)?;
                }
            }

            status.insert(id, VisitStatus::Resolved);
            order.push(id);
            Ok(())
        }
    }
}

/// Topologically orders the graph with an explicit-stack depth-first search.
///
/// Produces exactly the order of [`topological_sort`] for the same graph.
///
/// # Errors
/// [`GraphError::NotAcyclic`] as soon as a back-edge is found; the partial
/// order is discarded.
pub fn topological_sort_iterative<T, G: GraphProvider<T>>(
    graph: &G,
) -> Result<Vec<VertexId>, GraphError> {
    let mut status: HashMap<VertexId, VisitStatus> = HashMap::new();
    let mut order = Vec::with_capacity(graph.vertex_count());
    // Frames of (vertex, index of the next outbound edge to examine).
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    for &root in graph.vertex_ids() {
        if status.get(&root).copied().unwrap_or(VisitStatus::NotVisited) != VisitStatus::NotVisited
        {
            continue;
        }
        status.insert(root, VisitStatus::InProgress);
        stack.push((root, 0));

        while let Some((id, edge_index)) = stack.pop() {
            let outbound = graph.vertex(id).map_or(&[][..], |vertex| vertex.outbound_edges());

            if let Some(&edge_id) = outbound.get(edge_index) {
                stack.push((id, edge_index + 1));
                let Some(edge) = graph.edge(edge_id) else {
                    continue;
                };
                let neighbor = edge.end();
                match status
                    .get(&neighbor)
                    .copied()
                    .unwrap_or(VisitStatus::NotVisited)
                {
                    VisitStatus::InProgress => return Err(GraphError::NotAcyclic),
                    VisitStatus::Resolved => {}
                    VisitStatus::NotVisited => {
                        status.insert(neighbor, VisitStatus::InProgress);
                        stack.push((neighbor, 0));
                    }
                }
            } else {
                status.insert(id, VisitStatus::Resolved);
                order.push(id);
            }
        }
    }

    debug!(vertices = order.len(), "topological sort complete");
    Ok(order)
}
