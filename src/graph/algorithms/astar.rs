//! A* heuristic search with a pluggable distance estimate.
//!
//! The estimate is a capability passed into the call: any
//! `Fn(&Vertex<T>, &Vertex<T>) -> i64` returning a non-negative guess of the
//! remaining cost. For optimality it must be admissible — never an
//! overestimate. That is a precondition, not something the search enforces.
//!
//! Movement cost is a unit-step model: every expansion costs the parent's
//! movement cost plus one, regardless of the actual edge weight, and the
//! seed record already carries one step. This matches unit-weight grids and
//! is a documented limitation for weighted graphs.

use std::collections::HashMap;

use tracing::debug;

use crate::collections::MinHeap;
use crate::error::GraphError;
use crate::graph::grid::Position;
use crate::graph::pathway::{AlgorithmState, Pathway};
use crate::graph::vertex::{Vertex, VertexId};
use crate::graph::GraphProvider;

/// Access to grid coordinates, for values that live on a lattice.
pub trait GridPoint {
    /// Returns the row coordinate.
    fn row(&self) -> i64;

    /// Returns the column coordinate.
    fn column(&self) -> i64;
}

impl GridPoint for Position {
    fn row(&self) -> i64 {
        Position::row(self) as i64
    }

    fn column(&self) -> i64 {
        Position::column(self) as i64
    }
}

/// The Manhattan distance between two grid-positioned vertices.
///
/// Admissible for 4-connected movement; on 8-connected grids it can
/// overestimate across diagonals.
pub fn manhattan_distance<T: GridPoint>(source: &Vertex<T>, target: &Vertex<T>) -> i64 {
    (source.value().row() - target.value().row()).abs()
        + (source.value().column() - target.value().column()).abs()
}

// Per-vertex search record: parent link plus g and h.
struct PathStep {
    parent: Option<VertexId>,
    movement_cost: i64,
    estimated_cost: i64,
}

impl PathStep {
    fn new(parent: Option<VertexId>, parent_cost: i64, estimated_cost: i64) -> Self {
        Self {
            parent,
            // Unit-step model: one point per expansion.
            movement_cost: parent_cost + 1,
            estimated_cost,
        }
    }

    // f = g + h
    fn total_cost(&self) -> i64 {
        self.movement_cost.saturating_add(self.estimated_cost)
    }
}

/// Searches for a path from `start` to `target` guided by `estimate`.
///
/// Terminates in [`AlgorithmState::PathFound`] or
/// [`AlgorithmState::PathDoesNotExist`]; failing to find the target is a
/// normal outcome, not an error. On failure the returned pathway is the
/// chain reachable from the last examined vertex, which may be empty.
///
/// # Errors
/// [`GraphError::VertexNotFound`] if either handle does not resolve.
pub fn astar<T, G, F>(
    graph: &G,
    start: VertexId,
    target: VertexId,
    estimate: F,
) -> Result<Pathway, GraphError>
where
    G: GraphProvider<T>,
    F: Fn(&Vertex<T>, &Vertex<T>) -> i64,
{
    let start_vertex = graph.vertex(start).ok_or(GraphError::VertexNotFound(start))?;
    let target_vertex = graph
        .vertex(target)
        .ok_or(GraphError::VertexNotFound(target))?;

    let mut opened: MinHeap<i64, VertexId> = MinHeap::new();
    let mut visited: MinHeap<i64, VertexId> = MinHeap::new();
    let mut path: HashMap<VertexId, PathStep> = HashMap::new();

    let seed = PathStep::new(None, 0, estimate(start_vertex, target_vertex));
    opened.insert(seed.total_cost(), start);
    path.insert(start, seed);

    let mut state = AlgorithmState::Searching;
    let mut current = Some(start);

    while state == AlgorithmState::Searching {
        current = next_candidate(&mut opened, &visited);
        let Some(examined) = current else {
            state = AlgorithmState::PathDoesNotExist;
            break;
        };

        // Off the open list and onto the closed one: this vertex is now
        // being searched.
        if let Some(step) = path.get(&examined) {
            visited.insert(step.total_cost(), examined);
        }

        if examined == target {
            state = AlgorithmState::PathFound;
            break;
        }

        extend_opened(
            graph,
            &mut opened,
            &visited,
            &mut path,
            examined,
            target_vertex,
            &estimate,
        );
    }

    let vertices = reconstruct(current, &path);
    let distance = current
        .and_then(|examined| path.get(&examined))
        .map_or(0, |step| step.movement_cost);
    debug!(?state, length = vertices.len(), "astar finished");

    Ok(Pathway::new(vertices, distance, state))
}

// Pops open candidates until one surfaces that has not been searched yet.
fn next_candidate(
    opened: &mut MinHeap<i64, VertexId>,
    visited: &MinHeap<i64, VertexId>,
) -> Option<VertexId> {
    while let Some(candidate) = opened.remove_min() {
        if !visited.contains(&candidate) {
            return Some(candidate);
        }
    }
    None
}

// Queues every outbound neighbor that is neither searched nor already
// queued. Records queued earlier keep their movement and estimated costs.
fn extend_opened<T, G, F>(
    graph: &G,
    opened: &mut MinHeap<i64, VertexId>,
    visited: &MinHeap<i64, VertexId>,
    path: &mut HashMap<VertexId, PathStep>,
    current: VertexId,
    target_vertex: &Vertex<T>,
    estimate: &F,
) where
    G: GraphProvider<T>,
    F: Fn(&Vertex<T>, &Vertex<T>) -> i64,
{
    let Some(vertex) = graph.vertex(current) else {
        return;
    };
    let parent_cost = path.get(&current).map_or(0, |step| step.movement_cost);

    for &edge_id in vertex.outbound_edges() {
        let Some(edge) = graph.edge(edge_id) else {
            continue;
        };
        let neighbor = edge.end();
        if visited.contains(&neighbor) || opened.contains(&neighbor) {
            continue;
        }
        let Some(neighbor_vertex) = graph.vertex(neighbor) else {
            continue;
        };

        let step = PathStep::new(
            Some(current),
            parent_cost,
            estimate(neighbor_vertex, target_vertex),
        );
        opened.insert(step.total_cost(), neighbor);
        path.insert(neighbor, step);
    }
}

// Walks parent links back from the last examined vertex; start first.
fn reconstruct(current: Option<VertexId>, path: &HashMap<VertexId, PathStep>) -> Vec<VertexId> {
    let Some(mut cursor) = current else {
        return Vec::new();
    };

    let mut vertices = Vec::new();
    loop {
        vertices.push(cursor);
        match path.get(&cursor).and_then(|step| step.parent) {
            Some(parent) => cursor = parent,
            None => break,
        }
    }
    vertices.reverse();
    vertices
}
