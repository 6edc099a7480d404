//! Immutable query results returned by the graph algorithms.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::graph::vertex::{EdgeId, VertexId, INFINITE_DISTANCE};

/// Where a search algorithm currently stands.
///
/// `Searching` is the only non-terminal state; results handed back to
/// callers always carry one of the two terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmState {
    /// The search is still expanding candidates.
    Searching,
    /// The search reached its target.
    PathFound,
    /// The search exhausted its candidates without reaching the target.
    PathDoesNotExist,
}

/// An ordered vertex sequence with its total distance and terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pathway {
    vertices: Vec<VertexId>,
    distance: i64,
    state: AlgorithmState,
}

impl Pathway {
    pub(crate) fn new(vertices: Vec<VertexId>, distance: i64, state: AlgorithmState) -> Self {
        Self {
            vertices,
            distance,
            state,
        }
    }

    /// Returns the vertices along the path, start first.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Returns the total distance of the path.
    pub fn distance(&self) -> i64 {
        self.distance
    }

    /// Returns the state the producing search terminated in.
    pub fn state(&self) -> AlgorithmState {
        self.state
    }

    /// Returns the number of vertices on the path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the path holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the vertices along the path.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Pathway {
    type Item = VertexId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, VertexId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter().copied()
    }
}

/// Every shortest path out of a single source, reconstructed on demand.
///
/// Produced by Dijkstra and Bellman-Ford. Holds the predecessor and distance
/// maps of the finished run; [`PathwayCollection::pathway`] walks the
/// predecessor chain back to the source, reverses it, and caches the result.
///
/// The cache uses single-thread interior mutability, in line with the
/// crate-wide model: one invocation, one thread, no sharing under mutation.
#[derive(Debug)]
pub struct PathwayCollection {
    predecessors: HashMap<VertexId, VertexId>,
    distances: HashMap<VertexId, i64>,
    start: VertexId,
    reconstructed: RefCell<HashMap<VertexId, Pathway>>,
}

impl PathwayCollection {
    pub(crate) fn new(
        predecessors: HashMap<VertexId, VertexId>,
        distances: HashMap<VertexId, i64>,
        start: VertexId,
    ) -> Self {
        Self {
            predecessors,
            distances,
            start,
            reconstructed: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the source vertex the paths radiate from.
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Returns the shortest distance from the source to `end`, or
    /// [`INFINITE_DISTANCE`] if `end` was never reached.
    pub fn distance(&self, end: VertexId) -> i64 {
        self.distances
            .get(&end)
            .copied()
            .unwrap_or(INFINITE_DISTANCE)
    }

    /// Returns the shortest path from the source to `end`.
    ///
    /// A target without a predecessor chain yields an empty pathway in the
    /// [`AlgorithmState::PathDoesNotExist`] state, carrying whatever
    /// (possibly infinite) distance was recorded. Asking for the source
    /// itself yields the trivial single-vertex pathway.
    pub fn pathway(&self, end: VertexId) -> Pathway {
        if let Some(cached) = self.reconstructed.borrow().get(&end) {
            return cached.clone();
        }
        let pathway = self.reconstruct(end);
        self.reconstructed.borrow_mut().insert(end, pathway.clone());
        pathway
    }

    fn reconstruct(&self, end: VertexId) -> Pathway {
        if end == self.start {
            return Pathway::new(vec![end], self.distance(end), AlgorithmState::PathFound);
        }

        let Some(&predecessor) = self.predecessors.get(&end) else {
            return Pathway::new(Vec::new(), self.distance(end), AlgorithmState::PathDoesNotExist);
        };

        let mut vertices = vec![end, predecessor];
        let mut current = predecessor;
        while let Some(&previous) = self.predecessors.get(&current) {
            vertices.push(previous);
            current = previous;
        }
        vertices.reverse();

        Pathway::new(vertices, self.distance(end), AlgorithmState::PathFound)
    }
}

/// An all-pairs distance table keyed by (start, end) vertex pairs.
///
/// Produced by Floyd-Warshall. Carries distances only; paths are not
/// reconstructed.
#[derive(Debug)]
pub struct Roadmap {
    distances: HashMap<(VertexId, VertexId), i64>,
}

impl Roadmap {
    pub(crate) fn new(distances: HashMap<(VertexId, VertexId), i64>) -> Self {
        Self { distances }
    }

    /// Returns the shortest distance from `start` to `end`.
    ///
    /// `None` means the pair was not part of the computed graph; a known but
    /// unreachable pair reports [`INFINITE_DISTANCE`].
    pub fn distance(&self, start: VertexId, end: VertexId) -> Option<i64> {
        self.distances.get(&(start, end)).copied()
    }
}

/// A spanning edge selection and its total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumSpanTree {
    edges: Vec<EdgeId>,
    distance: i64,
}

impl MinimumSpanTree {
    pub(crate) fn new(edges: Vec<EdgeId>, distance: i64) -> Self {
        Self { edges, distance }
    }

    /// Returns the selected edges in selection order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns the summed weight of the selected edges.
    pub fn distance(&self) -> i64 {
        self.distance
    }

    /// Returns the number of selected edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if no edges were selected.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over the selected edges.
    pub fn iter(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().copied()
    }
}
