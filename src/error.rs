//! Error taxonomy for graph construction, parsing, and algorithms.
//!
//! Every failure is synchronous and local to the call that produced it, and
//! describes a structural property of the input graph. Callers should treat
//! these as permanent for a given graph snapshot rather than retrying.
//!
//! Failing to *find* something is not an error: traversals return the
//! reachable set, and heuristic search reports
//! [`AlgorithmState::PathDoesNotExist`](crate::graph::AlgorithmState).

use std::num::ParseIntError;

use thiserror::Error;

use crate::graph::grid::Position;
use crate::graph::{EdgeId, VertexId};

/// The error type covering every failure this library can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex handle did not resolve against the graph it was used with.
    #[error("vertex handle {0:?} does not belong to this graph")]
    VertexNotFound(VertexId),

    /// An edge handle did not resolve against the graph it was used with.
    #[error("edge handle {0:?} does not belong to this graph")]
    EdgeNotFound(EdgeId),

    /// An edge endpoint value has no vertex in the graph.
    #[error("edge endpoint value is not present in the graph")]
    MissingEndpoint,

    /// A grid position lies outside the grid dimensions.
    #[error("position {0:?} is outside the grid")]
    PositionOutOfBounds(Position),

    /// A grid position is inside the grid but holds no vertex.
    #[error("no vertex at position {0:?}")]
    VacantPosition(Position),

    /// Bellman-Ford found an edge that still relaxes after `|V| - 1` rounds,
    /// so no shortest-path tree exists.
    #[error("graph contains a negative cost cycle")]
    NegativeCostCycle,

    /// Topological ordering reached a vertex that is still on the current
    /// search path, proving the graph is not a DAG.
    #[error("graph is not a directed acyclic graph")]
    NotAcyclic,

    /// The candidate edge supply ran out before a spanning tree could select
    /// `|V| - 1` edges. The graph is disconnected or too sparse.
    #[error("spanning tree is not constructible: candidate edges exhausted")]
    SpanningTreeNotConstructible,

    /// An adjacency-list line did not contain at least two labels.
    #[error("line {line}: expected \"start end [weight]\"")]
    MalformedLine {
        /// 1-based line number within the parsed input.
        line: usize,
    },

    /// An adjacency-list line carried a weight that is not an integer.
    #[error("line {line}: invalid edge weight")]
    InvalidWeight {
        /// 1-based line number within the parsed input.
        line: usize,
        /// The underlying integer parse failure.
        source: ParseIntError,
    },
}
