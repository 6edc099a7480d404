//! # `trellis` - Directed Graphs and Pathfinding
//!
//! A directed-graph toolkit: an indexed, value-keyed graph, a 2-D lattice
//! variant with automatic neighbor connection, and a family of classic
//! algorithms over both — traversal, shortest paths, heuristic search,
//! topological ordering, and minimum spanning trees.
//!
//! ## Data Model
//!
//! Vertices and edges live in an append-only arena and are addressed by
//! stable integer handles ([`VertexId`], [`EdgeId`]). Adjacency lists store
//! handles, never references, so there are no ownership cycles and a handle
//! keeps resolving for the graph's whole lifetime — deliberately including
//! handles that removal has already dropped from the indexes. What removal
//! cleans up (and what it leaves stale) is documented per method on
//! [`DirectedGraph`] and [`GridGraph`].
//!
//! ## Algorithms
//!
//! Every algorithm is a pure function over the [`GraphProvider`] seam:
//!
//! | Algorithm | Result | Failure mode |
//! |-----------|--------|--------------|
//! | [`breadth_first_search`] / [`depth_first_search`] | visit order | none; full reachable set |
//! | [`dijkstra`] / [`dijkstra_path`] | [`PathwayCollection`] / [`Pathway`] | invalid start |
//! | [`bellman_ford`] | [`PathwayCollection`] | negative cost cycle |
//! | [`floyd_warshall`] | [`Roadmap`] | none |
//! | [`astar`] | [`Pathway`] with terminal [`AlgorithmState`] | not-found is a state, not an error |
//! | [`topological_sort`] / [`topological_sort_iterative`] | ordered vertices | graph is not a DAG |
//! | [`prim`] / [`kruskal`] | [`MinimumSpanTree`] | spanning tree not constructible |
//!
//! ## Concurrency Model
//!
//! Everything here is synchronous and single-threaded: algorithms never
//! block or yield, auxiliary state is private to one invocation, and no
//! internal locking exists. Callers that share a graph across threads must
//! serialize mutation externally.
//!
//! ## Example
//!
//! ```rust
//! use trellis::{algorithms, DirectedGraph};
//!
//! let mut graph = DirectedGraph::new();
//! for city in ["oslo", "turku", "visby"] {
//!     graph.set_vertex(city);
//! }
//! graph.set_edge(&"oslo", &"turku", 4)?;
//! graph.set_edge(&"turku", &"visby", 2)?;
//! graph.set_edge(&"oslo", &"visby", 9)?;
//!
//! let oslo = graph.vertex_id(&"oslo").unwrap();
//! let visby = graph.vertex_id(&"visby").unwrap();
//!
//! let pathway = algorithms::dijkstra_path(&graph, oslo, visby)?;
//! assert_eq!(pathway.distance(), 6);
//! assert_eq!(pathway.len(), 3);
//! # Ok::<(), trellis::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use error::GraphError;
pub use graph::algorithms::{
    self, astar, bellman_ford, breadth_first_search, depth_first_search, dijkstra, dijkstra_path,
    floyd_warshall, kruskal, manhattan_distance, prim, topological_sort,
    topological_sort_iterative, Bfs, Dfs, GridPoint,
};
pub use graph::{
    parse_adjacency_list, parse_into, AlgorithmState, DirectedGraph, Edge, EdgeId, GraphProvider,
    GridGraph, MinimumSpanTree, Pathway, PathwayCollection, Position, Roadmap, Vertex, VertexId,
    INFINITE_DISTANCE,
};

// Handle types must stay word-sized; they are copied pervasively.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<VertexId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<EdgeId>() == mem::size_of::<usize>());
};
