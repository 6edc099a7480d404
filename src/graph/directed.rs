//! A directed graph keyed by vertex value and by (start, end) value pairs.
//!
//! Vertex and edge records live in an append-only arena; the graph layers
//! two hash indexes and two insertion-order views on top. Mutation goes
//! through upserting setters and index-level removers whose exact
//! semantics — in particular what removal does *not* clean up — are part of
//! the contract and spelled out on each method.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::GraphError;
use crate::graph::arena::Arena;
use crate::graph::vertex::{Edge, EdgeId, Vertex, VertexId};
use crate::graph::GraphProvider;

/// An indexed container of vertices and directed weighted edges.
///
/// Vertices are identified by their value; edges by their endpoint value
/// pair. Enumeration order is insertion order, and an upsert keeps the
/// original position of the key it replaces.
///
/// # Removal semantics
///
/// `remove_vertex` and `remove_edge` only retract index entries. Adjacency
/// lists of *other* vertices keep their (now stale) edge handles, and those
/// handles continue to resolve through [`DirectedGraph::edge`]. Callers that
/// interleave removal with algorithm runs must account for this; see the
/// method docs.
#[derive(Debug)]
pub struct DirectedGraph<T> {
    arena: Arena<T>,
    vertex_index: HashMap<T, VertexId>,
    edge_index: HashMap<(T, T), EdgeId>,
    vertex_order: Vec<VertexId>,
    edge_order: Vec<EdgeId>,
}

impl<T: Eq + Hash + Clone> DirectedGraph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            vertex_index: HashMap::new(),
            edge_index: HashMap::new(),
            vertex_order: Vec::new(),
            edge_order: Vec::new(),
        }
    }

    /// Inserts a vertex for `value`, or replaces the one already there.
    ///
    /// Last write wins: a replacement allocates a fresh record with empty
    /// adjacency lists and keeps the key's enumeration position. The old
    /// record stays resolvable through any handles that still reference it.
    pub fn set_vertex(&mut self, value: T) -> VertexId {
        let id = self.arena.alloc_vertex(value.clone());
        match self.vertex_index.insert(value, id) {
            Some(previous) => {
                if let Some(slot) = self.vertex_order.iter().position(|&v| v == previous) {
                    self.vertex_order[slot] = id;
                }
            }
            None => self.vertex_order.push(id),
        }
        id
    }

    /// Inserts or replaces the edge from `start` to `end`.
    ///
    /// Both endpoint values must already have vertices. Every call appends a
    /// new edge record to both endpoints' adjacency lists; replacing an
    /// existing (start, end) key repoints the index at the new record but
    /// leaves the superseded record in the adjacency lists.
    ///
    /// # Errors
    /// [`GraphError::MissingEndpoint`] if either endpoint value is absent.
    pub fn set_edge(&mut self, start: &T, end: &T, weight: i64) -> Result<EdgeId, GraphError> {
        let start_id = self
            .vertex_index
            .get(start)
            .copied()
            .ok_or(GraphError::MissingEndpoint)?;
        let end_id = self
            .vertex_index
            .get(end)
            .copied()
            .ok_or(GraphError::MissingEndpoint)?;

        let id = self.arena.connect(start_id, end_id, weight);
        match self.edge_index.insert((start.clone(), end.clone()), id) {
            Some(previous) => {
                if let Some(slot) = self.edge_order.iter().position(|&e| e == previous) {
                    self.edge_order[slot] = id;
                }
            }
            None => self.edge_order.push(id),
        }
        Ok(id)
    }

    /// Removes the vertex for `value` from the vertex index, along with
    /// every indexed edge whose key touches `value`.
    ///
    /// Adjacency lists of other vertices are *not* cleaned up: edges into or
    /// out of the removed vertex survive there as stale handles. Returns
    /// `false` if the value had no vertex.
    pub fn remove_vertex(&mut self, value: &T) -> bool {
        let Some(id) = self.vertex_index.remove(value) else {
            return false;
        };
        self.vertex_order.retain(|&v| v != id);

        let incident: Vec<(T, T)> = self
            .edge_index
            .keys()
            .filter(|(start, end)| start == value || end == value)
            .cloned()
            .collect();
        for key in incident {
            if let Some(edge) = self.edge_index.remove(&key) {
                self.edge_order.retain(|&e| e != edge);
            }
        }
        true
    }

    /// Removes the (start, end) entry from the edge index.
    ///
    /// The edge record itself stays in both endpoints' adjacency lists and
    /// keeps resolving by handle. Returns `false` if no such entry existed.
    pub fn remove_edge(&mut self, start: &T, end: &T) -> bool {
        let Some(edge) = self.edge_index.remove(&(start.clone(), end.clone())) else {
            return false;
        };
        self.edge_order.retain(|&e| e != edge);
        true
    }

    /// Looks up the handle of the vertex identified by `value`.
    pub fn vertex_id(&self, value: &T) -> Option<VertexId> {
        self.vertex_index.get(value).copied()
    }

    /// Looks up the vertex identified by `value`.
    pub fn vertex_by_value(&self, value: &T) -> Option<&Vertex<T>> {
        self.vertex_id(value).and_then(|id| self.arena.vertex(id))
    }

    /// Looks up the indexed edge from `start` to `end`.
    pub fn edge_between(&self, start: &T, end: &T) -> Option<&Edge> {
        self.edge_index
            .get(&(start.clone(), end.clone()))
            .and_then(|&id| self.arena.edge(id))
    }

    /// Returns `true` if a vertex exists for `value`.
    pub fn contains_vertex(&self, value: &T) -> bool {
        self.vertex_index.contains_key(value)
    }

    /// Returns `true` if an indexed edge runs from `start` to `end`.
    pub fn contains_edge(&self, start: &T, end: &T) -> bool {
        self.edge_index.contains_key(&(start.clone(), end.clone()))
    }

    /// Resolves a vertex handle, including handles dropped from the index.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.arena.vertex(id)
    }

    /// Resolves an edge handle, including handles dropped from the index.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.arena.edge(id)
    }

    /// Returns the indexed vertices in insertion order.
    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.vertex_order
    }

    /// Returns the indexed edges in insertion order.
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edge_order
    }

    /// Returns the number of indexed vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_order.len()
    }

    /// Returns the number of indexed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }
}

impl<T: Eq + Hash + Clone> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> GraphProvider<T> for DirectedGraph<T> {
    fn vertex_ids(&self) -> &[VertexId] {
        &self.vertex_order
    }

    fn edge_ids(&self) -> &[EdgeId] {
        &self.edge_order
    }

    fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.arena.vertex(id)
    }

    fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.arena.edge(id)
    }
}
