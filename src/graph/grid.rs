//! A 2-D lattice graph with positional identity and automatic
//! Moore-neighborhood connection.
//!
//! Unlike [`DirectedGraph`](crate::graph::DirectedGraph) there is no
//! value index: a vertex is addressed only by its [`Position`]. Inserting a
//! vertex wires bidirectional weight-1 edges to every occupied neighbor cell
//! (diagonals included); removing one retracts those edges from both
//! endpoint adjacency lists and the edge enumeration.

use crate::error::GraphError;
use crate::graph::arena::Arena;
use crate::graph::vertex::{Edge, EdgeId, Vertex, VertexId};
use crate::graph::GraphProvider;

/// A (row, column) cell address within a [`GridGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the row coordinate.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column coordinate.
    pub fn column(&self) -> usize {
        self.column
    }
}

// Probe order for neighbor detection, as (column, row) offsets:
// left, left-up, up, up-right, right, right-down, down, down-left.
// Edge insertion order — and with it traversal tie-breaking — follows it.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

/// A 2-D grid of vertex slots with automatic 8-neighbor connection.
pub struct GridGraph<T> {
    width: usize,
    height: usize,
    cells: Vec<Option<VertexId>>,
    arena: Arena<T>,
    vertex_order: Vec<VertexId>,
    edge_order: Vec<EdgeId>,
}

impl<T> GridGraph<T> {
    /// Creates a grid with the given dimensions and no vertices.
    pub fn from_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
            arena: Arena::new(),
            vertex_order: Vec::new(),
            edge_order: Vec::new(),
        }
    }

    /// Creates a zero-sized grid.
    pub fn empty() -> Self {
        Self::from_size(0, 0)
    }

    /// Returns the grid width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    fn cell_slot(&self, position: Position) -> Option<usize> {
        (position.row < self.height && position.column < self.width)
            .then(|| position.row * self.width + position.column)
    }

    /// Returns the handle of the vertex occupying `position`, if any.
    pub fn vertex_id_at(&self, position: Position) -> Option<VertexId> {
        self.cell_slot(position).and_then(|slot| self.cells[slot])
    }

    /// Returns the vertex occupying `position`, if any.
    pub fn vertex_at(&self, position: Position) -> Option<&Vertex<T>> {
        self.vertex_id_at(position).and_then(|id| self.arena.vertex(id))
    }

    /// Places a vertex at `position`, replacing (and fully disconnecting)
    /// any previous occupant, then connects it to each occupied Moore
    /// neighbor with a pair of weight-1 edges.
    ///
    /// # Errors
    /// [`GraphError::PositionOutOfBounds`] if the position is off-grid.
    pub fn set_vertex(&mut self, position: Position, value: T) -> Result<VertexId, GraphError> {
        let slot = self
            .cell_slot(position)
            .ok_or(GraphError::PositionOutOfBounds(position))?;
        self.remove_vertex(position);

        let id = self.arena.alloc_vertex(value);
        for neighbor in self.occupied_neighbors(position) {
            let outgoing = self.arena.connect(id, neighbor, 1);
            self.edge_order.push(outgoing);
            let incoming = self.arena.connect(neighbor, id, 1);
            self.edge_order.push(incoming);
        }

        self.cells[slot] = Some(id);
        self.vertex_order.push(id);
        Ok(id)
    }

    /// Connects two occupied positions, reusing an existing edge if one
    /// already runs in that direction.
    ///
    /// # Errors
    /// [`GraphError::PositionOutOfBounds`] for an off-grid position,
    /// [`GraphError::VacantPosition`] for an empty cell.
    pub fn set_edge(
        &mut self,
        source: Position,
        target: Position,
        weight: i64,
    ) -> Result<EdgeId, GraphError> {
        let start = self.resolve(source)?;
        let end = self.resolve(target)?;

        if let Some(existing) = self.find_edge(start, end) {
            return Ok(existing);
        }
        let id = self.arena.connect(start, end, weight);
        self.edge_order.push(id);
        Ok(id)
    }

    /// Removes the vertex at `position`, retracting the edges between it and
    /// all current neighbors in both directions.
    ///
    /// Returns `false` if the cell is off-grid or vacant.
    pub fn remove_vertex(&mut self, position: Position) -> bool {
        let Some(slot) = self.cell_slot(position) else {
            return false;
        };
        let Some(id) = self.cells[slot] else {
            return false;
        };

        let mut neighbors: Vec<VertexId> = Vec::new();
        if let Some(vertex) = self.arena.vertex(id) {
            for &edge_id in vertex.outbound_edges() {
                if let Some(edge) = self.arena.edge(edge_id) {
                    let other = edge.end();
                    if other != id && !neighbors.contains(&other) {
                        neighbors.push(other);
                    }
                }
            }
        }
        for neighbor in neighbors {
            self.retract_edge(id, neighbor);
            self.retract_edge(neighbor, id);
        }

        self.cells[slot] = None;
        self.vertex_order.retain(|&v| v != id);
        true
    }

    /// Removes the edge running from `source` to `target`, if present.
    ///
    /// Returns `false` if either cell is off-grid or vacant, or no such edge
    /// exists.
    pub fn remove_edge(&mut self, source: Position, target: Position) -> bool {
        let (Some(start), Some(end)) = (self.vertex_id_at(source), self.vertex_id_at(target))
        else {
            return false;
        };
        self.retract_edge(start, end)
    }

    /// Returns the indexed vertices in insertion order.
    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.vertex_order
    }

    /// Returns the live edges in insertion order.
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edge_order
    }

    /// Returns the number of vertices on the grid.
    pub fn vertex_count(&self) -> usize {
        self.vertex_order.len()
    }

    /// Returns the number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    /// Resolves a vertex handle issued by this grid.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.arena.vertex(id)
    }

    /// Resolves an edge handle issued by this grid.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.arena.edge(id)
    }

    fn resolve(&self, position: Position) -> Result<VertexId, GraphError> {
        let slot = self
            .cell_slot(position)
            .ok_or(GraphError::PositionOutOfBounds(position))?;
        self.cells[slot].ok_or(GraphError::VacantPosition(position))
    }

    fn occupied_neighbors(&self, position: Position) -> Vec<VertexId> {
        let mut found = Vec::new();
        for (column_shift, row_shift) in NEIGHBOR_OFFSETS {
            let Some(row) = position.row.checked_add_signed(row_shift) else {
                continue;
            };
            let Some(column) = position.column.checked_add_signed(column_shift) else {
                continue;
            };
            if let Some(id) = self.vertex_id_at(Position::new(row, column)) {
                found.push(id);
            }
        }
        found
    }

    fn find_edge(&self, start: VertexId, end: VertexId) -> Option<EdgeId> {
        self.edge_order.iter().copied().find(|&id| {
            self.arena
                .edge(id)
                .is_some_and(|edge| edge.start() == start && edge.end() == end)
        })
    }

    fn retract_edge(&mut self, start: VertexId, end: VertexId) -> bool {
        let Some(id) = self.find_edge(start, end) else {
            return false;
        };
        if let Some(vertex) = self.arena.vertex_mut(start) {
            vertex.retract_outbound(id);
        }
        if let Some(vertex) = self.arena.vertex_mut(end) {
            vertex.retract_inbound(id);
        }
        self.edge_order.retain(|&e| e != id);
        true
    }
}

impl<T> GraphProvider<T> for GridGraph<T> {
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
