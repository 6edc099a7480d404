//! Disjoint set (union-find) with path compression and union by rank.
//!
//! Parent pointers are stored in `Cell`s so that `find` can compress paths
//! through a shared reference; `find` is logically const even though it
//! rewrites parent links internally.

use std::cell::Cell;

/// A disjoint-set structure over elements identified by dense `usize` ids.
///
/// Elements are created with [`DisjointSet::make_set`] and merged with
/// [`DisjointSet::union`]; two elements share a set exactly when
/// [`DisjointSet::find`] returns the same representative for both.
pub struct DisjointSet {
    parent: Vec<Cell<usize>>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates an empty disjoint set.
    pub fn new() -> Self {
        Self {
            parent: Vec::new(),
            rank: Vec::new(),
        }
    }

    /// Creates an empty disjoint set with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new singleton set and returns its element id.
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(Cell::new(id));
        self.rank.push(0);
        id
    }

    /// Finds the representative of the set containing `id`, compressing the
    /// path behind it.
    ///
    /// # Panics
    /// Panics if `id` was not produced by [`DisjointSet::make_set`].
    pub fn find(&self, id: usize) -> usize {
        assert!(id < self.parent.len(), "element {id} out of bounds");

        // First pass: locate the root.
        let mut root = id;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        // Second pass: point every element on the walked path at the root.
        let mut current = id;
        while current != root {
            let parent = self.parent[current].get();
            self.parent[current].set(root);
            current = parent;
        }

        root
    }

    /// Unites the sets containing `a` and `b`.
    ///
    /// Returns `true` if they were in different sets.
    ///
    /// # Panics
    /// Panics if either id was not produced by [`DisjointSet::make_set`].
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] < self.rank[root_b] {
            self.parent[root_a].set(root_b);
        } else if self.rank[root_a] > self.rank[root_b] {
            self.parent[root_b].set(root_a);
        } else {
            self.parent[root_b].set(root_a);
            self.rank[root_a] += 1;
        }

        true
    }

    /// Returns the number of elements across all sets.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if no elements have been created.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

impl Default for DisjointSet {
    fn default() -> Self {
        Self::new()
    }
}
