//! [`MatrixGraph`] is a graph stored as a dense adjacency matrix, together
//! with the label-based mutation and adjacency queries built on it.
//!
//! A graph is made of three parts kept in lockstep:
//!
//! - a [`VertexStore`] holding the labels in insertion order, where a label's
//!   position is its row and column in the matrix,
//! - an [`AdjacencyMatrix`] whose size always equals the number of vertices,
//! - a [`GraphKind`] chosen at construction.
//!
//! Undirected kinds keep the matrix symmetric by writing every arc into both
//! `(from, to)` and `(to, from)`.  Every operation that names a vertex takes
//! its label; operations on absent vertices or arcs report `false`/`None`
//! instead of failing.
//!
//! Vertex positions shift down when an earlier vertex is deleted, so a
//! position obtained from [`MatrixGraph::locate_vertex`] is only meaningful
//! until the next mutation.

use crate::{
    adjacency_matrix::AdjacencyMatrix,
    error::{GraphKindError, MatrixShapeError},
    kind::GraphKind,
    tracing_support::{debug, trace},
    vertex_store::{Label, VertexStore},
};

/// A graph over labels of type `L` whose arcs carry weights of type `W`.
///
/// For the unweighted kinds ([`GraphKind::DirectedGraph`] and
/// [`GraphKind::UndirectedGraph`]) the weight passed to
/// [`insert_arc`](Self::insert_arc) is ignored and `W::default()` is stored.
#[derive(Clone)]
pub struct MatrixGraph<L, W = i32> {
    kind: GraphKind,
    vertices: VertexStore<L>,
    matrix: AdjacencyMatrix<W>,
    /// Number of occupied matrix cells.
    entry_count: usize,
}

impl<L: Label, W> MatrixGraph<L, W> {
    /// Creates an empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        MatrixGraph {
            kind,
            vertices: VertexStore::new(),
            matrix: AdjacencyMatrix::new(),
            entry_count: 0,
        }
    }

    /// Creates an empty graph from a numeric kind code (`0` = DG, `1` = DN,
    /// `2` = UDG, `3` = UDN).
    pub fn with_kind_code(code: i32) -> Result<Self, GraphKindError> {
        Ok(Self::new(GraphKind::try_from(code)?))
    }

    /// Creates an empty graph from a kind's short name (`"DG"`, `"DN"`,
    /// `"UDG"` or `"UDN"`, ignoring case).
    pub fn with_kind_name(name: &str) -> Result<Self, GraphKindError> {
        Ok(Self::new(name.parse()?))
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// Gets the number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Gets the number of arcs (directed kinds) or edges (undirected kinds).
    ///
    /// An undirected self-loop occupies a single diagonal cell and counts as
    /// one edge.
    pub fn edge_count(&self) -> usize {
        if self.kind.is_directed() {
            self.entry_count
        } else {
            let loops = (0..self.matrix.size())
                .filter(|&i| self.matrix.contains(i, i))
                .count();
            (self.entry_count + loops) / 2
        }
    }

    /// Gets the number of occupied matrix cells.  For undirected kinds each
    /// edge between distinct vertices occupies two cells.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the current position of `label`, or `None` if it is not a
    /// vertex of this graph.
    pub fn locate_vertex(&self, label: &L) -> Option<usize> {
        self.vertices.locate(label)
    }

    pub fn contains_vertex(&self, label: &L) -> bool {
        self.vertices.contains(label)
    }

    /// Gets the label of the vertex at `index`.
    pub fn vertex(&self, index: usize) -> Option<&L> {
        self.vertices.get(index)
    }

    /// Iterates over vertex labels in position order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &L> + '_ {
        self.vertices.iter()
    }

    /// A read-only view of the underlying matrix.
    pub fn matrix(&self) -> &AdjacencyMatrix<W> {
        &self.matrix
    }

    fn locate_pair(&self, from: &L, to: &L) -> Option<(usize, usize)> {
        Some((self.locate_vertex(from)?, self.locate_vertex(to)?))
    }

    /// Returns true if the cell `(from, to)` holds an arc.  For undirected
    /// kinds this is the same as asking about `(to, from)`.
    pub fn has_arc(&self, from: &L, to: &L) -> bool {
        self.weight(from, to).is_some()
    }

    /// Gets the weight stored for the arc `from -> to`, if any.
    pub fn weight(&self, from: &L, to: &L) -> Option<&W> {
        let (i, j) = self.locate_pair(from, to)?;
        self.matrix.get(i, j)
    }

    /// Iterates over all occupied cells in row-major order as
    /// `(from, to, weight)`.  Undirected edges between distinct vertices are
    /// reported once in each direction.
    pub fn arcs(&self) -> impl Iterator<Item = (&L, &L, &W)> + '_ {
        self.matrix.iter().filter_map(|(row, col, weight)| {
            Some((self.vertices.get(row)?, self.vertices.get(col)?, weight))
        })
    }

    /// Returns the position of the first vertex adjacent to the vertex at
    /// `index`, scanning columns upward from zero.
    pub fn first_adjacent_index(&self, index: usize) -> Option<usize> {
        self.matrix.next_in_row(index, 0)
    }

    /// Returns the position of the next vertex adjacent to the vertex at
    /// `index`, scanning columns strictly after `after`.
    pub fn next_adjacent_index(&self, index: usize, after: usize) -> Option<usize> {
        self.matrix.next_in_row(index, after + 1)
    }

    /// Returns the first vertex adjacent to `vertex` in position order, or
    /// `None` if `vertex` is absent or has no neighbors.
    pub fn first_adjacent(&self, vertex: &L) -> Option<&L> {
        let index = self.locate_vertex(vertex)?;
        self.vertices.get(self.first_adjacent_index(index)?)
    }

    /// Returns the vertex adjacent to `vertex` that follows `after` in
    /// position order, or `None` at the end of the row or if either vertex
    /// is absent.
    pub fn next_adjacent(&self, vertex: &L, after: &L) -> Option<&L> {
        let (index, after) = self.locate_pair(vertex, after)?;
        self.vertices.get(self.next_adjacent_index(index, after)?)
    }

    /// Iterates over the neighbors of `vertex` in ascending position order.
    /// Yields nothing if `vertex` is absent.
    pub fn neighbors(&self, vertex: &L) -> impl Iterator<Item = &L> + '_ {
        let index = self.locate_vertex(vertex);
        let mut cursor = None;
        std::iter::from_fn(move || {
            let index = index?;
            let next = match cursor {
                None => self.first_adjacent_index(index),
                Some(after) => self.next_adjacent_index(index, after),
            }?;
            cursor = Some(next);
            self.vertices.get(next)
        })
    }
}

impl<L: Label, W: Clone + Default> MatrixGraph<L, W> {
    /// Builds a graph from a literal weight matrix.
    ///
    /// `labels` are inserted in order and become rows/columns `0..n`.  Every
    /// cell of `rows` whose value differs from `W::default()` is then passed
    /// to [`insert_arc`](Self::insert_arc) in row-major order, so for
    /// undirected kinds the first cell of a mismatched pair decides the
    /// weight.
    pub fn from_weight_matrix<R>(
        kind: GraphKind,
        labels: impl IntoIterator<Item = L>,
        rows: &[R],
    ) -> Result<Self, MatrixShapeError>
    where
        R: AsRef<[W]>,
        W: PartialEq,
    {
        let mut graph = Self::new(kind);
        for (position, label) in labels.into_iter().enumerate() {
            if !graph.insert_vertex(label) {
                return Err(MatrixShapeError::DuplicateLabel(position));
            }
        }
        let size = graph.vertex_count();
        if rows.len() != size {
            return Err(MatrixShapeError::RowCount {
                expected: size,
                found: rows.len(),
            });
        }
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != size {
                return Err(MatrixShapeError::ColumnCount {
                    row,
                    expected: size,
                    found: cells.len(),
                });
            }
        }
        let absent = W::default();
        for (row, cells) in rows.iter().enumerate() {
            for (col, weight) in cells.as_ref().iter().enumerate() {
                if *weight != absent {
                    graph.insert_arc_at(row, col, weight.clone());
                }
            }
        }
        Ok(graph)
    }

    /// Adds a vertex labelled `label`.  Returns false, leaving the graph
    /// unchanged, if the label is already present.
    pub fn insert_vertex(&mut self, label: L) -> bool {
        let Some(index) = self.vertices.insert(label) else {
            debug!("vertex already present");
            return false;
        };
        self.matrix.push_row_and_column();
        debug_assert_eq!(self.matrix.size(), self.vertices.len());
        trace!(index, vertices = self.vertices.len(), "inserted vertex");
        true
    }

    /// Removes the vertex labelled `label` together with every arc into or
    /// out of it.  Returns false if the label is absent.
    ///
    /// Vertices after the removed one move down one position.
    pub fn delete_vertex(&mut self, label: &L) -> bool {
        let Some(index) = self.vertices.locate(label) else {
            debug!(label = ?label, "delete of absent vertex");
            return false;
        };
        let cleared = self.matrix.clear_row_and_column(index);
        self.entry_count -= cleared;
        self.matrix.remove_row_and_column(index);
        self.vertices.remove(label);
        if self.vertices.is_empty() {
            debug_assert_eq!(self.entry_count, 0);
            self.matrix = AdjacencyMatrix::new();
        }
        debug_assert_eq!(self.matrix.size(), self.vertices.len());
        trace!(
            index,
            cleared,
            vertices = self.vertices.len(),
            entries = self.entry_count,
            "deleted vertex"
        );
        true
    }

    /// Adds the arc `from -> to` (and `to -> from` for undirected kinds).
    /// Returns false if either endpoint is absent.  A cell that already
    /// holds an arc keeps its existing weight.
    pub fn insert_arc(&mut self, from: &L, to: &L, weight: W) -> bool {
        let Some((i, j)) = self.locate_pair(from, to) else {
            debug!(from = ?from, to = ?to, "insert of arc with absent endpoint");
            return false;
        };
        self.insert_arc_at(i, j, weight);
        true
    }

    fn insert_arc_at(&mut self, i: usize, j: usize, weight: W) {
        let weight = if self.kind.is_network() {
            weight
        } else {
            W::default()
        };
        let mut added = 0;
        if self.matrix.insert_if_vacant(i, j, weight.clone()) {
            added += 1;
        }
        if !self.kind.is_directed() && i != j && self.matrix.insert_if_vacant(j, i, weight) {
            added += 1;
        }
        self.entry_count += added;
        trace!(from = i, to = j, added, entries = self.entry_count, "inserted arc");
    }

    /// Removes the arc `from -> to` (and `to -> from` for undirected kinds).
    /// Returns false if either endpoint is absent; removing an arc that does
    /// not exist returns true and changes nothing.
    pub fn delete_arc(&mut self, from: &L, to: &L) -> bool {
        let Some((i, j)) = self.locate_pair(from, to) else {
            debug!(from = ?from, to = ?to, "delete of arc with absent endpoint");
            return false;
        };
        let mut removed = 0;
        if self.matrix.remove(i, j).is_some() {
            removed += 1;
        }
        if !self.kind.is_directed() && i != j && self.matrix.remove(j, i).is_some() {
            removed += 1;
        }
        self.entry_count -= removed;
        trace!(from = i, to = j, removed, entries = self.entry_count, "deleted arc");
        true
    }

    /// Removes every vertex and arc, keeping the kind.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.matrix = AdjacencyMatrix::new();
        self.entry_count = 0;
    }
}
