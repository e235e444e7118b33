//! Depth-first and breadth-first traversal.
//!
//! Both traversals cover every vertex exactly once.  They seed from vertices
//! in position order, so a graph with several components is covered one
//! component at a time, and within a vertex they take neighbors in
//! ascending position order.  Visited state lives in the iterator, never in
//! the graph, so independent traversals do not interfere.

use std::collections::VecDeque;

use bitvec::vec::BitVec;
use derivative::Derivative;

use crate::{MatrixGraph, tracing_support::info_span, vertex_store::Label};

/// One level of an in-progress depth-first descent: the vertex being
/// expanded and the last neighbor position examined.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame {
    pub(crate) vertex: usize,
    pub(crate) cursor: Option<usize>,
}

impl Frame {
    pub(crate) fn new(vertex: usize) -> Self {
        Frame {
            vertex,
            cursor: None,
        }
    }

    /// Advances to the next neighbor of this frame's vertex.
    pub(crate) fn advance<L: Label, W>(&mut self, graph: &MatrixGraph<L, W>) -> Option<usize> {
        let next = match self.cursor {
            None => graph.first_adjacent_index(self.vertex),
            Some(after) => graph.next_adjacent_index(self.vertex, after),
        }?;
        self.cursor = Some(next);
        Some(next)
    }
}

/// Returns the first unvisited position at or after `start`.
pub(crate) fn next_unvisited(visited: &BitVec, start: usize) -> Option<usize> {
    visited
        .get(start..)
        .and_then(|rest| rest.first_zero())
        .map(|offset| start + offset)
}

/// Iterator over vertex positions in depth-first order.
///
/// Equivalent to the recursive formulation (visit a vertex, then recurse
/// into each unvisited neighbor in turn) but keeps its own stack.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct DfsIterator<'g, L, W> {
    graph: &'g MatrixGraph<L, W>,
    visited: BitVec,
    stack: Vec<Frame>,
    next_seed: usize,
}

impl<'g, L: Label, W> DfsIterator<'g, L, W> {
    pub fn new(graph: &'g MatrixGraph<L, W>) -> Self {
        Self {
            graph,
            visited: BitVec::repeat(false, graph.vertex_count()),
            stack: Vec::new(),
            next_seed: 0,
        }
    }

    /// Yields positions rather than labels.
    pub fn indices(self) -> impl Iterator<Item = usize> + 'g {
        let mut this = self;
        std::iter::from_fn(move || this.next_index())
    }

    fn next_index(&mut self) -> Option<usize> {
        while let Some(frame) = self.stack.last_mut() {
            match frame.advance(self.graph) {
                Some(neighbor) if !self.visited[neighbor] => {
                    self.visited.set(neighbor, true);
                    self.stack.push(Frame::new(neighbor));
                    return Some(neighbor);
                }
                Some(_) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        let seed = next_unvisited(&self.visited, self.next_seed)?;
        self.next_seed = seed + 1;
        self.visited.set(seed, true);
        self.stack.push(Frame::new(seed));
        Some(seed)
    }
}

impl<'g, L: Label, W> Iterator for DfsIterator<'g, L, W> {
    type Item = &'g L;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.next_index().and_then(|index| graph.vertex(index))
    }
}

/// Iterator over vertex positions in breadth-first order.
///
/// A vertex is marked visited when it is discovered, and vertices are
/// yielded in discovery order, which is level order within each component.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct BfsIterator<'g, L, W> {
    graph: &'g MatrixGraph<L, W>,
    visited: BitVec,
    queue: VecDeque<usize>,
    next_seed: usize,
}

impl<'g, L: Label, W> BfsIterator<'g, L, W> {
    pub fn new(graph: &'g MatrixGraph<L, W>) -> Self {
        Self {
            graph,
            visited: BitVec::repeat(false, graph.vertex_count()),
            queue: VecDeque::new(),
            next_seed: 0,
        }
    }

    /// Yields positions rather than labels.
    pub fn indices(self) -> impl Iterator<Item = usize> + 'g {
        let mut this = self;
        std::iter::from_fn(move || this.next_index())
    }

    fn next_index(&mut self) -> Option<usize> {
        if self.queue.is_empty() {
            let seed = next_unvisited(&self.visited, self.next_seed)?;
            self.next_seed = seed + 1;
            self.visited.set(seed, true);
            self.queue.push_back(seed);
        }
        let vertex = self.queue.pop_front()?;
        let mut frame = Frame::new(vertex);
        while let Some(neighbor) = frame.advance(self.graph) {
            if !self.visited[neighbor] {
                self.visited.set(neighbor, true);
                self.queue.push_back(neighbor);
            }
        }
        Some(vertex)
    }
}

impl<'g, L: Label, W> Iterator for BfsIterator<'g, L, W> {
    type Item = &'g L;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.next_index().and_then(|index| graph.vertex(index))
    }
}

impl<L: Label, W> MatrixGraph<L, W> {
    /// Returns an iterator over all vertices in depth-first order.
    pub fn dfs(&self) -> DfsIterator<'_, L, W> {
        DfsIterator::new(self)
    }

    /// Returns an iterator over all vertices in breadth-first order.
    pub fn bfs(&self) -> BfsIterator<'_, L, W> {
        BfsIterator::new(self)
    }

    /// Calls `visit` on every vertex in depth-first order.
    pub fn depth_first_traverse(&self, mut visit: impl FnMut(&L)) {
        let _span = info_span!("depth_first_traverse", vertices = self.vertex_count()).entered();
        for label in self.dfs() {
            visit(label);
        }
    }

    /// Calls `visit` on every vertex in breadth-first order.
    pub fn breadth_first_traverse(&self, mut visit: impl FnMut(&L)) {
        let _span = info_span!("breadth_first_traverse", vertices = self.vertex_count()).entered();
        for label in self.bfs() {
            visit(label);
        }
    }
}
