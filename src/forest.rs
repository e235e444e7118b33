//! Depth-first spanning forests in first-child/next-sibling form.
//!
//! Each tree node records its vertex label, its first child and its next
//! sibling.  Nodes live in a single arena owned by the forest and refer to
//! each other by [`ForestNodeId`], so the forest is independent of the graph
//! it was built from and stays valid after the graph is mutated.

use bitvec::vec::BitVec;

use crate::{
    MatrixGraph,
    search::{Frame, next_unvisited},
    tracing_support::{info_span, trace},
    vertex_store::Label,
};

/// Handle to a node of a [`DepthFirstForest`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ForestNodeId(usize);

#[derive(Clone, Debug, PartialEq, Eq)]
struct ForestNode<L> {
    label: L,
    first_child: Option<ForestNodeId>,
    next_sibling: Option<ForestNodeId>,
}

/// A forest with one tree per depth-first search tree of a graph.
///
/// Roots appear in the order their components were seeded.  A root has no
/// next sibling; the trees are only connected through [`roots`](Self::roots).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepthFirstForest<L> {
    nodes: Vec<ForestNode<L>>,
    roots: Vec<ForestNodeId>,
}

impl<L> DepthFirstForest<L> {
    /// Total number of nodes across all trees.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of trees.
    pub fn tree_count(&self) -> usize {
        self.roots.len()
    }

    pub fn roots(&self) -> &[ForestNodeId] {
        &self.roots
    }

    fn node(&self, id: ForestNodeId) -> &ForestNode<L> {
        &self.nodes[id.0]
    }

    /// Panics if `id` does not belong to this forest.
    pub fn label(&self, id: ForestNodeId) -> &L {
        &self.node(id).label
    }

    pub fn first_child(&self, id: ForestNodeId) -> Option<ForestNodeId> {
        self.node(id).first_child
    }

    pub fn next_sibling(&self, id: ForestNodeId) -> Option<ForestNodeId> {
        self.node(id).next_sibling
    }

    /// Iterates over the children of `id` in discovery order.
    pub fn children(&self, id: ForestNodeId) -> impl Iterator<Item = ForestNodeId> + '_ {
        std::iter::successors(self.first_child(id), move |&child| self.next_sibling(child))
    }

    /// Iterates over the subtree rooted at `root` in preorder.
    pub fn preorder(&self, root: ForestNodeId) -> impl Iterator<Item = ForestNodeId> + '_ {
        let mut stack = vec![root];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            if let Some(sibling) = self.next_sibling(id).filter(|_| id != root) {
                stack.push(sibling);
            }
            if let Some(child) = self.first_child(id) {
                stack.push(child);
            }
            Some(id)
        })
    }

    fn push_node(&mut self, label: L) -> ForestNodeId {
        let id = ForestNodeId(self.nodes.len());
        self.nodes.push(ForestNode {
            label,
            first_child: None,
            next_sibling: None,
        });
        id
    }
}

/// Per-level state while building a tree: the descent frame plus the tree
/// node for the frame's vertex and the most recently attached child.
struct BuildFrame {
    frame: Frame,
    node: ForestNodeId,
    last_child: Option<ForestNodeId>,
}

impl<L: Label, W> MatrixGraph<L, W> {
    /// Builds the depth-first spanning forest of this graph.
    ///
    /// Discovery order is the same as [`dfs`](Self::dfs): the first
    /// neighbor discovered from a vertex becomes its first child, and each
    /// later neighbor discovered from the same vertex becomes the next
    /// sibling of the previous one.
    pub fn depth_first_forest(&self) -> DepthFirstForest<L> {
        let _span = info_span!("depth_first_forest", vertices = self.vertex_count()).entered();
        let mut forest = DepthFirstForest {
            nodes: Vec::with_capacity(self.vertex_count()),
            roots: Vec::new(),
        };
        let labels: Vec<&L> = self.vertices().collect();
        let mut visited = BitVec::repeat(false, labels.len());
        let mut stack: Vec<BuildFrame> = Vec::new();
        let mut next_seed = 0;

        while let Some(seed) = next_unvisited(&visited, next_seed) {
            next_seed = seed + 1;
            visited.set(seed, true);
            let root = forest.push_node(labels[seed].clone());
            forest.roots.push(root);
            stack.push(BuildFrame {
                frame: Frame::new(seed),
                node: root,
                last_child: None,
            });

            while let Some(top) = stack.last_mut() {
                let Some(neighbor) = top.frame.advance(self) else {
                    stack.pop();
                    continue;
                };
                if visited[neighbor] {
                    continue;
                }
                visited.set(neighbor, true);
                let child = forest.push_node(labels[neighbor].clone());
                match top.last_child {
                    None => forest.nodes[top.node.0].first_child = Some(child),
                    Some(previous) => forest.nodes[previous.0].next_sibling = Some(child),
                }
                top.last_child = Some(child);
                stack.push(BuildFrame {
                    frame: Frame::new(neighbor),
                    node: child,
                    last_child: None,
                });
            }
        }

        trace!(
            trees = forest.tree_count(),
            nodes = forest.len(),
            "built depth-first forest"
        );
        forest
    }
}
