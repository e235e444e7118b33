//! Graphs stored as dense adjacency matrices.
//!
//! A [`MatrixGraph`] is one of four [`GraphKind`]s (directed or undirected,
//! weighted or not) over vertex labels of any [`Label`] type.  Vertices and
//! arcs are addressed by label; traversal and the depth-first spanning
//! forest live in [`search`] and [`forest`].

pub mod adjacency_matrix;
pub mod error;
pub mod forest;
pub mod graph;
pub mod kind;
pub mod prelude;
pub mod search;
pub mod tracing_support;
pub mod vertex_store;

mod debug;
#[cfg(test)]
mod graph_test_support;

pub use error::{GraphKindError, MatrixShapeError};
pub use forest::{DepthFirstForest, ForestNodeId};
pub use graph::MatrixGraph;
pub use kind::{Directedness, GraphKind};
pub use search::{BfsIterator, DfsIterator};
pub use vertex_store::Label;
