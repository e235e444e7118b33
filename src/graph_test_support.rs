use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::prelude::*;
use crate::tracing_support::{info_span, init_tracing};

impl Arbitrary for GraphKind {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&GraphKind::ALL).unwrap_or(&GraphKind::DirectedGraph)
    }
}

/// A randomly populated graph over small integer labels.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: MatrixGraph<u8, u8>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20; // Limit size for testing
        let num_arcs = usize::arbitrary(g) % 50;
        let num_deletions = usize::arbitrary(g) % 5;

        let mut graph = MatrixGraph::new(GraphKind::arbitrary(g));
        for label in 0..num_vertices {
            graph.insert_vertex(label as u8);
        }
        if num_vertices > 0 {
            for _ in 0..num_arcs {
                let from = (usize::arbitrary(g) % num_vertices) as u8;
                let to = (usize::arbitrary(g) % num_vertices) as u8;
                graph.insert_arc(&from, &to, u8::arbitrary(g).max(1));
            }
            for _ in 0..num_deletions {
                let label = (usize::arbitrary(g) % num_vertices) as u8;
                graph.delete_vertex(&label);
            }
        }

        ArbGraph { graph }
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Converts string literals into owned labels.
pub fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Labels `V1` through `Vn`.
pub fn numbered(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("V{i}")).collect()
}

/// Checks the internal consistency of a graph.
pub fn check_graph_consistency<L, W>(graph: &MatrixGraph<L, W>)
where
    L: Label,
    W: PartialEq + Debug,
{
    init_tracing();
    let _span = info_span!("check_graph_consistency").entered();

    let matrix = graph.matrix();
    assert_eq!(matrix.size(), graph.vertex_count());
    assert_eq!(matrix.len(), graph.entry_count());
    assert_eq!(graph.is_empty(), graph.vertex_count() == 0);
    assert!(!has_duplicates(graph.vertices()));

    for (index, label) in graph.vertices().enumerate() {
        assert_eq!(graph.locate_vertex(label), Some(index));
        assert_eq!(graph.vertex(index), Some(label));

        let expected: Vec<_> = matrix
            .entries_in_row(index)
            .map(|(col, _)| graph.vertex(col))
            .collect();
        let actual: Vec<_> = graph.neighbors(label).map(Some).collect();
        assert_eq!(actual, expected);
    }

    if graph.is_directed() {
        assert_eq!(graph.edge_count(), matrix.len());
    } else {
        assert!(matrix.is_symmetric(), "undirected matrix is not symmetric");
        let upper = matrix.iter().filter(|(row, col, _)| row <= col).count();
        assert_eq!(graph.edge_count(), upper);
    }

    // If there are arcs, there must be vertices
    assert!(graph.vertex_count() > 0 || graph.edge_count() == 0);
}
