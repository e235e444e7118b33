use adjmatrix::{GraphKind, GraphKindError, MatrixGraph, tracing_support::init_tracing};

struct Scenario {
    kind: GraphKind,
    matrix: Vec<Vec<i32>>,
    vertices: usize,
    edges: usize,
}

fn labels(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("V{i}")).collect()
}

fn build(kind: GraphKind, matrix: &[Vec<i32>]) -> MatrixGraph<String> {
    MatrixGraph::from_weight_matrix(kind, labels(matrix.len()), matrix).unwrap()
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            kind: GraphKind::UndirectedGraph,
            matrix: vec![
                vec![0, 1, 0, 1, 0],
                vec![1, 0, 1, 0, 1],
                vec![0, 1, 0, 1, 1],
                vec![1, 0, 1, 0, 0],
                vec![0, 1, 1, 0, 0],
            ],
            vertices: 5,
            edges: 6,
        },
        Scenario {
            kind: GraphKind::UndirectedNetwork,
            matrix: vec![
                vec![0, 10, 0, 11, 0],
                vec![10, 0, 12, 0, 15],
                vec![0, 12, 0, 14, 13],
                vec![11, 0, 14, 0, 0],
                vec![0, 15, 13, 0, 0],
            ],
            vertices: 5,
            edges: 6,
        },
        Scenario {
            kind: GraphKind::DirectedGraph,
            matrix: vec![
                vec![0, 1, 1, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 1],
                vec![1, 0, 0, 0],
            ],
            vertices: 4,
            edges: 4,
        },
        Scenario {
            kind: GraphKind::DirectedNetwork,
            matrix: vec![
                vec![0, 11, 12, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 13],
                vec![14, 0, 0, 0],
            ],
            vertices: 4,
            edges: 4,
        },
    ]
}

fn eight_vertex_matrix() -> Vec<Vec<i32>> {
    vec![
        vec![0, 1, 1, 0, 0, 0, 0, 0],
        vec![1, 0, 0, 1, 1, 0, 0, 0],
        vec![1, 0, 0, 0, 0, 1, 1, 0],
        vec![0, 1, 0, 0, 0, 0, 0, 1],
        vec![0, 1, 0, 0, 0, 0, 0, 1],
        vec![0, 0, 1, 0, 0, 0, 1, 0],
        vec![0, 0, 1, 0, 0, 1, 0, 0],
        vec![0, 0, 0, 1, 1, 0, 0, 0],
    ]
}

// The lower triangle disagrees with the upper one; only the upper cells
// take effect.
fn asymmetric_eight_vertex_matrix() -> Vec<Vec<i32>> {
    vec![
        vec![0, 11, 12, 0, 0, 0, 0, 0],
        vec![11, 0, 0, 13, 14, 0, 0, 0],
        vec![12, 0, 0, 0, 0, 15, 16, 0],
        vec![0, 1, 0, 0, 0, 0, 0, 17],
        vec![0, 1, 0, 0, 0, 0, 0, 18],
        vec![0, 0, 1, 0, 0, 0, 1, 0],
        vec![0, 0, 1, 0, 0, 1, 0, 0],
        vec![0, 0, 0, 1, 1, 0, 0, 0],
    ]
}

fn dfs_labels(graph: &MatrixGraph<String>) -> Vec<String> {
    let mut order = Vec::new();
    graph.depth_first_traverse(|label| order.push(label.clone()));
    order
}

fn bfs_labels(graph: &MatrixGraph<String>) -> Vec<String> {
    let mut order = Vec::new();
    graph.breadth_first_traverse(|label| order.push(label.clone()));
    order
}

#[test]
fn test_construct_by_code() {
    for code in [2, 3, 0, 1] {
        let graph = MatrixGraph::<String>::with_kind_code(code).unwrap();
        assert_eq!(graph.vertex_count(), 0);
    }
    for code in [-1, 10] {
        assert_eq!(
            MatrixGraph::<String>::with_kind_code(code).err(),
            Some(GraphKindError::UnknownCode(code))
        );
    }
}

#[test]
fn test_insert_matches_matrix() {
    init_tracing();
    for scenario in scenarios() {
        let graph = build(scenario.kind, &scenario.matrix);
        assert_eq!(graph.vertex_count(), scenario.vertices);
        assert_eq!(graph.edge_count(), scenario.edges);
        for (i, row) in scenario.matrix.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                let stored = graph.matrix().get(i, j).copied();
                match (cell, stored) {
                    (0, None) => {}
                    (0, Some(_)) => panic!("{}: unexpected arc at ({i}, {j})", scenario.kind),
                    (_, None) => panic!("{}: missing arc at ({i}, {j})", scenario.kind),
                    (weight, Some(stored)) if scenario.kind.is_network() => {
                        assert_eq!(stored, weight, "{}: weight at ({i}, {j})", scenario.kind)
                    }
                    (_, Some(_)) => {}
                }
            }
        }
    }
}

#[test]
fn test_delete_every_arc() {
    init_tracing();
    for scenario in scenarios() {
        let mut graph = build(scenario.kind, &scenario.matrix);
        let names = labels(scenario.vertices);
        for (i, row) in scenario.matrix.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell > 0 {
                    assert!(graph.delete_arc(&names[i], &names[j]));
                }
            }
        }
        assert!(graph.matrix().is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertex_count(), scenario.vertices);
    }
}

#[test]
fn test_delete_every_vertex() {
    init_tracing();
    for scenario in scenarios() {
        let mut graph = build(scenario.kind, &scenario.matrix);
        for name in labels(scenario.vertices) {
            assert!(graph.delete_vertex(&name));
        }
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.matrix().size(), 0);
        assert_eq!(graph.vertices().len(), 0);
    }
}

#[test]
fn test_depth_first_orders() {
    let five = scenarios().swap_remove(0).matrix;
    let five_weighted = vec![
        vec![0, 11, 0, 12, 0],
        vec![11, 0, 13, 0, 14],
        vec![0, 13, 0, 15, 16],
        vec![12, 0, 15, 0, 0],
        vec![0, 14, 16, 0, 0],
    ];
    assert_eq!(
        dfs_labels(&build(GraphKind::UndirectedGraph, &five)),
        labels(5)
    );
    assert_eq!(
        dfs_labels(&build(GraphKind::UndirectedNetwork, &five_weighted)),
        labels(5)
    );

    let expected = ["V1", "V2", "V4", "V8", "V5", "V3", "V6", "V7"];
    assert_eq!(
        dfs_labels(&build(GraphKind::UndirectedGraph, &eight_vertex_matrix())),
        expected
    );
    assert_eq!(
        dfs_labels(&build(
            GraphKind::UndirectedNetwork,
            &asymmetric_eight_vertex_matrix()
        )),
        expected
    );
}

#[test]
fn test_breadth_first_orders() {
    assert_eq!(
        bfs_labels(&build(GraphKind::UndirectedGraph, &eight_vertex_matrix())),
        labels(8)
    );
    assert_eq!(
        bfs_labels(&build(
            GraphKind::UndirectedNetwork,
            &asymmetric_eight_vertex_matrix()
        )),
        labels(8)
    );
}

#[test]
fn test_asymmetric_input_keeps_first_weight() {
    let graph = build(
        GraphKind::UndirectedNetwork,
        &asymmetric_eight_vertex_matrix(),
    );
    let names = labels(8);
    assert_eq!(graph.weight(&names[3], &names[1]), Some(&13));
    assert_eq!(graph.weight(&names[1], &names[3]), Some(&13));
    assert_eq!(graph.weight(&names[6], &names[5]), Some(&1));
    assert_eq!(graph.edge_count(), 9);
}

#[test]
fn test_forest_matches_traversal() {
    let graph = build(GraphKind::UndirectedGraph, &eight_vertex_matrix());
    let forest = graph.depth_first_forest();
    assert_eq!(forest.tree_count(), 1);
    let root = forest.roots()[0];
    let preorder: Vec<String> = forest
        .preorder(root)
        .map(|id| forest.label(id).clone())
        .collect();
    assert_eq!(preorder, dfs_labels(&graph));
    let children: Vec<&String> = forest.children(root).map(|id| forest.label(id)).collect();
    assert_eq!(children, [&"V2".to_string(), &"V3".to_string()]);
}

#[test]
fn test_vertex_deletion_shifts_positions() {
    let mut graph = build(GraphKind::DirectedGraph, &scenarios()[2].matrix);
    let names = labels(4);
    assert!(graph.delete_vertex(&names[0]));
    assert_eq!(graph.locate_vertex(&names[2]), Some(1));
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_arc(&names[2], &names[3]));
    assert_eq!(dfs_labels(&graph), ["V2", "V3", "V4"]);
}

#[cfg(feature = "slow_tests")]
#[test]
fn test_large_graph_teardown() {
    init_tracing();
    let size = 400;
    for kind in GraphKind::ALL {
        let mut graph: MatrixGraph<usize> = MatrixGraph::new(kind);
        for label in 0..size {
            graph.insert_vertex(label);
        }
        for label in 0..size {
            graph.insert_arc(&label, &((label * 7 + 3) % size), 1);
            graph.insert_arc(&label, &((label + 1) % size), 1);
        }
        assert_eq!(graph.dfs().count(), size);
        assert_eq!(graph.bfs().count(), size);
        for label in (0..size).rev().step_by(2) {
            assert!(graph.delete_vertex(&label));
        }
        assert_eq!(graph.vertex_count(), size / 2);
        assert_eq!(graph.matrix().len(), graph.entry_count());
        for label in (0..size).step_by(2) {
            assert!(graph.delete_vertex(&label));
        }
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
