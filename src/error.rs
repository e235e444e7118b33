/// Error returned when a graph is requested with a kind outside the four
/// supported ones.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphKindError {
    #[error("unsupported graph kind code: {0}")]
    UnknownCode(i32),
    #[error("unsupported graph kind name: {0:?}")]
    UnknownName(String),
}

/// Error returned by [`MatrixGraph::from_weight_matrix`](crate::MatrixGraph::from_weight_matrix)
/// when the literal matrix does not describe a square table over the given
/// labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixShapeError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} columns, expected {expected}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("label at position {0} duplicates an earlier label")]
    DuplicateLabel(usize),
}
