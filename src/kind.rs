use std::{fmt, str::FromStr};

use crate::error::GraphKindError;

/// Whether arcs are one-way or mirrored.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Directedness {
    Directed,
    Undirected,
}

impl Directedness {
    pub fn is_directed(&self) -> bool {
        matches!(self, Directedness::Directed)
    }
}

/// The four supported graph kinds.  A kind is fixed when a graph is created
/// and decides two things for every later operation: whether an arc is
/// mirrored into the transposed cell (undirected kinds) and whether the
/// weight carried by an arc is meaningful (network kinds).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum GraphKind {
    /// Directed, unweighted.  Code `0`, short name `DG`.
    DirectedGraph,
    /// Directed, weighted.  Code `1`, short name `DN`.
    DirectedNetwork,
    /// Undirected, unweighted.  Code `2`, short name `UDG`.
    UndirectedGraph,
    /// Undirected, weighted.  Code `3`, short name `UDN`.
    UndirectedNetwork,
}

impl GraphKind {
    pub const ALL: [GraphKind; 4] = [
        GraphKind::DirectedGraph,
        GraphKind::DirectedNetwork,
        GraphKind::UndirectedGraph,
        GraphKind::UndirectedNetwork,
    ];

    pub fn directedness(&self) -> Directedness {
        match self {
            GraphKind::DirectedGraph | GraphKind::DirectedNetwork => Directedness::Directed,
            GraphKind::UndirectedGraph | GraphKind::UndirectedNetwork => Directedness::Undirected,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directedness().is_directed()
    }

    /// Returns true if arcs of this kind carry a meaningful weight.
    pub fn is_network(&self) -> bool {
        matches!(self, GraphKind::DirectedNetwork | GraphKind::UndirectedNetwork)
    }

    /// The numeric code of this kind.
    pub fn code(&self) -> i32 {
        match self {
            GraphKind::DirectedGraph => 0,
            GraphKind::DirectedNetwork => 1,
            GraphKind::UndirectedGraph => 2,
            GraphKind::UndirectedNetwork => 3,
        }
    }

    /// The conventional short name of this kind.
    pub fn short_name(&self) -> &'static str {
        match self {
            GraphKind::DirectedGraph => "DG",
            GraphKind::DirectedNetwork => "DN",
            GraphKind::UndirectedGraph => "UDG",
            GraphKind::UndirectedNetwork => "UDN",
        }
    }
}

impl TryFrom<i32> for GraphKind {
    type Error = GraphKindError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        GraphKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or(GraphKindError::UnknownCode(code))
    }
}

impl FromStr for GraphKind {
    type Err = GraphKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GraphKind::ALL
            .into_iter()
            .find(|kind| kind.short_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GraphKindError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
