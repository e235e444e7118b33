use std::fmt::{Debug, Formatter};

use crate::{MatrixGraph, vertex_store::Label};

struct ArcTag<'a, L>(&'a L, &'a L, bool);

impl<'a, L: Debug> Debug for ArcTag<'a, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.2 {
            write!(f, "{:?} -> {:?}", self.0, self.1)
        } else {
            write!(f, "{:?} -- {:?}", self.0, self.1)
        }
    }
}

struct ArcDebug<'a, L, W> {
    graph: &'a MatrixGraph<L, W>,
}

impl<'a, L, W> Debug for ArcDebug<'a, L, W>
where
    L: Label,
    W: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let directed = self.graph.is_directed();
        let show_weights = self.graph.kind().is_network();
        let arcs = self
            .graph
            .matrix()
            .iter()
            .filter(|(row, col, _)| directed || row <= col)
            .filter_map(|(row, col, weight)| {
                let from = self.graph.vertex(row)?;
                let to = self.graph.vertex(col)?;
                Some((ArcTag(from, to, directed), weight))
            });
        if show_weights {
            f.debug_map().entries(arcs).finish()
        } else {
            f.debug_set().entries(arcs.map(|(tag, _)| tag)).finish()
        }
    }
}

/// Shows the kind, the vertices in position order, and each arc once.
/// Undirected edges are written `a -- b` with the lower position first;
/// arcs are written `a -> b`.  Weights are shown only for network kinds.
impl<L, W> Debug for MatrixGraph<L, W>
where
    L: Label,
    W: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatrixGraph")
            .field("kind", &self.kind())
            .field("vertices", &self.vertices().collect::<Vec<_>>())
            .field("arcs", &ArcDebug { graph: self })
            .finish()
    }
}
