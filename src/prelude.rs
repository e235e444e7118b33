pub use crate::error::{GraphKindError, MatrixShapeError};
pub use crate::forest::{DepthFirstForest, ForestNodeId};
pub use crate::graph::MatrixGraph;
pub use crate::kind::{Directedness, GraphKind};
pub use crate::vertex_store::Label;
