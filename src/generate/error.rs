use thiserror::Error;

use crate::graph::GraphError;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum GenerateError {
    #[error("average degree {0} does not give a valid edge count")]
    InvalidAverageDegree(f64),
    #[error("{edges} edges were requested, but {order} nodes cannot hold a loop-free edge")]
    TooFewNodes { order: usize, edges: usize },
    #[error("{requested} edges were requested, but {order} nodes hold at most {max}")]
    TooManyEdges {
        order: usize,
        requested: usize,
        max: usize,
    },
    #[error("edge weight {0} cannot be represented by the graph's weight type")]
    InvalidWeight(f64),
    /// The graph's own error, passed through as is. Only the enclosing type differs.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
