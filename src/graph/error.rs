use thiserror::Error;

use crate::graph::Edge;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum GraphError {
    #[error("node {0} is not in the graph")]
    MissingNode(usize),
    #[error("edge {0:?} is not in the graph")]
    MissingEdge(Edge),
    #[error("edge {0:?} is already in the graph")]
    DuplicateEdge(Edge),
    #[error("node {0} cannot be connected to itself")]
    SelfLoop(usize),
}
