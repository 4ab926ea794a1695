mod erdos_renyi;
mod error;
mod simple;

pub use erdos_renyi::{
    edge_count, erdos_renyi_by_degree, erdos_renyi_by_degree_weighted,
    erdos_renyi_by_probability, erdos_renyi_by_probability_weighted, max_edge_count,
};
pub use error::GenerateError;
pub use simple::{chain, clique, ring, star};

use crate::graph::MatrixGraph;

/// A recipe for building a weighted graph from scratch.
pub trait Generate<Ew> {
    /// Generates a fresh graph with edge weights Ew.
    fn generate(&self) -> Result<MatrixGraph<Ew>, GenerateError>;
}
