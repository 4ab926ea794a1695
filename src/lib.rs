//! Random and simple network models: Erdős–Rényi graphs, cliques, stars, chains and rings.
//!
//! The generators work on any [`graph::UndirectedGraph`] and draw from any
//! [`rng::RandomSource`]. [`graph::MatrixGraph`] and `oorandom` generators are provided.
pub mod config;
pub mod generate;
pub mod graph;
pub mod rng;
pub mod util;
