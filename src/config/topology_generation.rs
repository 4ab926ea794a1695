use serde::{Deserialize, Serialize};

use crate::generate::{chain, clique, ring, star, Generate, GenerateError};
use crate::graph::MatrixGraph;
use crate::util::PresentVal;

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    Clique,
    Star,
    Chain,
    Ring,
}

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TopologyGeneration {
    pub topology: Topology,
    pub order: usize,
}

impl<Ew: PresentVal + Clone> Generate<Ew> for TopologyGeneration {
    fn generate(&self) -> Result<MatrixGraph<Ew>, GenerateError> {
        let mut graph = MatrixGraph::with_order(self.order);
        match self.topology {
            Topology::Clique => clique(&mut graph)?,
            Topology::Star => star(&mut graph)?,
            Topology::Chain => chain(&mut graph)?,
            Topology::Ring => ring(&mut graph)?,
        }

        Ok(graph)
    }
}
