use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{edge_weight, Fix};
use crate::generate::{
    erdos_renyi_by_degree_weighted, erdos_renyi_by_probability_weighted, Generate, GenerateError,
};
use crate::graph::MatrixGraph;
use crate::rng::{os_random_seed, rng64};
use crate::util::PresentVal;

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ErdosRenyiDegreeGeneration {
    pub seed: u64,
    pub order: usize,
    pub average_degree: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_weight: Option<f64>,
}

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UnseededErdosRenyiDegreeGeneration {
    pub order: usize,
    pub average_degree: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_weight: Option<f64>,
}

impl Fix<ErdosRenyiDegreeGeneration> for UnseededErdosRenyiDegreeGeneration {
    fn to_fixed(&self) -> ErdosRenyiDegreeGeneration {
        ErdosRenyiDegreeGeneration {
            seed: (os_random_seed() >> 64) as u64,
            order: self.order,
            average_degree: self.average_degree,
            edge_weight: self.edge_weight,
        }
    }
}

impl<Ew> Generate<Ew> for ErdosRenyiDegreeGeneration
where
    Ew: PresentVal + num_traits::NumCast + Clone,
{
    fn generate(&self) -> Result<MatrixGraph<Ew>, GenerateError> {
        let weight = edge_weight(self.edge_weight)?;
        debug!(seed = self.seed, "generating erdos-renyi graph by degree");

        let mut graph = MatrixGraph::default();
        erdos_renyi_by_degree_weighted(
            &mut graph,
            self.order,
            self.average_degree,
            &mut rng64(<u128 as From<u64>>::from(self.seed)),
            weight,
        )?;
        Ok(graph)
    }
}

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ErdosRenyiProbabilityGeneration {
    pub seed: u64,
    pub order: usize,
    pub connection_probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_weight: Option<f64>,
}

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UnseededErdosRenyiProbabilityGeneration {
    pub order: usize,
    pub connection_probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_weight: Option<f64>,
}

impl Fix<ErdosRenyiProbabilityGeneration> for UnseededErdosRenyiProbabilityGeneration {
    fn to_fixed(&self) -> ErdosRenyiProbabilityGeneration {
        ErdosRenyiProbabilityGeneration {
            seed: (os_random_seed() >> 64) as u64,
            order: self.order,
            connection_probability: self.connection_probability,
            edge_weight: self.edge_weight,
        }
    }
}

impl<Ew> Generate<Ew> for ErdosRenyiProbabilityGeneration
where
    Ew: PresentVal + num_traits::NumCast + Clone,
{
    fn generate(&self) -> Result<MatrixGraph<Ew>, GenerateError> {
        let weight = edge_weight(self.edge_weight)?;
        debug!(seed = self.seed, "generating erdos-renyi graph by probability");

        let mut graph = MatrixGraph::with_order(self.order);
        erdos_renyi_by_probability_weighted(
            &mut graph,
            self.connection_probability,
            &mut rng64(<u128 as From<u64>>::from(self.seed)),
            weight,
        )?;
        Ok(graph)
    }
}
