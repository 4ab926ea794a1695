//! Serializable recipes for generated graphs.
//!
//! A recipe is either seeded, which makes the generated graph reproducible, or unseeded, in
//! which case [`Fix::to_fixed`] draws a seed from the operating system. Recipes are
//! distinguished by their fields alone, so no tag is needed in the YAML:
//!
//! ```yaml
//! seed: 17
//! order: 100
//! average_degree: 4.0
//! ```

mod erdos_renyi_generation;
mod topology_generation;

pub use erdos_renyi_generation::{
    ErdosRenyiDegreeGeneration, ErdosRenyiProbabilityGeneration,
    UnseededErdosRenyiDegreeGeneration, UnseededErdosRenyiProbabilityGeneration,
};
pub use topology_generation::{Topology, TopologyGeneration};

use num_traits::NumCast;
use serde::{Deserialize, Serialize};

use crate::generate::{Generate, GenerateError};
use crate::graph::MatrixGraph;
use crate::util::PresentVal;

pub trait Fix<CorrectType> {
    fn to_fixed(&self) -> CorrectType;
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum GraphCreationConfig {
    ErdosRenyiDegree(ErdosRenyiDegreeGeneration),
    UnseededErdosRenyiDegree(UnseededErdosRenyiDegreeGeneration),
    ErdosRenyiProbability(ErdosRenyiProbabilityGeneration),
    UnseededErdosRenyiProbability(UnseededErdosRenyiProbabilityGeneration),
    Topology(TopologyGeneration),
}

impl GraphCreationConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn is_seeded(&self) -> bool {
        !matches!(
            self,
            Self::UnseededErdosRenyiDegree(_) | Self::UnseededErdosRenyiProbability(_)
        )
    }
}

impl Fix<GraphCreationConfig> for GraphCreationConfig {
    fn to_fixed(&self) -> GraphCreationConfig {
        match self {
            Self::UnseededErdosRenyiDegree(er) => Self::ErdosRenyiDegree(er.to_fixed()),
            Self::UnseededErdosRenyiProbability(er) => Self::ErdosRenyiProbability(er.to_fixed()),
            seeded => seeded.clone(),
        }
    }
}

impl<Ew> Generate<Ew> for GraphCreationConfig
where
    Ew: PresentVal + NumCast + Clone,
{
    fn generate(&self) -> Result<MatrixGraph<Ew>, GenerateError> {
        match self {
            Self::ErdosRenyiDegree(er) => er.generate(),
            Self::UnseededErdosRenyiDegree(er) => er.to_fixed().generate(),
            Self::ErdosRenyiProbability(er) => er.generate(),
            Self::UnseededErdosRenyiProbability(er) => er.to_fixed().generate(),
            Self::Topology(topology) => topology.generate(),
        }
    }
}

/// Converts a configured weight into the graph's weight type.
///
/// A weight the type cannot hold is rejected, and so is a fractional weight for an integer
/// type. Truncating `0.4` would silently store `0`.
fn edge_weight<Ew: PresentVal + NumCast>(weight: Option<f64>) -> Result<Ew, GenerateError> {
    let weight = match weight {
        None => return Ok(Ew::present()),
        Some(weight) => weight,
    };

    let converted =
        <Ew as NumCast>::from(weight).ok_or(GenerateError::InvalidWeight(weight))?;
    let truncated = weight.fract() != 0.0
        && converted
            .to_f64()
            .map_or(false, |stored| stored.fract() == 0.0);
    if truncated {
        return Err(GenerateError::InvalidWeight(weight));
    }

    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UndirectedGraph;

    #[test]
    fn seeded_degree_config_parses() {
        let config = GraphCreationConfig::from_yaml_str(
            "seed: 17\norder: 10\naverage_degree: 4.0\n",
        )
        .unwrap();

        assert_eq!(
            config,
            GraphCreationConfig::ErdosRenyiDegree(ErdosRenyiDegreeGeneration {
                seed: 17,
                order: 10,
                average_degree: 4.0,
                edge_weight: None,
            })
        );
        assert!(config.is_seeded());
    }

    #[test]
    fn unseeded_probability_config_parses() {
        let config = GraphCreationConfig::from_yaml_str(
            "order: 30\nconnection_probability: 0.2\nedge_weight: 2.5\n",
        )
        .unwrap();

        assert_eq!(
            config,
            GraphCreationConfig::UnseededErdosRenyiProbability(
                UnseededErdosRenyiProbabilityGeneration {
                    order: 30,
                    connection_probability: 0.2,
                    edge_weight: Some(2.5),
                }
            )
        );
        assert!(!config.is_seeded());
    }

    #[test]
    fn topology_config_parses() {
        let config = GraphCreationConfig::from_yaml_str("topology: ring\norder: 5\n").unwrap();

        assert_eq!(
            config,
            GraphCreationConfig::Topology(TopologyGeneration {
                topology: Topology::Ring,
                order: 5,
            })
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(GraphCreationConfig::from_yaml_str("order: 5\nradius: 0.3\n").is_err());
        assert!(GraphCreationConfig::from_yaml_str("topology: torus\norder: 5\n").is_err());
    }

    #[test]
    fn fixing_draws_a_seed() {
        let config = GraphCreationConfig::from_yaml_str("order: 12\naverage_degree: 2.0\n")
            .unwrap()
            .to_fixed();

        match config {
            GraphCreationConfig::ErdosRenyiDegree(er) => {
                assert_eq!(er.order, 12);
                assert_eq!(er.average_degree, 2.0);
            }
            other => panic!("Expected a seeded config, got {:?}.", other),
        }
    }

    #[test]
    fn fixing_keeps_seeded_configs() {
        let config =
            GraphCreationConfig::from_yaml_str("topology: star\norder: 4\n").unwrap();

        assert_eq!(config.to_fixed(), config);
    }

    #[test]
    fn degree_config_generates() {
        let config = GraphCreationConfig::from_yaml_str(
            "seed: 3\norder: 10\naverage_degree: 4.0\nedge_weight: 7\n",
        )
        .unwrap();

        let graph: MatrixGraph<u32> = config.generate().unwrap();

        assert_eq!(graph.order(), 10);
        assert_eq!(graph.size(), 20);
        for edge in graph.edge_ids() {
            assert_eq!(graph.edge_weight(edge), Ok(&7));
        }
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let config = GraphCreationConfig::from_yaml_str(
            "seed: 11\norder: 40\nconnection_probability: 0.3\n",
        )
        .unwrap();

        let first: MatrixGraph<f64> = config.generate().unwrap();
        let second: MatrixGraph<f64> = config.generate().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn topology_config_generates() {
        let config = GraphCreationConfig::from_yaml_str("topology: clique\norder: 6\n").unwrap();

        let graph: MatrixGraph<usize> = config.generate().unwrap();

        assert_eq!(graph.size(), 15);
    }

    #[test]
    fn unrepresentable_weight_errors() {
        let config = GraphCreationConfig::from_yaml_str(
            "order: 6\nconnection_probability: 1.0\nedge_weight: -2.0\n",
        )
        .unwrap();

        let graph: Result<MatrixGraph<usize>, _> = config.generate();

        assert_eq!(graph, Err(GenerateError::InvalidWeight(-2.0)));
    }

    #[test]
    fn fractional_weight_for_integer_graph_errors() {
        let config = GraphCreationConfig::from_yaml_str(
            "seed: 2\norder: 5\nconnection_probability: 1.0\nedge_weight: 0.4\n",
        )
        .unwrap();

        let graph: Result<MatrixGraph<usize>, _> = config.generate();

        assert_eq!(
            graph,
            Err(GenerateError::InvalidWeight(0.4)),
            "0.4 must not be truncated to a weight of 0."
        );
    }

    #[test]
    fn fractional_weight_for_real_graph_works() {
        let config = GraphCreationConfig::from_yaml_str(
            "seed: 2\norder: 5\nconnection_probability: 1.0\nedge_weight: 0.4\n",
        )
        .unwrap();

        let graph: MatrixGraph<f32> = config.generate().unwrap();

        assert_eq!(graph.size(), 10);
        for edge in graph.edge_ids() {
            assert_eq!(graph.edge_weight(edge), Ok(&0.4_f32));
        }
    }

    #[test]
    fn zero_weight_is_stored_as_present_edge() {
        let config = GraphCreationConfig::from_yaml_str(
            "seed: 2\norder: 4\nconnection_probability: 1.0\nedge_weight: 0.0\n",
        )
        .unwrap();

        let graph: MatrixGraph<i64> = config.generate().unwrap();

        assert_eq!(graph.size(), 6, "A zero weight still marks an edge as present.");
        assert_eq!(graph.edge_weight((0, 3)), Ok(&0));
    }

    #[test]
    fn impossible_degree_errors() {
        let config =
            GraphCreationConfig::from_yaml_str("seed: 1\norder: 3\naverage_degree: 5.0\n").unwrap();

        let graph: Result<MatrixGraph<usize>, _> = config.generate();

        assert_eq!(
            graph,
            Err(GenerateError::TooManyEdges {
                order: 3,
                requested: 8,
                max: 3
            })
        );
    }
}
