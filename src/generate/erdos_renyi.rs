//! Erdős–Rényi random graphs.
//!
//! Two flavours are provided. [`erdos_renyi_by_degree`] places an exact number of edges,
//! derived from a target average degree, by drawing node pairs until they are usable.
//! [`erdos_renyi_by_probability`] tosses one coin per node pair.

use num_traits::ToPrimitive;
use tracing::debug;

use super::GenerateError;
use crate::graph::UndirectedGraph;
use crate::rng::RandomSource;
use crate::util::PresentVal;

/// Returns the number of edges needed for `order` nodes to reach `average_degree`,
/// rounded up so the realized average degree is never below the requested one.
pub fn edge_count(order: usize, average_degree: f64) -> Result<usize, GenerateError> {
    if !average_degree.is_finite() || average_degree < 0.0 {
        return Err(GenerateError::InvalidAverageDegree(average_degree));
    }

    (order as f64 * average_degree / 2.0)
        .ceil()
        .to_usize()
        .ok_or(GenerateError::InvalidAverageDegree(average_degree))
}

/// Returns the number of edges in a complete graph with `order` nodes, saturating at `usize::MAX`.
pub fn max_edge_count(order: usize) -> usize {
    if order < 2 {
        0
    } else if order % 2 == 0 {
        (order / 2).saturating_mul(order - 1)
    } else {
        order.saturating_mul((order - 1) / 2)
    }
}

/// Same as [`erdos_renyi_by_degree_weighted`], with every edge carrying the present weight.
pub fn erdos_renyi_by_degree<G, R>(
    graph: &mut G,
    order: usize,
    average_degree: f64,
    rng: &mut R,
) -> Result<(), GenerateError>
where
    G: UndirectedGraph,
    G::EdgeWeightType: PresentVal + Clone,
    R: RandomSource,
{
    erdos_renyi_by_degree_weighted(graph, order, average_degree, rng, PresentVal::present())
}

/// Clears `graph` to `order` nodes and places `edge_count(order, average_degree)` edges
/// between uniformly drawn node pairs, redrawing loops and already connected pairs.
///
/// The request is checked before the graph is touched: asking for edges on fewer than two
/// nodes, or for more edges than a complete graph has, returns an error instead of drawing
/// forever.
///
/// Every placed edge is present whatever its weight, so `0` and `false` are stored as is
/// instead of reading as a missing edge.
pub fn erdos_renyi_by_degree_weighted<G, R>(
    graph: &mut G,
    order: usize,
    average_degree: f64,
    rng: &mut R,
    weight: G::EdgeWeightType,
) -> Result<(), GenerateError>
where
    G: UndirectedGraph,
    G::EdgeWeightType: Clone,
    R: RandomSource,
{
    let edges = edge_count(order, average_degree)?;
    if edges > 0 && order < 2 {
        return Err(GenerateError::TooFewNodes { order, edges });
    }
    let max = max_edge_count(order);
    if edges > max {
        return Err(GenerateError::TooManyEdges {
            order,
            requested: edges,
            max,
        });
    }

    debug!(order, average_degree, edges, "placing erdos-renyi edges");
    graph.clear(order);

    let mut rejected = 0_usize;
    for _ in 0..edges {
        let edge = loop {
            let i = rng.next_index(order);
            let j = rng.next_index(order);
            if i != j && !graph.has_edge((i, j)) {
                break (i, j);
            }
            rejected += 1;
        };
        graph.change_edge(edge, weight.clone())?;
    }

    debug!(edges, rejected, "erdos-renyi edges placed");
    Ok(())
}

/// Same as [`erdos_renyi_by_probability_weighted`], with every edge carrying the present weight.
pub fn erdos_renyi_by_probability<G, R>(
    graph: &mut G,
    probability: f64,
    rng: &mut R,
) -> Result<(), GenerateError>
where
    G: UndirectedGraph,
    G::EdgeWeightType: PresentVal + Clone,
    R: RandomSource,
{
    erdos_renyi_by_probability_weighted(graph, probability, rng, PresentVal::present())
}

/// Clears the edges of `graph` and connects every node pair independently with `probability`.
///
/// The node count is taken from the graph. Pairs are visited as `(0, 1), (0, 2), .., (1, 2), ..`
/// with exactly one draw each. `probability` is not clamped.
///
/// As with [`erdos_renyi_by_degree_weighted`], a weight of `0` or `false` still marks the edge
/// as present.
pub fn erdos_renyi_by_probability_weighted<G, R>(
    graph: &mut G,
    probability: f64,
    rng: &mut R,
    weight: G::EdgeWeightType,
) -> Result<(), GenerateError>
where
    G: UndirectedGraph,
    G::EdgeWeightType: Clone,
    R: RandomSource,
{
    let order = graph.order();
    graph.clear(order);

    for i in 0..order {
        for j in (i + 1)..order {
            if rng.next_unit() < probability {
                graph.change_edge((i, j), weight.clone())?;
            }
        }
    }

    debug!(
        order,
        probability,
        edges = graph.size(),
        "erdos-renyi edges tossed"
    );
    Ok(())
}
