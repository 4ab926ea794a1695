//! The simplest of networks. Each function expects a graph that already has the wanted
//! order, adds edges with the present weight and leaves everything else untouched.
//! Graphs with fewer than two nodes get no edges.

use tracing::trace;

use crate::graph::{GraphError, UndirectedGraph};
use crate::util::PresentVal;

/// Connects every pair of nodes.
pub fn clique<G>(graph: &mut G) -> Result<(), GraphError>
where
    G: UndirectedGraph,
    G::EdgeWeightType: PresentVal,
{
    trace!(order = graph.order(), "forming clique");
    for i in 0..graph.order() {
        for j in 0..i {
            graph.change_edge((i, j), PresentVal::present())?;
        }
    }

    Ok(())
}

/// Connects node 0, the hub, to every other node.
pub fn star<G>(graph: &mut G) -> Result<(), GraphError>
where
    G: UndirectedGraph,
    G::EdgeWeightType: PresentVal,
{
    trace!(order = graph.order(), "forming star");
    for i in 1..graph.order() {
        graph.change_edge((0, i), PresentVal::present())?;
    }

    Ok(())
}

/// Connects each node to the next one. The ends stay open.
pub fn chain<G>(graph: &mut G) -> Result<(), GraphError>
where
    G: UndirectedGraph,
    G::EdgeWeightType: PresentVal,
{
    trace!(order = graph.order(), "forming chain");
    for i in 1..graph.order() {
        graph.change_edge((i - 1, i), PresentVal::present())?;
    }

    Ok(())
}

/// A chain whose last node is connected back to node 0.
pub fn ring<G>(graph: &mut G) -> Result<(), GraphError>
where
    G: UndirectedGraph,
    G::EdgeWeightType: PresentVal,
{
    chain(graph)?;

    let order = graph.order();
    if order >= 2 {
        // With two nodes this is the chain edge again.
        graph.change_edge((order - 1, 0), PresentVal::present())?;
    }

    Ok(())
}
