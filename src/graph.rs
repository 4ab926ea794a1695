mod error;
mod matrix_graph;

pub use error::GraphError;
pub use matrix_graph::MatrixGraph;

/// An unordered pair of node ids. `(i, j)` and `(j, i)` name the same edge.
pub type Edge = (usize, usize);

/// A simple undirected graph over the node ids `0..order()`.
///
/// This is all the generators need from a container: a node count that can be
/// reset, an edge test and an edge assignment. Implementations must treat
/// `(i, j)` and `(j, i)` as the same edge.
pub trait UndirectedGraph {
    type EdgeWeightType;

    /// Returns true if there are no nodes, or false otherwise.
    fn is_empty(&self) -> bool {
        self.order() == 0
    }

    /// Returns the number of nodes in this graph.
    fn order(&self) -> usize;

    /// Returns the number of edges in this graph.
    fn size(&self) -> usize;

    /// Removes every edge and resizes the graph to hold `order` nodes.
    fn clear(&mut self, order: usize);

    /// Returns true if the edge exists, or false otherwise.
    /// Edges touching nodes outside of the graph never exist.
    fn has_edge(&self, edge: Edge) -> bool;

    /// Returns the weight of an edge.
    fn edge_weight(&self, edge: Edge) -> Result<&Self::EdgeWeightType, GraphError>;

    /// Adds a new weighted edge to the graph.
    /// Returns an error if the edge already exists, is a loop, or one of the nodes is missing.
    fn add_edge(&mut self, edge: Edge, weight: Self::EdgeWeightType) -> Result<(), GraphError>;

    /// Changes the weight of an edge to the new weight.
    /// If the edge did not exist before, it gets created in this process.
    fn change_edge(&mut self, edge: Edge, weight: Self::EdgeWeightType) -> Result<(), GraphError>;

    /// Removes an edge from the graph.
    fn remove_edge(&mut self, edge: Edge);

    /// Returns an iterator over edge ids in the form (smaller_id, larger_id).
    fn iter_edge_ids(&self) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// Returns a vec of all edge ids in the form (smaller_id, larger_id).
    fn edge_ids(&self) -> Vec<Edge> {
        self.iter_edge_ids().collect()
    }

    /// Returns the count of neighbors at node with given id.
    /// Returns an error if the node is not in the graph.
    fn degree(&self, id: usize) -> Result<usize, GraphError>;
}
