use crate::graph::{Edge, GraphError, UndirectedGraph};

/// Implements a weighted, undirected graph using a symmetric adjacency matrix as datastructure.
///
/// Both `adjacency_matrix[i][j]` and `adjacency_matrix[j][i]` hold the weight of edge `(i, j)`,
/// which keeps edge lookups O(1) from either end. The diagonal is always `None`.
#[derive(Debug, PartialEq, Clone)]
pub struct MatrixGraph<Ew> {
    adjacency_matrix: Vec<Vec<Option<Ew>>>,
    size: usize,
}

impl<Ew: Clone> MatrixGraph<Ew> {
    /// Creates a new Graph instance with `order` nodes and the given weighted edges.
    /// If any of the edges is a loop, a duplicate or touches a node outside of `0..order`
    /// an error is returned.
    pub fn new(order: usize, edges: Vec<(usize, usize, Ew)>) -> Result<Self, GraphError> {
        let mut graph = Self::with_order(order);
        for (from, to, weight) in edges.into_iter() {
            graph.add_edge((from, to), weight)?;
        }

        Ok(graph)
    }

    /// Constructs a MatrixGraph with `order` nodes and no edges.
    pub fn with_order(order: usize) -> Self {
        MatrixGraph {
            // The initialization of adjacency_matrix makes it necessary, that Ew is of type Clone.
            adjacency_matrix: (0..order).map(|_| vec![None; order]).collect(),
            size: 0,
        }
    }

    fn check_edge(&self, edge: Edge) -> Result<(), GraphError> {
        let (start_node, end_node) = edge;
        if start_node >= self.order() {
            return Err(GraphError::MissingNode(start_node));
        } else if end_node >= self.order() {
            return Err(GraphError::MissingNode(end_node));
        } else if start_node == end_node {
            return Err(GraphError::SelfLoop(start_node));
        }

        Ok(())
    }
}

impl<Ew: Clone> Default for MatrixGraph<Ew> {
    fn default() -> Self {
        Self::with_order(0)
    }
}

impl<Ew: Clone> UndirectedGraph for MatrixGraph<Ew> {
    type EdgeWeightType = Ew;

    fn order(&self) -> usize {
        self.adjacency_matrix.len()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn clear(&mut self, order: usize) {
        self.adjacency_matrix = (0..order).map(|_| vec![None; order]).collect();
        self.size = 0;
    }

    fn has_edge(&self, edge: Edge) -> bool {
        let (start_node, end_node) = edge;
        self.adjacency_matrix
            .get(start_node)
            .and_then(|edges| edges.get(end_node))
            .map_or(false, Option::is_some)
    }

    fn edge_weight(&self, edge: Edge) -> Result<&Ew, GraphError> {
        let (start_node, end_node) = edge;
        self.adjacency_matrix
            .get(start_node)
            .and_then(|edges| edges.get(end_node))
            .and_then(Option::as_ref)
            .ok_or(GraphError::MissingEdge(edge))
    }

    fn add_edge(&mut self, edge: Edge, weight: Ew) -> Result<(), GraphError> {
        if self.has_edge(edge) {
            return Err(GraphError::DuplicateEdge(edge));
        }

        self.change_edge(edge, weight)
    }

    fn change_edge(&mut self, edge: Edge, weight: Ew) -> Result<(), GraphError> {
        self.check_edge(edge)?;
        let (start_node, end_node) = edge;

        if !self.has_edge(edge) {
            // Adding an edge increases size by one.
            self.size += 1;
        }
        self.adjacency_matrix[end_node][start_node] = Some(weight.clone());
        self.adjacency_matrix[start_node][end_node] = Some(weight);
        Ok(())
    }

    fn remove_edge(&mut self, edge: Edge) {
        if self.has_edge(edge) {
            self.adjacency_matrix[edge.0][edge.1] = None;
            self.adjacency_matrix[edge.1][edge.0] = None;
            // Removing an edge reduces size by one.
            self.size -= 1;
        }
    }

    fn iter_edge_ids(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        // Only the upper triangle is walked, so every edge is reported once.
        Box::new(
            self.adjacency_matrix
                .iter()
                .enumerate()
                .flat_map(|(i, edges)| {
                    edges
                        .iter()
                        .enumerate()
                        .skip(i + 1)
                        .filter(|(_, weight)| weight.is_some())
                        .map(move |(j, _)| (i, j))
                }),
        )
    }

    fn degree(&self, id: usize) -> Result<usize, GraphError> {
        let edges = self
            .adjacency_matrix
            .get(id)
            .ok_or(GraphError::MissingNode(id))?;

        Ok(edges.iter().filter(|weight| weight.is_some()).count())
    }
}
