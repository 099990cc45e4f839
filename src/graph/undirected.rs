use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};
use log::debug;

/// An undirected graph implementation using adjacency lists.
///
/// Vertex ids are 1-based in every method; `adjacency[v - 1]` holds the edges
/// of vertex `v`. The graph is built once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Weight,
{
    /// Number of undirected edges, each stored twice in `adjacency`
    edge_count: usize,

    /// Edges for each vertex: [(neighbor, weight)]
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> UndirectedGraph<W>
where
    W: Weight,
{
    /// Builds the adjacency lists from `(u, v, w)` triples.
    ///
    /// Every edge is appended to the lists of both endpoints. Fails when
    /// `vertex_count` is zero, an endpoint lies outside `1..=vertex_count`, or a
    /// weight is negative.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::EmptyGraph);
        }

        let mut adjacency = vec![Vec::new(); vertex_count];
        for &(u, v, w) in edges {
            for endpoint in [u, v] {
                if endpoint == 0 || endpoint > vertex_count {
                    return Err(Error::InvalidVertex(endpoint));
                }
            }
            if w < W::zero() {
                return Err(Error::NegativeWeight(u, v));
            }

            adjacency[u - 1].push((v, w));
            adjacency[v - 1].push((u, w));
        }

        debug!(
            "built undirected graph with {} vertices and {} edges",
            vertex_count,
            edges.len()
        );

        Ok(UndirectedGraph {
            edge_count: edges.len(),
            adjacency,
        })
    }

    /// Number of adjacency entries of a vertex (self-loops count twice)
    pub fn degree(&self, vertex: usize) -> usize {
        if self.has_vertex(vertex) {
            self.adjacency[vertex - 1].len()
        } else {
            0
        }
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if self.has_vertex(vertex) {
            Box::new(self.adjacency[vertex - 1].iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex >= 1 && vertex <= self.adjacency.len()
    }

    fn has_edge(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).any(|(neighbor, _)| neighbor == b)
    }

    fn get_edge_weight(&self, a: usize, b: usize) -> Option<W> {
        self.neighbors(a)
            .filter(|&(neighbor, _)| neighbor == b)
            .map(|(_, weight)| weight)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_stored_in_both_directions() {
        let graph = UndirectedGraph::from_edges(3, &[(1, 2, 4u32), (2, 3, 1)]).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.has_edge(1, 2));
        assert!(graph.has_edge(2, 1));
        assert!(!graph.has_edge(1, 3));
        assert_eq!(graph.degree(2), 2);
        assert_eq!(graph.neighbors(2).collect::<Vec<_>>(), vec![(1, 4), (3, 1)]);
    }

    #[test]
    fn parallel_edges_report_lightest_weight() {
        let graph = UndirectedGraph::from_edges(2, &[(1, 2, 9u32), (2, 1, 3)]).unwrap();
        assert_eq!(graph.get_edge_weight(1, 2), Some(3));
        assert_eq!(graph.get_edge_weight(2, 1), Some(3));
        assert_eq!(graph.get_edge_weight(1, 1), None);
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(
            UndirectedGraph::<u32>::from_edges(0, &[]).unwrap_err(),
            Error::EmptyGraph
        );
        assert_eq!(
            UndirectedGraph::from_edges(2, &[(1, 3, 1u32)]).unwrap_err(),
            Error::InvalidVertex(3)
        );
        assert_eq!(
            UndirectedGraph::from_edges(2, &[(0, 1, 1u32)]).unwrap_err(),
            Error::InvalidVertex(0)
        );
        assert_eq!(
            UndirectedGraph::from_edges(2, &[(1, 2, -4i64)]).unwrap_err(),
            Error::NegativeWeight(1, 2)
        );
    }

    #[test]
    fn out_of_range_vertex_has_no_neighbors() {
        let graph = UndirectedGraph::from_edges(1, &[] as &[(usize, usize, u32)]).unwrap();
        assert!(graph.has_vertex(1));
        assert!(!graph.has_vertex(0));
        assert!(!graph.has_vertex(2));
        assert_eq!(graph.neighbors(5).count(), 0);
    }
}
