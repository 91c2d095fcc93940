//! Weighted directed graph stored as adjacency lists.
//!
//! The graph is build-once, read-many: edges are appended while the graph is
//! constructed and never removed, and no algorithm mutates the graph during a
//! run. Undirected graphs are modeled as mirrored pairs of directed edges
//! (see [`Graph::add_undirected_edge`]).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use weft_common::types::{VertexId, Weight};
use weft_common::utils::error::{Error, Result};

/// A weighted directed edge.
///
/// Immutable once constructed; algorithms only read edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex.
    pub source: VertexId,
    /// Target vertex.
    pub target: VertexId,
    /// Non-negative edge weight.
    pub weight: Weight,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub const fn new(source: VertexId, target: VertexId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (weight {})", self.source, self.target, self.weight)
    }
}

/// Per-vertex edge storage.
///
/// Most vertices in sparse graphs hold only a handful of edges; the inline
/// capacity keeps short lists off the heap.
type AdjacencyList = SmallVec<[Edge; 4]>;

/// A weighted graph stored as adjacency lists.
///
/// Vertex ids are dense `0..V` and index directly into the adjacency table.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Outgoing edges, indexed by source vertex.
    adjacency: Vec<AdjacencyList>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![AdjacencyList::new(); vertex_count],
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of directed edge entries.
    ///
    /// An undirected edge contributes two entries.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(SmallVec::len).sum()
    }

    /// Adds a directed edge from `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if either endpoint is out of range;
    /// the graph is left unchanged in that case.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        self.adjacency[source.index()].push(Edge::new(source, target, weight));
        Ok(())
    }

    /// Adds an undirected edge as a mirrored pair of directed edges.
    ///
    /// Invariant for undirected use: every edge `(u, v, w)` has a mirrored
    /// `(v, u, w)` entry, which is what the spanning-tree engines expect.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if either endpoint is out of range;
    /// the graph is left unchanged in that case.
    pub fn add_undirected_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: Weight,
    ) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        self.adjacency[source.index()].push(Edge::new(source, target, weight));
        self.adjacency[target.index()].push(Edge::new(target, source, weight));
        Ok(())
    }

    /// Returns the outgoing edges of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if `vertex` is out of range.
    pub fn out_edges(&self, vertex: VertexId) -> Result<&[Edge]> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex.index()])
    }

    /// Returns the out-degree of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if `vertex` is out of range.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex.index()].len())
    }

    /// Returns an iterator over all vertex ids.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.adjacency.len()).map(|i| VertexId::new(i as u32))
    }

    /// Checks that `vertex` is within `[0, V)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if `vertex` is out of range.
    pub fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex.index() < self.adjacency.len() {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                id: vertex.0,
                vertex_count: self.adjacency.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = Graph::new(4);
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        for vertex in graph.vertices() {
            assert_eq!(graph.out_degree(vertex).unwrap(), 0);
        }
    }

    #[test]
    fn test_add_directed_edge() {
        let mut graph = Graph::new(3);
        graph.add_edge(v(0), v(1), 10).unwrap();
        graph.add_edge(v(0), v(2), 20).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            graph.out_edges(v(0)).unwrap(),
            &[Edge::new(v(0), v(1), 10), Edge::new(v(0), v(2), 20)]
        );
        // Directed: no mirrored entry
        assert_eq!(graph.out_edges(v(1)).unwrap(), &[]);
    }

    #[test]
    fn test_add_undirected_edge_mirrors() {
        let mut graph = Graph::new(2);
        graph.add_undirected_edge(v(0), v(1), 5).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.out_edges(v(0)).unwrap(), &[Edge::new(v(0), v(1), 5)]);
        assert_eq!(graph.out_edges(v(1)).unwrap(), &[Edge::new(v(1), v(0), 5)]);
    }

    #[test]
    fn test_add_edge_rejects_invalid_vertex() {
        let mut graph = Graph::new(2);
        let err = graph.add_edge(v(0), v(2), 1).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidVertex {
                id: 2,
                vertex_count: 2
            }
        );
        // Rejected before mutating state
        assert_eq!(graph.edge_count(), 0);

        assert!(graph.add_undirected_edge(v(5), v(0), 1).is_err());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_out_edges_rejects_invalid_vertex() {
        let graph = Graph::new(1);
        assert!(graph.out_edges(v(1)).is_err());
        assert!(graph.out_degree(v(1)).is_err());
    }

    #[test]
    fn test_edge_display() {
        let edge = Edge::new(v(0), v(3), 42);
        assert_eq!(edge.to_string(), "0 -> 3 (weight 42)");
    }

    #[test]
    fn test_vertices_iterates_dense_ids() {
        let graph = Graph::new(3);
        let ids: Vec<_> = graph.vertices().collect();
        assert_eq!(ids, vec![v(0), v(1), v(2)]);
    }
}
