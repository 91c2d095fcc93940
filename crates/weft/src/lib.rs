//! # Weft
//!
//! A weighted-graph algorithms engine: single-source shortest paths and
//! minimum spanning trees over a shared array-backed min-heap.
//!
//! Build a [`Graph`] with dense vertex ids, then hand it to one of the
//! engines. Each run owns its own scratch state; the graph is never mutated
//! by a run, so one graph can serve any number of sequential runs.
//!
//! ## Algorithms
//!
//! | Function | Result | Notes |
//! | -------- | ------ | ----- |
//! | [`dijkstra`] | [`DijkstraResult`] | Lazy-deletion queue, no decrease-key |
//! | [`dijkstra_path`] | [`ShortestPath`] | One source/target pair |
//! | [`prim`] | [`MstResult`] | Grows from a start vertex |
//! | [`kruskal`] | [`MstResult`] | Global sort + union-find |
//!
//! ## Quick Start
//!
//! ```rust
//! use weft::{Graph, VertexId, dijkstra, kruskal};
//!
//! let mut graph = Graph::new(3);
//! graph.add_undirected_edge(VertexId::new(0), VertexId::new(1), 4)?;
//! graph.add_undirected_edge(VertexId::new(1), VertexId::new(2), 3)?;
//! graph.add_undirected_edge(VertexId::new(0), VertexId::new(2), 9)?;
//!
//! let paths = dijkstra(&graph, VertexId::new(0))?;
//! assert_eq!(paths.distance(VertexId::new(2)), Some(7));
//!
//! let tree = kruskal(&graph)?;
//! assert_eq!(tree.total_weight, 7);
//! # Ok::<(), weft::Error>(())
//! ```

// Re-export the engines
pub use weft_engine::{
    DijkstraAlgorithm, DijkstraResult, GraphAlgorithm, KruskalAlgorithm, MstResult, PrimAlgorithm,
    ShortestPath, dijkstra, dijkstra_path, kruskal, prim,
};

// Re-export the data structures - you'll need these to build inputs
pub use weft_core::{Edge, Graph, MinScored, PriorityQueue, UnionFind};

// Re-export foundation types
pub use weft_common::types::{INFINITY, VertexId, Weight};
pub use weft_common::utils::error::{Error, Result};
