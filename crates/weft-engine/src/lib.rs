//! # weft-engine
//!
//! Algorithm engines for Weft: single-source shortest paths and minimum
//! spanning trees over the `weft-core` graph model.
//!
//! Each run owns its scratch state (distance tables, visited sets, its
//! priority queue or union-find instance) exclusively; the graph itself is
//! never mutated by a run.
//!
//! ## Modules
//!
//! - [`shortest_path`] - Dijkstra with a lazy-deletion priority queue
//! - [`mst`] - Prim (edge relaxation) and Kruskal (sort + union-find)
//! - [`traits`] - Uniform wrappers ([`GraphAlgorithm`]) over the engines

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod mst;
pub mod shortest_path;
pub mod traits;

// Shortest path algorithms
pub use shortest_path::{DijkstraResult, ShortestPath, dijkstra, dijkstra_path};

// Minimum Spanning Tree algorithms
pub use mst::{MstResult, kruskal, prim};

// Algorithm wrappers (for registry integration)
pub use traits::{DijkstraAlgorithm, GraphAlgorithm, KruskalAlgorithm, PrimAlgorithm};
