//! # weft-core
//!
//! Data-structure layer for Weft: the graph model, the binary min-heap
//! priority queue, and disjoint set union.
//!
//! This crate provides the structures the algorithm engines are built on.
//! It depends only on `weft-common`.
//!
//! ## Modules
//!
//! - [`graph`] - Weighted graph stored as adjacency lists
//! - [`queue`] - Array-backed binary min-heap with a fixed capacity
//! - [`dsu`] - Union-find with path compression and union-by-rank

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dsu;
pub mod graph;
pub mod queue;

// Re-export commonly used types
pub use dsu::UnionFind;
pub use graph::{Edge, Graph};
pub use queue::{MinScored, PriorityQueue};
