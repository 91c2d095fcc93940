//! Uniform wrappers over the algorithm engines.
//!
//! The free functions in [`shortest_path`](crate::shortest_path) and
//! [`mst`](crate::mst) are the primary API. These wrappers give each engine
//! a name/run surface so callers can hold algorithms as values — a registry,
//! a benchmark harness, a CLI dispatcher.

use weft_common::types::VertexId;
use weft_common::utils::error::Result;
use weft_core::graph::Graph;

use crate::mst::{self, MstResult};
use crate::shortest_path::{self, DijkstraResult};

/// A graph algorithm that can be run as a value.
pub trait GraphAlgorithm {
    /// The run's output type.
    type Output;

    /// Returns a human-readable algorithm name.
    fn name(&self) -> &'static str;

    /// Runs the algorithm against `graph`.
    ///
    /// # Errors
    ///
    /// Propagates the underlying engine's errors (invalid ids, queue
    /// capacity).
    fn run(&self, graph: &Graph) -> Result<Self::Output>;
}

/// [`shortest_path::dijkstra`] as a [`GraphAlgorithm`].
#[derive(Debug, Clone, Copy)]
pub struct DijkstraAlgorithm {
    /// Source vertex of the run.
    pub source: VertexId,
}

impl GraphAlgorithm for DijkstraAlgorithm {
    type Output = DijkstraResult;

    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn run(&self, graph: &Graph) -> Result<DijkstraResult> {
        shortest_path::dijkstra(graph, self.source)
    }
}

/// [`mst::prim`] as a [`GraphAlgorithm`].
#[derive(Debug, Clone, Copy)]
pub struct PrimAlgorithm {
    /// Start vertex of the run.
    pub start: VertexId,
}

impl GraphAlgorithm for PrimAlgorithm {
    type Output = MstResult;

    fn name(&self) -> &'static str {
        "prim"
    }

    fn run(&self, graph: &Graph) -> Result<MstResult> {
        mst::prim(graph, self.start)
    }
}

/// [`mst::kruskal`] as a [`GraphAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KruskalAlgorithm;

impl GraphAlgorithm for KruskalAlgorithm {
    type Output = MstResult;

    fn name(&self) -> &'static str {
        "kruskal"
    }

    fn run(&self, graph: &Graph) -> Result<MstResult> {
        mst::kruskal(graph)
    }
}
