//! Minimum spanning trees (Prim, Kruskal).
//!
//! Both engines expect undirected graphs modeled as mirrored directed edge
//! pairs (see [`Graph::add_undirected_edge`]). Prim grows a tree outwards
//! from a start vertex through the priority queue, discarding entries whose
//! target has already joined — the lazy-deletion analogue of the
//! shortest-path engine. Kruskal sorts the distinct edge set globally and
//! filters cycles through union-find.

use serde::{Deserialize, Serialize};
use weft_common::types::{VertexId, Weight};
use weft_common::utils::error::Result;
use weft_core::dsu::UnionFind;
use weft_core::graph::{Edge, Graph};
use weft_core::queue::{MinScored, PriorityQueue};

/// Output of a minimum-spanning-tree run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MstResult {
    /// Accepted edges, in the order the algorithm accepted them.
    pub edges: Vec<Edge>,
    /// Sum of the accepted edge weights.
    pub total_weight: Weight,
}

impl MstResult {
    /// Returns the number of accepted edges.
    ///
    /// `V - 1` for a connected graph, `V - components` in general.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Computes a minimum spanning tree by edge relaxation from `start` (Prim).
///
/// On a disconnected graph this yields the spanning tree of the start
/// vertex's component only; validating component membership is the caller's
/// concern, not an error here.
///
/// # Errors
///
/// Returns [`Error::InvalidVertex`](weft_common::Error::InvalidVertex) if
/// `start` is out of range.
pub fn prim(graph: &Graph, start: VertexId) -> Result<MstResult> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut edges = Vec::new();
    let mut total_weight: Weight = 0;

    // Each directed entry is pushed at most once, when its source joins
    // the tree.
    let mut queue = PriorityQueue::with_capacity(graph.edge_count() + 1);

    visited[start.index()] = true;
    for edge in graph.out_edges(start)? {
        queue.insert(MinScored(edge.weight, *edge))?;
    }

    while !queue.is_empty() {
        let MinScored(weight, edge) = queue.extract_min()?;

        // Stale entry: a cheaper edge already connected this vertex.
        if visited[edge.target.index()] {
            continue;
        }

        visited[edge.target.index()] = true;
        total_weight = total_weight.saturating_add(weight);
        edges.push(edge);

        for next in graph.out_edges(edge.target)? {
            if !visited[next.target.index()] {
                queue.insert(MinScored(next.weight, *next))?;
            }
        }
    }

    tracing::debug!(
        "prim from {}: accepted {} edges, total weight {}",
        start,
        edges.len(),
        total_weight
    );

    Ok(MstResult {
        edges,
        total_weight,
    })
}

/// Computes a minimum spanning forest by global edge sort plus union-find
/// (Kruskal).
///
/// Mirrored directed pairs are deduplicated by keeping the entries with
/// `source <= target`. The sort is stable, so edges of equal weight are
/// considered in insertion order and the accepted edge set is deterministic.
/// Accepts `V - components` edges.
///
/// # Errors
///
/// Propagates errors from the underlying structures; with a well-formed
/// graph this does not fail.
pub fn kruskal(graph: &Graph) -> Result<MstResult> {
    // First step: collect the distinct undirected edge set, sorted by weight.
    let mut all_edges: Vec<Edge> = Vec::with_capacity(graph.edge_count() / 2 + 1);
    for vertex in graph.vertices() {
        for edge in graph.out_edges(vertex)? {
            if edge.source <= edge.target {
                all_edges.push(*edge);
            }
        }
    }
    all_edges.sort_by_key(|edge| edge.weight);

    // Second step: scan ascending, accepting edges that join two sets.
    let mut dsu = UnionFind::new(graph.vertex_count());
    let mut edges = Vec::new();
    let mut total_weight: Weight = 0;

    for edge in all_edges {
        if dsu.find(edge.source)? != dsu.find(edge.target)? {
            dsu.union(edge.source, edge.target)?;
            total_weight = total_weight.saturating_add(edge.weight);
            edges.push(edge);
        }
    }

    tracing::debug!(
        "kruskal: accepted {} edges, total weight {}",
        edges.len(),
        total_weight
    );

    Ok(MstResult {
        edges,
        total_weight,
    })
}
