//! Single-source shortest paths (Dijkstra).
//!
//! Uses lazy deletion instead of a decrease-key operation: every successful
//! relaxation pushes a fresh copy of the vertex with its new distance, and
//! copies whose recorded distance no longer matches the distance table are
//! recognized as stale at extraction time and discarded. The queue holds at
//! most one stale entry per relaxation, so it is sized to the edge count.

use serde::{Deserialize, Serialize};
use weft_common::types::{INFINITY, VertexId, Weight};
use weft_common::utils::error::Result;
use weft_core::graph::Graph;
use weft_core::queue::{MinScored, PriorityQueue};

/// Output of a Dijkstra run.
///
/// Distances and predecessors are owned by the result, not the graph; the
/// graph stays immutable across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DijkstraResult {
    /// The source vertex the run started from.
    pub source: VertexId,
    /// Best known distance per vertex; [`INFINITY`] marks unreachable ones.
    pub distances: Vec<Weight>,
    /// Predecessor of each vertex on its shortest path; `None` for the
    /// source and for unreachable vertices.
    pub predecessors: Vec<Option<VertexId>>,
}

impl DijkstraResult {
    /// Returns the shortest distance to `target`, or `None` when `target`
    /// is unreachable or out of range.
    #[must_use]
    pub fn distance(&self, target: VertexId) -> Option<Weight> {
        match self.distances.get(target.index()) {
            Some(&distance) if distance != INFINITY => Some(distance),
            _ => None,
        }
    }

    /// Reconstructs the shortest path from the source to `target`.
    ///
    /// Follows the predecessor chain backwards and reverses it, yielding the
    /// ordered vertex sequence with the source first. Returns `None` when
    /// `target` is unreachable or out of range.
    #[must_use]
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessors[current.index()] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// A reconstructed shortest path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Vertex sequence, source first, target last.
    pub vertices: Vec<VertexId>,
    /// Total weight of the path.
    pub distance: Weight,
}

/// Computes single-source shortest paths from `source`.
///
/// Edge weights are unsigned, so the algorithm's non-negativity precondition
/// holds by construction; distance sums saturate rather than wrap.
///
/// Runs in O((V + E) log V) with the lazy-deletion queue.
///
/// # Errors
///
/// Returns [`Error::InvalidVertex`](weft_common::Error::InvalidVertex) if
/// `source` is out of range.
pub fn dijkstra(graph: &Graph, source: VertexId) -> Result<DijkstraResult> {
    graph.check_vertex(source)?;

    let vertex_count = graph.vertex_count();
    let mut distances = vec![INFINITY; vertex_count];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; vertex_count];
    distances[source.index()] = 0;

    // One slot for the source push plus at most one per successful
    // relaxation, and relaxations never outnumber the directed edges.
    let mut queue = PriorityQueue::with_capacity(graph.edge_count() + 1);
    queue.insert(MinScored(0, source))?;

    let mut settled = 0_usize;
    while !queue.is_empty() {
        let MinScored(distance, vertex) = queue.extract_min()?;

        // Stale copy: a better distance was recorded after this was pushed.
        if distance > distances[vertex.index()] {
            continue;
        }
        settled += 1;

        for edge in graph.out_edges(vertex)? {
            let candidate = distance.saturating_add(edge.weight);
            if candidate < distances[edge.target.index()] {
                distances[edge.target.index()] = candidate;
                predecessors[edge.target.index()] = Some(vertex);
                queue.insert(MinScored(candidate, edge.target))?;
            }
        }
    }

    tracing::debug!(
        "dijkstra from {}: settled {} of {} vertices",
        source,
        settled,
        vertex_count
    );

    Ok(DijkstraResult {
        source,
        distances,
        predecessors,
    })
}

/// Computes the shortest path from `source` to `target`.
///
/// Convenience over [`dijkstra`] + [`DijkstraResult::path_to`]. Returns
/// `Ok(None)` when `target` is unreachable from `source`.
///
/// # Errors
///
/// Returns [`Error::InvalidVertex`](weft_common::Error::InvalidVertex) if
/// `source` or `target` is out of range.
pub fn dijkstra_path(
    graph: &Graph,
    source: VertexId,
    target: VertexId,
) -> Result<Option<ShortestPath>> {
    graph.check_vertex(target)?;
    let result = dijkstra(graph, source)?;

    let Some(distance) = result.distance(target) else {
        return Ok(None);
    };
    let Some(vertices) = result.path_to(target) else {
        return Ok(None);
    };
    Ok(Some(ShortestPath { vertices, distance }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_common::utils::error::Error;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    /// Directed graph used across the tests:
    /// 0->1(10), 0->3(30), 0->4(100), 1->2(50), 2->4(10), 3->2(20), 3->4(60)
    fn sample_graph() -> Graph {
        let mut graph = Graph::new(5);
        graph.add_edge(v(0), v(1), 10).unwrap();
        graph.add_edge(v(0), v(3), 30).unwrap();
        graph.add_edge(v(0), v(4), 100).unwrap();
        graph.add_edge(v(1), v(2), 50).unwrap();
        graph.add_edge(v(2), v(4), 10).unwrap();
        graph.add_edge(v(3), v(2), 20).unwrap();
        graph.add_edge(v(3), v(4), 60).unwrap();
        graph
    }

    #[test]
    fn test_distances_from_source() {
        let result = dijkstra(&sample_graph(), v(0)).unwrap();
        assert_eq!(result.distances, vec![0, 10, 50, 30, 60]);
        assert_eq!(result.distance(v(0)), Some(0));
        assert_eq!(result.distance(v(4)), Some(60));
    }

    #[test]
    fn test_path_reconstruction() {
        let result = dijkstra(&sample_graph(), v(0)).unwrap();
        assert_eq!(result.path_to(v(4)).unwrap(), vec![v(0), v(3), v(2), v(4)]);
        assert_eq!(result.path_to(v(0)).unwrap(), vec![v(0)]);
    }

    #[test]
    fn test_dijkstra_path_convenience() {
        let path = dijkstra_path(&sample_graph(), v(0), v(4)).unwrap().unwrap();
        assert_eq!(
            path,
            ShortestPath {
                vertices: vec![v(0), v(3), v(2), v(4)],
                distance: 60,
            }
        );
    }

    #[test]
    fn test_relaxation_improves_earlier_estimate() {
        // Vertex 2 is first reached through 1 (cost 60), later improved
        // through 3 (cost 50); the stale queue entry must be discarded.
        let result = dijkstra(&sample_graph(), v(0)).unwrap();
        assert_eq!(result.distance(v(2)), Some(50));
        assert_eq!(result.predecessors[2], Some(v(3)));
    }

    #[test]
    fn test_unreachable_vertices() {
        let mut graph = Graph::new(4);
        graph.add_edge(v(0), v(1), 1).unwrap();
        // 2 and 3 are a separate component
        graph.add_edge(v(2), v(3), 1).unwrap();

        let result = dijkstra(&graph, v(0)).unwrap();
        assert_eq!(result.distances[2], INFINITY);
        assert_eq!(result.distance(v(2)), None);
        assert_eq!(result.predecessors[2], None);
        assert_eq!(result.path_to(v(3)), None);
        assert_eq!(dijkstra_path(&graph, v(0), v(3)).unwrap(), None);
    }

    #[test]
    fn test_single_vertex_graph() {
        let graph = Graph::new(1);
        let result = dijkstra(&graph, v(0)).unwrap();
        assert_eq!(result.distances, vec![0]);
        assert_eq!(result.path_to(v(0)).unwrap(), vec![v(0)]);
    }

    #[test]
    fn test_invalid_source_rejected() {
        let graph = Graph::new(2);
        assert_eq!(
            dijkstra(&graph, v(2)).unwrap_err(),
            Error::InvalidVertex {
                id: 2,
                vertex_count: 2
            }
        );
        assert!(dijkstra_path(&graph, v(0), v(7)).is_err());
    }

    #[test]
    fn test_directed_edges_are_one_way() {
        let mut graph = Graph::new(2);
        graph.add_edge(v(0), v(1), 3).unwrap();

        let from_target = dijkstra(&graph, v(1)).unwrap();
        assert_eq!(from_target.distance(v(0)), None);
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut graph = Graph::new(3);
        graph.add_edge(v(0), v(1), 0).unwrap();
        graph.add_edge(v(1), v(2), 0).unwrap();

        let result = dijkstra(&graph, v(0)).unwrap();
        assert_eq!(result.distances, vec![0, 0, 0]);
        assert_eq!(result.path_to(v(2)).unwrap(), vec![v(0), v(1), v(2)]);
    }
}
