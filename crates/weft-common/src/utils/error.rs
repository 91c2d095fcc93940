//! Error types shared across all Weft crates.

use thiserror::Error;

/// Result alias used throughout Weft.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the graph model, the containers, and the engines.
///
/// All failures are immediate and synchronous; there is no I/O and nothing
/// to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An insert was attempted on a full priority queue.
    ///
    /// The queue never grows past its construction capacity; the failure is
    /// surfaced to the caller instead of silently resizing.
    #[error("priority queue capacity exceeded ({capacity} elements)")]
    CapacityExceeded {
        /// The fixed capacity of the queue.
        capacity: usize,
    },

    /// `peek_min` or `extract_min` was called on an empty queue.
    ///
    /// Indicates a logic error in the caller, such as querying past
    /// termination of an algorithm loop.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// A vertex id outside `[0, V)` was passed to an operation.
    ///
    /// Rejected before any state is mutated.
    #[error("vertex id {id} out of range (vertex count {vertex_count})")]
    InvalidVertex {
        /// The offending id.
        id: u32,
        /// Vertex count of the structure that rejected the id.
        vertex_count: usize,
    },
}
