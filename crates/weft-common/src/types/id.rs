//! Dense vertex identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a vertex in a graph.
///
/// Vertex ids are dense indices in `[0, V)` where `V` is the vertex count of
/// the owning graph. They index directly into per-vertex tables; there is no
/// hashing layer in between.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Creates a vertex id from a raw index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the id as an array index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
