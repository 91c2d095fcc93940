//! Disjoint set union over dense vertex ids.
//!
//! Union-by-rank with full path compression. `find` is iterative: one pass
//! walks parent pointers to the root, a second pass repoints every visited
//! node directly at it, so deep parent chains never recurse.

use weft_common::types::VertexId;
use weft_common::utils::error::{Error, Result};

/// Union-find over vertex ids `0..count`.
///
/// `rank` is a height upper bound used only to pick the union direction; it
/// is not an exact height once compression has run.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Creates `count` singleton sets, each vertex its own representative.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            parent: (0..count as u32).collect(),
            rank: vec![0; count],
        }
    }

    /// Returns the number of elements tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when tracking no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `vertex`.
    ///
    /// Compresses the traversed path: afterwards every node visited on the
    /// way up points directly at the representative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if `vertex` is out of range, before
    /// any state is mutated.
    pub fn find(&mut self, vertex: VertexId) -> Result<VertexId> {
        self.check_vertex(vertex)?;

        let mut root = vertex.0;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // Second pass: repoint the walked path at the root.
        let mut current = vertex.0;
        while self.parent[current as usize] != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }

        Ok(VertexId::new(root))
    }

    /// Merges the sets containing `u` and `v`.
    ///
    /// Returns `Ok(false)` without modification when both are already in the
    /// same set; callers use this (or [`UnionFind::connected`]) for cycle
    /// detection. Otherwise the lower-rank root is attached under the
    /// higher-rank root — ties attach `v`'s root under `u`'s and bump the
    /// surviving root's rank — and `Ok(true)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if either id is out of range.
    pub fn union(&mut self, u: VertexId, v: VertexId) -> Result<bool> {
        let ru = self.find(u)?.index();
        let rv = self.find(v)?.index();
        if ru == rv {
            return Ok(false);
        }

        if self.rank[ru] < self.rank[rv] {
            self.parent[ru] = rv as u32;
        } else if self.rank[ru] > self.rank[rv] {
            self.parent[rv] = ru as u32;
        } else {
            self.parent[rv] = ru as u32;
            self.rank[ru] += 1;
        }
        Ok(true)
    }

    /// Returns `true` when `u` and `v` are in the same set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if either id is out of range.
    pub fn connected(&mut self, u: VertexId, v: VertexId) -> Result<bool> {
        Ok(self.find(u)? == self.find(v)?)
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex.index() < self.parent.len() {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                id: vertex.0,
                vertex_count: self.parent.len(),
            })
        }
    }
}
