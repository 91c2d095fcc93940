//! Array-backed binary min-heap priority queue.
//!
//! The queue owns a single contiguous buffer and never grows past the
//! capacity it was constructed with: inserting into a full queue is
//! [`Error::CapacityExceeded`], not a silent reallocation, which keeps the
//! O(log n) insert/extract bounds honest.
//!
//! Heap invariant: `heap[parent(i)] <= heap[i]` for every `i > 0`, with
//! `parent(i) = (i - 1) / 2`.

use std::cmp::Ordering;
use weft_common::utils::error::{Error, Result};

/// A score/payload pair ordered by score alone.
///
/// The algorithm engines use this as their heap element type: the score is
/// the quantity being minimized (a distance, an edge weight) and the payload
/// rides along uncompared. Equal scores therefore tie arbitrarily, which is
/// acceptable because the engines re-validate entries at extraction time
/// rather than relying on heap order for correctness.
#[derive(Debug, Clone, Copy)]
pub struct MinScored<K, T>(pub K, pub T);

impl<K: Ord, T> PartialEq for MinScored<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Ord, T> Eq for MinScored<K, T> {}

impl<K: Ord, T> PartialOrd for MinScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// An array-backed binary min-heap with a fixed capacity.
///
/// Ordering comes from the element type's `Ord`; wrap elements in
/// [`MinScored`] to order by an explicit key.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    /// Heap storage; `heap[0]` is the minimum when non-empty.
    heap: Vec<T>,
    /// Hard capacity bound fixed at construction.
    capacity: usize,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue holding at most `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of queued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` when no elements are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the capacity bound fixed at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts `element`, sifting it up until the heap invariant holds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] when the queue is full; the queue
    /// never resizes.
    pub fn insert(&mut self, element: T) -> Result<()> {
        if self.heap.len() == self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.heap.push(element);
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    /// Returns the minimum element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] when the queue is empty.
    pub fn peek_min(&self) -> Result<&T> {
        self.heap.first().ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the minimum element.
    ///
    /// The last element moves into the root slot and sifts down — swapping
    /// with its smaller child while that child is smaller — until the heap
    /// invariant holds again or it has no children.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] when the queue is empty.
    pub fn extract_min(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let Some(min) = self.heap.pop() else {
            return Err(Error::EmptyQueue);
        };
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[parent] <= self.heap[index] {
                break;
            }
            self.heap.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let mut smallest = index;
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}
