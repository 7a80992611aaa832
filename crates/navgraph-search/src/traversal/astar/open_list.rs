//! Indexed binary min-heap used as the A* open list.
//!
//! Entries are node indices keyed by estimated total cost. A position table
//! maps every node index to its current heap slot, so a record already in
//! the heap can be removed in O(log n) when a cheaper route to it is found,
//! then reinserted with its new key.
//!
//! Keys are ordered with [`f32::total_cmp`], so a misbehaving heuristic that
//! yields NaN produces a poorly ordered search, never a panic.

use std::cmp::Ordering;

/// Position-table marker for indices not in the heap.
const ABSENT: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    index: usize,
    key: f32,
}

/// Min-heap of node indices with O(log n) arbitrary removal.
#[derive(Debug, Default)]
pub struct OpenList {
    heap: Vec<HeapEntry>,
    positions: Vec<usize>,
}

impl OpenList {
    /// Create an empty open list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: Vec::new(),
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `index` is currently in the heap.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.positions.get(index).is_some_and(|&pos| pos != ABSENT)
    }

    /// Key of `index` if it is in the heap.
    pub fn key_of(&self, index: usize) -> Option<f32> {
        match self.positions.get(index) {
            Some(&pos) if pos != ABSENT => Some(self.heap[pos].key),
            _ => None,
        }
    }

    /// Smallest entry without removing it.
    pub fn peek_min(&self) -> Option<(usize, f32)> {
        self.heap.first().map(|entry| (entry.index, entry.key))
    }

    /// Insert `index` with `key`.
    ///
    /// An index must be removed before it is inserted again; the engine
    /// keeps exactly one entry per open record.
    pub fn insert(&mut self, index: usize, key: f32) {
        debug_assert!(!self.contains(index), "index {index} already in open list");
        if index >= self.positions.len() {
            self.positions.resize(index + 1, ABSENT);
        }
        let pos = self.heap.len();
        self.heap.push(HeapEntry { index, key });
        self.positions[index] = pos;
        self.sift_up(pos);
    }

    /// Remove and return the index with the smallest key.
    pub fn extract_min(&mut self) -> Option<usize> {
        if self.heap.is_empty() {
            return None;
        }
        let min = self.heap[0].index;
        self.remove_at(0);
        Some(min)
    }

    /// Remove `index` from the heap. Returns `false` if it was not present.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.positions.get(index) {
            Some(&pos) if pos != ABSENT => {
                self.remove_at(pos);
                true
            }
            _ => false,
        }
    }

    /// Remove every entry.
    ///
    /// Only the slots of entries still in the heap are touched, so the cost
    /// is proportional to the heap size rather than the position table.
    pub fn clear(&mut self) {
        for entry in self.heap.drain(..) {
            self.positions[entry.index] = ABSENT;
        }
    }

    fn remove_at(&mut self, pos: usize) {
        let last = self.heap.len() - 1;
        self.swap(pos, last);
        if let Some(removed) = self.heap.pop() {
            self.positions[removed.index] = ABSENT;
        }
        if pos < self.heap.len() {
            self.sift_down(pos);
            self.sift_up(pos);
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].key.total_cmp(&self.heap[b].key) == Ordering::Less
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].index] = a;
        self.positions[self.heap[b].index] = b;
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, pos) {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }
}
